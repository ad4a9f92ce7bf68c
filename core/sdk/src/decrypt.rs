//! Decryption through the gateway.
//!
//! Decryption is authorized by an EIP-712 signature binding the requesting
//! account to the target contract. Failures are swallowed: a decrypt call
//! always yields a [`DecryptionResult`], with `success = false` and a zero
//! value on any signing, transport, or response-shape error. The cause is
//! logged, never raised.

use crate::error::{Result, SdkError};
use crate::session::SessionContext;
use alloy_primitives::{Address, U256};
use alloy_sol_types::SolStruct;
use fhevm_types::{
    decryption_domain, CiphertextHandle, Decryption, DecryptionRequestBody, DecryptionResponseBody,
};
use futures::future::join_all;
use std::str::FromStr;

/// One handle to decrypt, scoped to the contract holding it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptionRequest {
    pub contract_address: Address,
    pub handle: CiphertextHandle,
}

/// Outcome of a decrypt call. `value` is zero whenever `success` is false.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecryptionResult {
    pub value: U256,
    pub success: bool,
}

impl DecryptionResult {
    fn failed() -> Self {
        Self {
            value: U256::ZERO,
            success: false,
        }
    }
}

/// Decrypts a single handle. Never fails: errors become
/// `{ value: 0, success: false }` after a warning log.
pub async fn decrypt_one(
    session: &SessionContext,
    request: &DecryptionRequest,
) -> DecryptionResult {
    match try_decrypt(session, request).await {
        Ok(value) => DecryptionResult {
            value,
            success: true,
        },
        Err(e) => {
            tracing::warn!("Decryption failed for handle {}: {}", request.handle, e);
            DecryptionResult::failed()
        }
    }
}

/// Decrypts a batch concurrently. Every request runs to completion and the
/// results come back in input order; per-item failures follow the
/// [`decrypt_one`] swallowing rule. An empty batch yields an empty vec
/// without touching the network.
pub async fn decrypt_many(
    session: &SessionContext,
    requests: &[DecryptionRequest],
) -> Vec<DecryptionResult> {
    join_all(requests.iter().map(|r| decrypt_one(session, r))).await
}

async fn try_decrypt(session: &SessionContext, request: &DecryptionRequest) -> Result<U256> {
    let domain = decryption_domain(session.chain_id(), request.contract_address);
    let auth = Decryption::new(session.address(), request.contract_address);
    let signature = session
        .wallet()
        .sign_hash(&auth.eip712_signing_hash(&domain))
        .map_err(|e| SdkError::Signing(e.to_string()))?;

    let body = DecryptionRequestBody {
        contract_address: request.contract_address.to_string(),
        handle: request.handle.to_hex_prefixed(),
        public_key: session.address().to_string(),
        signature: format!("0x{}", hex::encode(signature)),
    };

    let response = session
        .http()
        .post(session.decrypt_url())
        .json(&body)
        .send()
        .await?;
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(SdkError::Network(format!(
            "Gateway returned status {status}: {text}"
        )));
    }

    let parsed: DecryptionResponseBody = response.json().await?;
    U256::from_str(parsed.value.trim()).map_err(|e| {
        SdkError::Network(format!(
            "Gateway returned malformed value {:?}: {e}",
            parsed.value
        ))
    })
}
