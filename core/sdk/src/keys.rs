//! Fetching the chain-wide FHE public key from the gateway.

use crate::consts::PUBLIC_KEY_ROUTE;
use crate::error::{Result, SdkError};
use crate::instance::FhevmKeys;
use fhevm_types::PublicKeyResponse;

/// Fetches and deserializes the compact FHE public key served by the
/// gateway. The body is `{ "publicKey": "<hex>" }` where the hex payload is
/// a safe-serialized `CompactPublicKey`.
pub async fn fetch_public_key(client: &reqwest::Client, gateway_url: &str) -> Result<FhevmKeys> {
    let url = format!("{}{}", gateway_url.trim_end_matches('/'), PUBLIC_KEY_ROUTE);
    tracing::info!("Fetching FHE public key from {}", url);

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SdkError::Network(format!(
            "Public key fetch failed with status {status}: {body}"
        )));
    }

    let body: PublicKeyResponse = response.json().await?;
    let bytes = parse_hex(&body.public_key)?;
    let keys = FhevmKeys::from_bytes(&bytes)?;
    tracing::info!("Fetched FHE public key ({} bytes)", bytes.len());
    Ok(keys)
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s)
        .map_err(|e| SdkError::Network(format!("Gateway returned invalid public key hex: {e}")))
}
