//! Typed encoder dispatch.
//!
//! [`encrypt`] is the generic entry point: it range-checks the value for the
//! kind, then packs it under the session's FHE public key. The typed
//! wrappers convert native arguments and delegate, so validation and packing
//! live in one place. [`encrypt_str`] is the string boundary used by CLIs
//! and frontends.

use crate::error::Result;
use crate::session::SessionContext;
use crate::validate::validate_value;
use alloy_primitives::{Address, U256};
use fhevm_types::{EncryptedPayload, FheKind};

/// Encrypts one value of the given kind under the session's public key.
///
/// Values above the kind's maximum are rejected with a validation error
/// before any FHE work.
pub fn encrypt(session: &SessionContext, kind: FheKind, value: U256) -> Result<EncryptedPayload> {
    if value > kind.max_value() {
        tracing::warn!(
            "Rejecting {} encryption: {} exceeds maximum {}",
            kind,
            value,
            kind.max_value()
        );
        return Err(crate::error::SdkError::Validation(format!(
            "Value exceeds maximum for {}: {} > {}",
            kind,
            value,
            kind.max_value()
        )));
    }
    session.keys().encrypt(kind, value)
}

/// String-boundary dispatch: parses the kind tag and the value text, then
/// encrypts. Unknown tags yield `UnsupportedKind` carrying the tag.
pub fn encrypt_str(
    session: &SessionContext,
    kind_tag: &str,
    value: &str,
) -> Result<EncryptedPayload> {
    let kind = FheKind::parse(kind_tag)?;
    let value = validate_value(kind, value)?;
    encrypt(session, kind, value)
}

pub fn encrypt_bool(session: &SessionContext, value: bool) -> Result<EncryptedPayload> {
    encrypt(session, FheKind::Bool, U256::from(value as u8))
}

pub fn encrypt_u8(session: &SessionContext, value: u8) -> Result<EncryptedPayload> {
    encrypt(session, FheKind::Uint8, U256::from(value))
}

pub fn encrypt_u16(session: &SessionContext, value: u16) -> Result<EncryptedPayload> {
    encrypt(session, FheKind::Uint16, U256::from(value))
}

pub fn encrypt_u32(session: &SessionContext, value: u32) -> Result<EncryptedPayload> {
    encrypt(session, FheKind::Uint32, U256::from(value))
}

pub fn encrypt_u64(session: &SessionContext, value: u64) -> Result<EncryptedPayload> {
    encrypt(session, FheKind::Uint64, U256::from(value))
}

pub fn encrypt_address(session: &SessionContext, address: Address) -> Result<EncryptedPayload> {
    encrypt(
        session,
        FheKind::Address,
        U256::from_be_slice(address.as_slice()),
    )
}
