//! Input validation, usable before a session exists.
//!
//! Everything here is pure and cheap: these checks run before any FHE or
//! network work so bad inputs fail fast with a message naming the constraint.

use crate::consts::MAX_CHAIN_ID;
use crate::error::{Result, SdkError};
use alloy_primitives::{Address, U256};
use fhevm_types::{CiphertextHandle, FheKind};
use std::str::FromStr;

/// Parses and range-checks a plaintext value for the given kind.
///
/// Numeric kinds accept decimal or 0x-hex text. `bool` accepts
/// `true`/`false`/`1`/`0`. `address` accepts a 0x-prefixed 20-byte hex
/// address and yields its 160-bit integer value.
pub fn validate_value(kind: FheKind, text: &str) -> Result<U256> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SdkError::Validation(format!(
            "Empty value for {}",
            kind
        )));
    }

    let value = match kind {
        FheKind::Bool => match text {
            "true" | "1" => U256::from(1u8),
            "false" | "0" => U256::ZERO,
            other => {
                return Err(SdkError::Validation(format!(
                    "Invalid boolean value: expected true/false/1/0, got {:?}",
                    other
                )))
            }
        },
        FheKind::Address => {
            let address = validate_address(text)?;
            U256::from_be_slice(address.as_slice())
        }
        _ => {
            if text.starts_with('-') {
                return Err(SdkError::Validation(format!(
                    "Negative value for {}: {}",
                    kind, text
                )));
            }
            U256::from_str(text).map_err(|e| {
                SdkError::Validation(format!("Invalid numeric value {:?}: {}", text, e))
            })?
        }
    };

    let max = kind.max_value();
    if value > max {
        return Err(SdkError::Validation(format!(
            "Value exceeds maximum for {}: {} > {}",
            kind, value, max
        )));
    }

    Ok(value)
}

/// Validates a 0x-prefixed, 20-byte hex address. Mixed case is accepted:
/// the EIP-55 checksum is not enforced.
pub fn validate_address(text: &str) -> Result<Address> {
    let text = text.trim();
    if !text.starts_with("0x") {
        return Err(SdkError::Validation(format!(
            "Address must start with 0x: {:?}",
            text
        )));
    }
    Address::from_str(text)
        .map_err(|e| SdkError::Validation(format!("Invalid address {:?}: {}", text, e)))
}

/// A chain id is valid when it is positive and at most 2^53 - 1
pub fn is_valid_chain_id(chain_id: u64) -> bool {
    chain_id > 0 && chain_id <= MAX_CHAIN_ID
}

/// A URL is valid when it parses and its scheme is http or https
pub fn is_valid_url(text: &str) -> bool {
    match reqwest::Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Validates a ciphertext handle: 32-byte hex with optional 0x prefix,
/// not all zeros.
pub fn validate_handle(text: &str) -> Result<CiphertextHandle> {
    let handle = CiphertextHandle::from_str(text)?;
    if !handle.is_valid() {
        return Err(SdkError::Validation(format!(
            "Handle must not be all zeros: {}",
            text
        )));
    }
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_maxima() {
        // Largest accepted value for every kind
        assert_eq!(
            validate_value(FheKind::Uint8, "255").unwrap(),
            U256::from(255u64)
        );
        assert_eq!(
            validate_value(FheKind::Uint16, "65535").unwrap(),
            U256::from(65535u64)
        );
        assert_eq!(
            validate_value(FheKind::Uint32, "4294967295").unwrap(),
            U256::from(4294967295u64)
        );
        assert_eq!(
            validate_value(FheKind::Uint64, "18446744073709551615").unwrap(),
            U256::from(18446744073709551615u64)
        );

        // One above is rejected
        validate_value(FheKind::Uint8, "256").unwrap_err();
        validate_value(FheKind::Uint16, "65536").unwrap_err();
        validate_value(FheKind::Uint32, "4294967296").unwrap_err();
        validate_value(FheKind::Uint64, "18446744073709551616").unwrap_err();
    }

    #[test]
    fn test_error_names_kind_and_maximum() {
        let err = validate_value(FheKind::Uint8, "256").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("uint8"), "got: {msg}");
        assert!(msg.contains("255"), "got: {msg}");
    }

    #[test]
    fn test_bool_forms() {
        assert_eq!(validate_value(FheKind::Bool, "true").unwrap(), U256::from(1u8));
        assert_eq!(validate_value(FheKind::Bool, "1").unwrap(), U256::from(1u8));
        assert_eq!(validate_value(FheKind::Bool, "false").unwrap(), U256::ZERO);
        assert_eq!(validate_value(FheKind::Bool, "0").unwrap(), U256::ZERO);
        validate_value(FheKind::Bool, "2").unwrap_err();
        validate_value(FheKind::Bool, "yes").unwrap_err();
    }

    #[test]
    fn test_numeric_forms() {
        // 0x-hex accepted alongside decimal
        assert_eq!(
            validate_value(FheKind::Uint16, "0xff").unwrap(),
            U256::from(255u64)
        );
        // Whitespace trimmed
        assert_eq!(
            validate_value(FheKind::Uint8, " 7 ").unwrap(),
            U256::from(7u64)
        );
        validate_value(FheKind::Uint8, "").unwrap_err();
        validate_value(FheKind::Uint8, "-1").unwrap_err();
        validate_value(FheKind::Uint8, "12abc").unwrap_err();
    }

    #[test]
    fn test_address_values() {
        let value = validate_value(
            FheKind::Address,
            "0x00000000000000000000000000000000000000ff",
        )
        .unwrap();
        assert_eq!(value, U256::from(255u64));

        // Max address value is accepted
        validate_value(
            FheKind::Address,
            "0xffffffffffffffffffffffffffffffffffffffff",
        )
        .unwrap();
    }

    #[test]
    fn test_address_shapes() {
        validate_address("0x1111111111111111111111111111111111111111").unwrap();
        // Mixed case allowed, checksum not enforced
        validate_address("0xAbCd111111111111111111111111111111111111").unwrap();

        validate_address("1111111111111111111111111111111111111111").unwrap_err();
        validate_address("0x1111").unwrap_err();
        validate_address("0xgg11111111111111111111111111111111111111").unwrap_err();
        validate_address("").unwrap_err();
    }

    #[test]
    fn test_chain_ids() {
        assert!(is_valid_chain_id(1));
        assert!(is_valid_chain_id(9000));
        assert!(is_valid_chain_id(MAX_CHAIN_ID));
        assert!(!is_valid_chain_id(0));
        assert!(!is_valid_chain_id(MAX_CHAIN_ID + 1));
    }

    #[test]
    fn test_urls() {
        assert!(is_valid_url("http://localhost:7077"));
        assert!(is_valid_url("https://gateway.example.com/fhevm"));
        assert!(!is_valid_url("ftp://gateway.example.com"));
        assert!(!is_valid_url("localhost:7077"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_handles() {
        let hex_str = "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20";
        validate_handle(hex_str).unwrap();
        validate_handle(&format!("0x{hex_str}")).unwrap();

        // All zeros is the uninitialized placeholder, never a real handle
        validate_handle(&"00".repeat(32)).unwrap_err();
        validate_handle("0x1234").unwrap_err();
        validate_handle("garbage").unwrap_err();
    }
}
