//! Strongly-typed ciphertext handles.
//!
//! A handle is the 32-byte identifier a contract stores in place of the
//! ciphertext itself. The layout is fixed by the FHEVM handle format:
//! `keccak256(keccak256(ciphertext) || index)[0:29] || index || type || version`
//! - bytes 0..29: truncated digest
//! - byte 29: index of the value inside the ciphertext list
//! - byte 30: FHE type discriminant (see [`FheKind::type_byte`])
//! - byte 31: handle format version (currently 0)

use crate::kind::FheKind;
use alloy_primitives::hex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard length for handles in bytes
pub const HANDLE_LENGTH: usize = 32;

/// Handle format version written into byte 31
pub const HANDLE_VERSION: u8 = 0;

/// Error types for handle operations
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    #[error("Invalid handle length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hex format in handle: {0}")]
    InvalidHexFormat(#[from] hex::FromHexError),

    #[error("Handle validation failure")]
    ValidationFailure,
}

/// CiphertextHandle identifies one encrypted value in the FHEVM.
///
/// This type provides a strongly-typed wrapper around a fixed-size byte array
/// with consistent conversion methods to/from various representations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Copy)]
pub struct CiphertextHandle([u8; HANDLE_LENGTH]);

impl CiphertextHandle {
    /// Creates a new handle from raw bytes
    pub fn from_bytes(bytes: [u8; HANDLE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the handle
    pub fn as_bytes(&self) -> &[u8; HANDLE_LENGTH] {
        &self.0
    }

    /// Consumes the handle and returns the inner byte array
    pub fn into_bytes(self) -> [u8; HANDLE_LENGTH] {
        self.0
    }

    /// Returns a zeroed handle
    pub fn zeros() -> Self {
        Self([0u8; HANDLE_LENGTH])
    }

    /// Validates that the handle meets the required constraints.
    ///
    /// A handle is valid when it is not all zeros (the uninitialized
    /// placeholder contracts use for "no value").
    pub fn is_valid(&self) -> bool {
        if self.0.iter().all(|&b| b == 0) {
            tracing::warn!("Handle contains all zeros");
            return false;
        }
        true
    }

    /// Index of the value inside its ciphertext list (byte 29)
    pub fn index(&self) -> u8 {
        self.0[29]
    }

    /// FHE type discriminant (byte 30)
    pub fn type_byte(&self) -> u8 {
        self.0[30]
    }

    /// Handle format version (byte 31)
    pub fn version(&self) -> u8 {
        self.0[31]
    }

    /// Recovers the encryption kind from the type byte, when it is one the
    /// SDK supports.
    pub fn kind(&self) -> Option<FheKind> {
        FheKind::from_type_byte(self.type_byte())
    }

    /// Returns the handle as a 0x-prefixed hex string, the form contracts
    /// and the gateway expect.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self)
    }
}

// Display implementation for human-readable output (hex format without 0x prefix)
impl fmt::Display for CiphertextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

// FromStr implementation for parsing from string
impl FromStr for CiphertextHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Trim whitespace and remove 0x prefix if present
        let s = s.trim().strip_prefix("0x").unwrap_or(s.trim());

        let bytes = match hex::decode(s) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("Input {} is not a valid hex string: {}", s, e);
                return Err(HandleError::InvalidHexFormat(e));
            }
        };

        if bytes.len() != HANDLE_LENGTH {
            tracing::warn!(
                "Decoded value length is {}, but {} is expected",
                bytes.len(),
                HANDLE_LENGTH
            );
            return Err(HandleError::InvalidLength {
                expected: HANDLE_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut array = [0u8; HANDLE_LENGTH];
        array.copy_from_slice(&bytes);

        Ok(Self(array))
    }
}

// AsRef implementation for easy access to the underlying bytes
impl AsRef<[u8]> for CiphertextHandle {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for CiphertextHandle {
    type Error = HandleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != HANDLE_LENGTH {
            return Err(HandleError::InvalidLength {
                expected: HANDLE_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut array = [0u8; HANDLE_LENGTH];
        array.copy_from_slice(bytes);
        Ok(Self(array))
    }
}

impl TryFrom<Vec<u8>> for CiphertextHandle {
    type Error = HandleError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&str> for CiphertextHandle {
    type Error = HandleError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl TryFrom<String> for CiphertextHandle {
    type Error = HandleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<CiphertextHandle> for String {
    fn from(handle: CiphertextHandle) -> Self {
        handle.to_string()
    }
}
