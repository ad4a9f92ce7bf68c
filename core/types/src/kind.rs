//! Encryption kinds supported by the SDK.
//!
//! The string forms (`"bool"`, `"uint8"`, ..., `"address"`) are the type tags
//! contracts and frontends use; the numeric type byte is the FHEVM handle
//! discriminant (euint4 and the wide types exist in the handle format but are
//! not encryptable through this SDK).

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Raised when a kind tag at the dispatch boundary is not one of the
/// supported encryption kinds.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsupported encryption type: {0}")]
pub struct UnsupportedKindError(pub String);

#[derive(
    Copy, Clone, Default, EnumString, EnumIter, PartialEq, Eq, Hash, Display, Debug, Serialize, Deserialize,
)]
pub enum FheKind {
    #[default]
    #[strum(serialize = "bool")]
    Bool,
    #[strum(serialize = "uint8")]
    Uint8,
    #[strum(serialize = "uint16")]
    Uint16,
    #[strum(serialize = "uint32")]
    Uint32,
    #[strum(serialize = "uint64")]
    Uint64,
    #[strum(serialize = "address")]
    Address,
}

impl FheKind {
    /// Plaintext width packed into the compact ciphertext list.
    pub fn bits(&self) -> usize {
        match self {
            FheKind::Bool => 1,
            FheKind::Uint8 => 8,
            FheKind::Uint16 => 16,
            FheKind::Uint32 => 32,
            FheKind::Uint64 => 64,
            FheKind::Address => 160,
        }
    }

    /// Largest plaintext value representable for this kind.
    pub fn max_value(&self) -> U256 {
        match self {
            FheKind::Bool => U256::from(1u8),
            // (1 << bits) - 1 for the integer kinds
            _ => (U256::from(1u8) << self.bits()) - U256::from(1u8),
        }
    }

    /// FHEVM handle type discriminant (handle byte 30).
    ///
    /// The numbering includes kinds this SDK does not encrypt (euint4 = 1,
    /// euint128 = 6, the wide types above 7), hence the gaps.
    pub fn type_byte(&self) -> u8 {
        match self {
            FheKind::Bool => 0,
            FheKind::Uint8 => 2,
            FheKind::Uint16 => 3,
            FheKind::Uint32 => 4,
            FheKind::Uint64 => 5,
            FheKind::Address => 7,
        }
    }

    /// Reverse of [`FheKind::type_byte`]. Returns `None` for discriminants
    /// the SDK cannot encrypt (euint4, euint128, the wide types).
    pub fn from_type_byte(byte: u8) -> Option<FheKind> {
        match byte {
            0 => Some(FheKind::Bool),
            2 => Some(FheKind::Uint8),
            3 => Some(FheKind::Uint16),
            4 => Some(FheKind::Uint32),
            5 => Some(FheKind::Uint64),
            7 => Some(FheKind::Address),
            _ => None,
        }
    }

    /// Parses a kind tag, mapping unknown tags to [`UnsupportedKindError`]
    /// carrying the offending input.
    pub fn parse(tag: &str) -> Result<FheKind, UnsupportedKindError> {
        FheKind::from_str(tag.trim()).map_err(|_| UnsupportedKindError(tag.to_string()))
    }
}
