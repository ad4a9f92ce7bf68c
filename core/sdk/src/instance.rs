//! FHE key material and the compact-list encryption core.
//!
//! Values are packed into a `CompactCiphertextList` under the chain-wide
//! compact public key, safe-serialized, and addressed by handles derived
//! from the serialized bytes.

use crate::consts::SAFE_SER_SIZE_LIMIT;
use crate::error::{Result, SdkError};
use alloy_primitives::{keccak256, U256};
use fhevm_types::{CiphertextHandle, EncryptedPayload, FheKind, HANDLE_VERSION};
use tfhe::{CompactCiphertextList, CompactPublicKey};

/// Chain-wide FHE public key the SDK encrypts under
pub struct FhevmKeys {
    public_key: CompactPublicKey,
}

impl FhevmKeys {
    /// Wraps an already-deserialized compact public key
    pub fn new(public_key: CompactPublicKey) -> Self {
        Self { public_key }
    }

    /// Deserializes a safe-serialized compact public key, as served by the
    /// gateway's public-key route.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let public_key = tfhe::safe_serialization::safe_deserialize(
            std::io::Cursor::new(bytes),
            SAFE_SER_SIZE_LIMIT,
        )
        .map_err(|e| SdkError::Crypto(format!("Failed to deserialize public key: {e}")))?;
        Ok(Self { public_key })
    }

    pub fn public_key(&self) -> &CompactPublicKey {
        &self.public_key
    }

    /// Packs one validated value into a fresh compact ciphertext list and
    /// derives its handle. The value must already be within the kind's
    /// range; out-of-range values are rejected rather than wrapped.
    pub fn encrypt(&self, kind: FheKind, value: U256) -> Result<EncryptedPayload> {
        let mut builder = CompactCiphertextList::builder(&self.public_key);
        match kind {
            FheKind::Bool => {
                builder.push(value != U256::ZERO);
            }
            FheKind::Uint8 => {
                builder
                    .push_with_num_bits(narrow::<u8>(kind, value)?, 8)
                    .map_err(|e| SdkError::Crypto(format!("Failed to pack uint8: {e}")))?;
            }
            FheKind::Uint16 => {
                builder
                    .push_with_num_bits(narrow::<u16>(kind, value)?, 16)
                    .map_err(|e| SdkError::Crypto(format!("Failed to pack uint16: {e}")))?;
            }
            FheKind::Uint32 => {
                builder
                    .push_with_num_bits(narrow::<u32>(kind, value)?, 32)
                    .map_err(|e| SdkError::Crypto(format!("Failed to pack uint32: {e}")))?;
            }
            FheKind::Uint64 => {
                builder
                    .push_with_num_bits(narrow::<u64>(kind, value)?, 64)
                    .map_err(|e| SdkError::Crypto(format!("Failed to pack uint64: {e}")))?;
            }
            FheKind::Address => {
                if value > kind.max_value() {
                    return Err(out_of_range(kind, value));
                }
                builder
                    .push_with_num_bits(to_tfhe_u256(value), 160)
                    .map_err(|e| SdkError::Crypto(format!("Failed to pack address: {e}")))?;
            }
        }
        let list = builder.build();

        let mut ciphertext = Vec::new();
        tfhe::safe_serialization::safe_serialize(&list, &mut ciphertext, SAFE_SER_SIZE_LIMIT)
            .map_err(|e| SdkError::Crypto(format!("Failed to serialize ciphertext: {e}")))?;

        let handle = compute_handle(&ciphertext, 0, kind);
        tracing::debug!(
            "Encrypted {} value into {} ciphertext bytes, handle {}",
            kind,
            ciphertext.len(),
            handle
        );

        Ok(EncryptedPayload {
            ciphertext,
            handles: vec![handle],
        })
    }
}

fn out_of_range(kind: FheKind, value: U256) -> SdkError {
    SdkError::Validation(format!(
        "Value exceeds maximum for {}: {} > {}",
        kind,
        value,
        kind.max_value()
    ))
}

fn narrow<T: TryFrom<U256>>(kind: FheKind, value: U256) -> Result<T> {
    T::try_from(value).map_err(|_| out_of_range(kind, value))
}

/// alloy U256 to tfhe U256, via the little-endian u128 halves
fn to_tfhe_u256(value: U256) -> tfhe::integer::U256 {
    let bytes = value.to_le_bytes::<32>();
    let low_128 = u128::from_le_bytes(
        bytes[0..16]
            .try_into()
            .expect("error converting slice to u256"),
    );
    let high_128 = u128::from_le_bytes(
        bytes[16..32]
            .try_into()
            .expect("error converting slice to u256"),
    );
    tfhe::integer::U256::from((low_128, high_128))
}

/// Derives the FHEVM handle for the value at `index` of a serialized
/// ciphertext list:
/// `keccak256(keccak256(ciphertext) || index)[0:29] || index || type || version`
pub(crate) fn compute_handle(ciphertext: &[u8], index: u8, kind: FheKind) -> CiphertextHandle {
    let inner = keccak256(ciphertext);
    let mut outer_input = Vec::with_capacity(inner.len() + 1);
    outer_input.extend_from_slice(inner.as_slice());
    outer_input.push(index);
    let digest = keccak256(&outer_input);

    let mut bytes = [0u8; 32];
    bytes[..29].copy_from_slice(&digest[..29]);
    bytes[29] = index;
    bytes[30] = kind.type_byte();
    bytes[31] = HANDLE_VERSION;
    CiphertextHandle::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_layout() {
        let ciphertext = vec![0x11u8; 64];
        let handle = compute_handle(&ciphertext, 3, FheKind::Uint32);

        assert_eq!(handle.index(), 3);
        assert_eq!(handle.type_byte(), FheKind::Uint32.type_byte());
        assert_eq!(handle.version(), HANDLE_VERSION);
        assert_eq!(handle.kind(), Some(FheKind::Uint32));

        let expected_inner = keccak256(&ciphertext);
        let mut outer = expected_inner.to_vec();
        outer.push(3);
        let expected_digest = keccak256(&outer);
        assert_eq!(&handle.as_bytes()[..29], &expected_digest[..29]);
    }

    #[test]
    fn test_handle_depends_on_inputs() {
        let ciphertext = vec![0x11u8; 64];
        let base = compute_handle(&ciphertext, 0, FheKind::Uint8);

        assert_ne!(base, compute_handle(&[0x22u8; 64], 0, FheKind::Uint8));
        assert_ne!(
            base.as_bytes()[..29],
            compute_handle(&ciphertext, 1, FheKind::Uint8).as_bytes()[..29]
        );
        // Same digest bytes, different type byte
        let other_kind = compute_handle(&ciphertext, 0, FheKind::Uint16);
        assert_eq!(base.as_bytes()[..30], other_kind.as_bytes()[..30]);
        assert_ne!(base.type_byte(), other_kind.type_byte());
    }

    #[test]
    fn test_tfhe_u256_conversion() {
        let value = U256::from(255u64);
        assert_eq!(to_tfhe_u256(value), tfhe::integer::U256::from((255u128, 0u128)));

        // 2^160 - 1, the address maximum
        let max_address = (U256::from(1u8) << 160) - U256::from(1u8);
        let expected = tfhe::integer::U256::from((u128::MAX, (1u128 << 32) - 1));
        assert_eq!(to_tfhe_u256(max_address), expected);
    }
}
