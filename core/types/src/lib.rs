//! Shared types for the FHEVM client SDK: encryption kinds, ciphertext
//! handles, gateway wire bodies and the EIP-712 structures used to authorize
//! decryption requests. This crate is I/O free so it can be depended on from
//! any context (CLI, services, tests).

pub mod handle;
pub mod kind;
pub mod payload;
pub mod solidity;
pub mod wire;

// Re-export the types callers touch most often
pub use handle::{CiphertextHandle, HandleError, HANDLE_LENGTH, HANDLE_VERSION};
pub use kind::{FheKind, UnsupportedKindError};
pub use payload::EncryptedPayload;
pub use solidity::{decryption_domain, Decryption};
pub use wire::{DecryptionRequestBody, DecryptionResponseBody, PublicKeyResponse};
