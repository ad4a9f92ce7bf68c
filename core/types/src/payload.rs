use crate::handle::CiphertextHandle;
use serde::{Deserialize, Serialize};

/// Result of an encrypt operation: the opaque ciphertext bytes to submit to
/// the chain, and one handle per packed value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EncryptedPayload {
    /// Safe-serialized compact ciphertext list. Opaque to callers.
    pub ciphertext: Vec<u8>,
    /// Handles identifying the packed values, in packing order
    pub handles: Vec<CiphertextHandle>,
}

impl EncryptedPayload {
    /// The first handle. Single-value encryption, the common case, packs
    /// exactly one.
    pub fn handle(&self) -> Option<&CiphertextHandle> {
        self.handles.first()
    }
}
