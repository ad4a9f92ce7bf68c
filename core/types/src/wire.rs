//! JSON bodies exchanged with the decryption gateway.
//!
//! Field names on the wire are camelCase; the structs keep Rust snake_case
//! and map through serde. All values travel as strings: addresses and
//! signatures as 0x-hex, decrypted values as decimal.

use serde::{Deserialize, Serialize};

/// Body of `POST /fhevm/decrypt`.
///
/// `public_key` carries the requesting account address; the gateway recovers
/// the same address from `signature` and rejects the request on mismatch.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecryptionRequestBody {
    pub contract_address: String,
    pub handle: String,
    pub public_key: String,
    pub signature: String,
}

/// Body of a successful `POST /fhevm/decrypt` response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecryptionResponseBody {
    /// Decrypted plaintext as a decimal string
    pub value: String,
}

/// Body of `GET /fhevm/publicKey`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    /// Hex-encoded, safe-serialized compact FHE public key
    pub public_key: String,
}
