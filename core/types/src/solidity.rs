//! Solidity types used in EIP-712 signing of decryption requests.
//! WARNING: any changes to these structures is a breaking change.

use alloy_primitives::{Address, U256};
use alloy_sol_types::Eip712Domain;

/// Domain name the gateway verifies signatures against
pub const EIP712_DOMAIN_NAME: &str = "FHEVM Decryption";

/// Domain version the gateway verifies signatures against
pub const EIP712_DOMAIN_VERSION: &str = "1";

// Struct needs to match what the gateway's DecryptionManager hashes when it
// recovers the requester address. `contract` is a keyword, hence the
// `contractAddress` field name in the encoded type.
alloy_sol_types::sol! {
    struct Decryption {
        /// @notice The account requesting decryption.
        address user;
        /// @notice The contract holding the ciphertext.
        address contractAddress;
    }
}

impl Decryption {
    pub fn new(user: Address, contract_address: Address) -> Self {
        Self {
            user,
            contractAddress: contract_address,
        }
    }
}

/// Builds the EIP-712 domain for a decryption request. The verifying
/// contract is the contract holding the ciphertext.
pub fn decryption_domain(chain_id: u64, verifying_contract: Address) -> Eip712Domain {
    Eip712Domain::new(
        Some(EIP712_DOMAIN_NAME.into()),
        Some(EIP712_DOMAIN_VERSION.into()),
        Some(U256::from(chain_id)),
        Some(verifying_contract),
        None,
    )
}
