use alloy_primitives::{Address, ChainId, B256};
use alloy_signer::{Signer, SignerSync};
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Signer error: {0}")]
    SignerError(#[from] alloy_signer::Error),
    #[error("Local signer error: {0}")]
    LocalSignerError(#[from] alloy_signer_local::LocalSignerError),
}

pub type Result<T> = std::result::Result<T, WalletError>;

/// Account wallet used to sign decryption authorizations
#[derive(Clone)]
pub struct SdkWallet {
    pub signer: PrivateKeySigner,
}

impl SdkWallet {
    /// Create a new wallet from a mnemonic phrase
    pub fn from_mnemonic(phrase: &str, chain_id: Option<ChainId>) -> Result<Self> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.trim())
            .build()?
            .with_chain_id(chain_id);

        Ok(Self { signer })
    }

    /// Create a new wallet from a hex-encoded private key (optional 0x prefix)
    pub fn from_private_key_hex(key: &str, chain_id: Option<ChainId>) -> Result<Self> {
        let signer = key
            .trim()
            .parse::<PrivateKeySigner>()?
            .with_chain_id(chain_id);

        Ok(Self { signer })
    }

    /// Create a new random wallet
    pub fn random(chain_id: Option<ChainId>) -> Result<Self> {
        let signer = PrivateKeySigner::random().with_chain_id(chain_id);
        Ok(Self { signer })
    }

    /// Get the wallet's address
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a 32-byte hash (e.g. an EIP-712 signing hash)
    pub fn sign_hash(&self, hash: &B256) -> Result<Vec<u8>> {
        Ok(self.signer.sign_hash_sync(hash)?.as_bytes().to_vec())
    }

    /// Hex-encoded private key with 0x prefix, for `generate-wallet` output
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signer.to_bytes()))
    }
}

impl std::fmt::Debug for SdkWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        f.debug_struct("SdkWallet")
            .field("address", &self.address())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CHAIN_ID: u64 = 1337;
    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

    #[test]
    fn test_wallet_from_mnemonic() {
        let wallet = SdkWallet::from_mnemonic(TEST_MNEMONIC, Some(TEST_CHAIN_ID)).unwrap();
        // First account of the well-known hardhat mnemonic
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_wallet_from_private_key_round_trip() {
        let wallet = SdkWallet::random(Some(TEST_CHAIN_ID)).unwrap();
        let recovered =
            SdkWallet::from_private_key_hex(&wallet.private_key_hex(), Some(TEST_CHAIN_ID))
                .unwrap();
        assert_eq!(wallet.address(), recovered.address());
    }

    #[test]
    fn test_bad_inputs_rejected() {
        SdkWallet::from_mnemonic("not a mnemonic", Some(TEST_CHAIN_ID)).unwrap_err();
        SdkWallet::from_private_key_hex("0xzz", Some(TEST_CHAIN_ID)).unwrap_err();
    }

    #[test]
    fn test_sign_hash() {
        let wallet = SdkWallet::random(Some(TEST_CHAIN_ID)).unwrap();
        let hash = B256::repeat_byte(0x42);
        let signature = wallet.sign_hash(&hash).unwrap();
        // 65-byte ECDSA signature: r || s || v
        assert_eq!(signature.len(), 65);
    }
}
