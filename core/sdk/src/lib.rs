//! Client SDK for FHEVM-enabled blockchains.
//!
//! The SDK covers the client half of the FHEVM flow: encrypt typed values
//! under the chain-wide FHE public key so contracts can receive them as
//! ciphertext handles, and request decryption of handles through the
//! gateway with EIP-712 signed authorization.
//!
//! ```no_run
//! use fhevm_sdk::prelude::*;
//!
//! # async fn demo() -> fhevm_sdk::Result<()> {
//! let holder = SessionHolder::new();
//! let session = holder
//!     .init(SdkConfig {
//!         gateway_url: "http://localhost:7077".to_string(),
//!         chain_id: 9000,
//!         wallet: WalletConfig {
//!             private_key: Some("0x…".to_string()),
//!             mnemonic: None,
//!         },
//!         connect_timeout_secs: 10,
//!         request_timeout_secs: 30,
//!     })
//!     .await?;
//!
//! let payload = encrypt_u64(&session, 123_456)?;
//! let result = decrypt_one(
//!     &session,
//!     &DecryptionRequest {
//!         contract_address: "0x2222222222222222222222222222222222222222".parse().unwrap(),
//!         handle: *payload.handle().unwrap(),
//!     },
//! )
//! .await;
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod consts;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod instance;
pub mod keys;
pub mod logging;
pub mod ops;
pub mod session;
pub mod validate;
pub mod wallet;

pub use error::{Result, SdkError};

/// Re-export commonly used items
pub mod prelude {
    pub use super::config::{SdkConfig, Settings, WalletConfig};
    pub use super::decrypt::{decrypt_many, decrypt_one, DecryptionRequest, DecryptionResult};
    pub use super::encrypt::{
        encrypt, encrypt_address, encrypt_bool, encrypt_str, encrypt_u16, encrypt_u32, encrypt_u64,
        encrypt_u8,
    };
    pub use super::error::{Result, SdkError};
    pub use super::ops::{OperationStatus, TrackedOperation};
    pub use super::session::{SessionContext, SessionHolder};
    pub use super::validate::{
        is_valid_chain_id, is_valid_url, validate_address, validate_handle, validate_value,
    };
    pub use super::wallet::SdkWallet;
    pub use fhevm_types::{CiphertextHandle, EncryptedPayload, FheKind};
}
