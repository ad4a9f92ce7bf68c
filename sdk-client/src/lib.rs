//! Command-line client for the FHEVM SDK.
//!
//! A thin layer over [`fhevm_sdk`]: each invocation parses one command,
//! opens a session when the command needs one, and prints results as
//! labelled JSON documents. Wallet and config bootstrapping commands run
//! without a session.

use clap::{Parser, Subcommand};
use fhevm_sdk::config::{SdkConfig, Settings};
use fhevm_sdk::decrypt::{decrypt_many, decrypt_one, DecryptionRequest};
use fhevm_sdk::encrypt::encrypt;
use fhevm_sdk::session::{SessionContext, SessionHolder};
use fhevm_sdk::validate::{validate_address, validate_handle, validate_value};
use fhevm_sdk::wallet::SdkWallet;
use fhevm_types::FheKind;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use validator::Validate;

pub use fhevm_sdk::logging::setup_logging;

#[derive(Debug, Parser, Clone)]
pub struct GenerateWalletParameters {
    /// Derive the wallet from this BIP-39 mnemonic instead of generating a
    /// random private key.
    #[clap(long, short = 'm')]
    pub mnemonic: Option<String>,
}

#[derive(Debug, Parser, Clone)]
pub struct InitConfigParameters {
    /// Where to write the starter configuration.
    #[clap(long, short = 'p', default_value = "fhevm-client.toml")]
    pub path: String,
}

#[derive(Debug, Parser, Clone)]
pub struct EncryptParameters {
    /// Kind of the value to encrypt.
    /// Expected one of bool, uint8, uint16, uint32, uint64, address.
    #[clap(long, short = 'k')]
    pub kind: FheKind,
    /// Value to encrypt. Booleans as true/false/1/0, integers as decimal or
    /// 0x-hex, addresses as 0x-hex.
    #[clap(long, short = 'e')]
    pub value: String,
    /// Write the serialized ciphertext to this path instead of discarding it
    /// after handle derivation.
    #[clap(long, short = 'o')]
    pub ciphertext_path: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct DecryptParameters {
    /// Address of the contract holding the ciphertext.
    #[clap(long, short = 'c')]
    pub contract: String,
    /// Ciphertext handle, 32 bytes of hex with optional 0x prefix.
    #[clap(long, short = 'i')]
    pub handle: String,
}

#[derive(Debug, Parser, Clone)]
pub struct DecryptBatchParameters {
    /// Address of the contract holding the ciphertexts.
    #[clap(long, short = 'c')]
    pub contract: String,
    /// Handles to decrypt, one flag per handle; results come back in this
    /// order.
    #[clap(long = "handle", short = 'i', required = true)]
    pub handles: Vec<String>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ClientCommand {
    /// Print a wallet address and private key.
    GenerateWallet(GenerateWalletParameters),
    /// Write a starter configuration file with placeholder wallet material.
    InitConfig(InitConfigParameters),
    /// Encrypt a value under the chain FHE public key and print its handle.
    Encrypt(EncryptParameters),
    /// Request decryption of one handle through the gateway.
    Decrypt(DecryptParameters),
    /// Request decryption of several handles concurrently.
    DecryptBatch(DecryptBatchParameters),
}

#[derive(Debug, Parser, Validate)]
pub struct CmdConfig {
    /// Path to the configuration file
    #[clap(long = "config", short = 'f')]
    #[validate(length(min = 1))]
    pub file_conf: Option<String>,
    /// The command to execute
    #[clap(subcommand)]
    pub command: ClientCommand,
    /// Whether to print logs or not
    #[clap(long, short = 'l')]
    pub logs: bool,
    /// Directory receiving the daily-rolling log file when logging is on
    #[clap(long, default_value = "logs")]
    pub log_dir: String,
}

#[derive(Debug, Serialize)]
struct WalletOutput {
    address: String,
    private_key: String,
}

#[derive(Debug, Serialize)]
struct EncryptOutput {
    handle: String,
    ciphertext_bytes: usize,
    ciphertext_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct DecryptOutput {
    handle: String,
    value: String,
    success: bool,
}

type CmdResult = Result<Vec<(String, serde_json::Value)>, Box<dyn std::error::Error + 'static>>;

/// Executes the parsed command and returns `(label, payload)` pairs for the
/// binary to print.
pub async fn execute_cmd(cmd_config: &CmdConfig) -> CmdResult {
    let command = &cmd_config.command;
    tracing::info!("Starting command: {:?}", command);

    match command {
        ClientCommand::GenerateWallet(params) => {
            let wallet = match params.mnemonic.as_deref() {
                Some(phrase) => SdkWallet::from_mnemonic(phrase, None)?,
                None => SdkWallet::random(None)?,
            };
            let output = WalletOutput {
                address: wallet.address().to_string(),
                private_key: wallet.private_key_hex(),
            };
            Ok(vec![("Wallet".to_string(), serde_json::to_value(output)?)])
        }
        ClientCommand::InitConfig(params) => {
            SdkConfig::template().to_file(&params.path)?;
            tracing::info!("Wrote starter config to {}", params.path);
            Ok(vec![(
                "Config written".to_string(),
                serde_json::to_value(&params.path)?,
            )])
        }
        ClientCommand::Encrypt(params) => {
            let value = validate_value(params.kind, &params.value)?;
            let session = open_session(cmd_config).await?;
            let payload = encrypt(&session, params.kind, value)?;

            let handle = payload
                .handle()
                .ok_or("Encryption produced no handle")?
                .to_hex_prefixed();
            let ciphertext_path = match &params.ciphertext_path {
                Some(path) => {
                    std::fs::write(path, &payload.ciphertext)?;
                    Some(path.display().to_string())
                }
                None => None,
            };
            let output = EncryptOutput {
                handle,
                ciphertext_bytes: payload.ciphertext.len(),
                ciphertext_path,
            };
            Ok(vec![("Encrypted".to_string(), serde_json::to_value(output)?)])
        }
        ClientCommand::Decrypt(params) => {
            let request = DecryptionRequest {
                contract_address: validate_address(&params.contract)?,
                handle: validate_handle(&params.handle)?,
            };
            let session = open_session(cmd_config).await?;
            let result = decrypt_one(&session, &request).await;
            Ok(vec![(
                "Decrypted".to_string(),
                serde_json::to_value(DecryptOutput {
                    handle: request.handle.to_hex_prefixed(),
                    value: result.value.to_string(),
                    success: result.success,
                })?,
            )])
        }
        ClientCommand::DecryptBatch(params) => {
            let contract_address = validate_address(&params.contract)?;
            // Reject malformed input before any network traffic
            let requests = params
                .handles
                .iter()
                .map(|text| {
                    Ok(DecryptionRequest {
                        contract_address,
                        handle: validate_handle(text)?,
                    })
                })
                .collect::<Result<Vec<_>, fhevm_sdk::SdkError>>()?;

            let session = open_session(cmd_config).await?;
            let results = decrypt_many(&session, &requests).await;

            requests
                .iter()
                .zip(results)
                .map(|(request, result)| {
                    Ok((
                        "Decrypted".to_string(),
                        serde_json::to_value(DecryptOutput {
                            handle: request.handle.to_hex_prefixed(),
                            value: result.value.to_string(),
                            success: result.success,
                        })?,
                    ))
                })
                .collect()
        }
    }
}

async fn open_session(
    cmd_config: &CmdConfig,
) -> Result<Arc<SessionContext>, Box<dyn std::error::Error + 'static>> {
    let settings = match &cmd_config.file_conf {
        Some(path) => Settings::builder().path(path.as_str()).build(),
        None => Settings::builder().build(),
    };
    let conf: SdkConfig = settings.init_conf()?;

    let holder = SessionHolder::new();
    let session = holder.init(conf).await?;
    Ok(session)
}
