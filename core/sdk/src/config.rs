//! SDK configuration: the gateway endpoint, the chain, and the wallet
//! source. Deserialization validates, so an invalid config never escapes
//! the loading path.

use crate::consts::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::{Result, SdkError};
use crate::validate::{is_valid_chain_id, is_valid_url};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use typed_builder::TypedBuilder;
use validator::{Validate, ValidationError};

/// Configuration for the FHEVM SDK
#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
#[validate(schema(function = validate_sdk_config))]
pub struct SdkConfig {
    /// Base URL of the decryption gateway, e.g. "http://localhost:7077"
    pub gateway_url: String,
    /// Chain ID of the FHEVM-enabled chain
    pub chain_id: u64,
    /// Source of the signing key
    pub wallet: WalletConfig,
    /// Connect timeout for the gateway HTTP client in seconds
    pub connect_timeout_secs: u64,
    /// Per-request timeout for the gateway HTTP client in seconds
    pub request_timeout_secs: u64,
}

/// Wallet source: exactly one of the fields must be set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WalletConfig {
    /// BIP-39 mnemonic phrase
    pub mnemonic: Option<String>,
    /// Hex-encoded private key (optional 0x prefix)
    pub private_key: Option<String>,
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn validate_sdk_config(conf: &SdkConfig) -> std::result::Result<(), ValidationError> {
    if !is_valid_url(&conf.gateway_url) {
        return Err(ValidationError::new("Invalid gateway URL").with_message(
            format!(
                "Gateway URL must be a valid http(s) URL, but was {:?}.",
                conf.gateway_url
            )
            .into(),
        ));
    }
    if !is_valid_chain_id(conf.chain_id) {
        return Err(ValidationError::new("Invalid chain ID").with_message(
            format!(
                "Chain ID must be positive and at most 2^53 - 1, but was {}.",
                conf.chain_id
            )
            .into(),
        ));
    }

    let has_mnemonic = conf
        .wallet
        .mnemonic
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    let has_private_key = conf
        .wallet
        .private_key
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    match (has_mnemonic, has_private_key) {
        (true, true) => Err(ValidationError::new("Ambiguous wallet source")
            .with_message("Set either wallet.mnemonic or wallet.private_key, not both.".into())),
        (false, false) => Err(ValidationError::new("Missing wallet source")
            .with_message("One of wallet.mnemonic or wallet.private_key must be set.".into())),
        _ => Ok(()),
    }
}

impl<'de> Deserialize<'de> for SdkConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize, Clone, Debug)]
        pub struct SdkConfigBuffer {
            pub gateway_url: String,
            pub chain_id: u64,
            pub wallet: WalletConfig,
            #[serde(default = "default_connect_timeout")]
            pub connect_timeout_secs: u64,
            #[serde(default = "default_request_timeout")]
            pub request_timeout_secs: u64,
        }

        let temp = SdkConfigBuffer::deserialize(deserializer)?;

        let conf = SdkConfig {
            gateway_url: temp.gateway_url,
            chain_id: temp.chain_id,
            wallet: temp.wallet,
            connect_timeout_secs: temp.connect_timeout_secs,
            request_timeout_secs: temp.request_timeout_secs,
        };

        conf.validate().map_err(serde::de::Error::custom)?;

        Ok(conf)
    }
}

impl SdkConfig {
    /// Load configuration from a TOML file, validating on the way in
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conf = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;
        Ok(conf.try_deserialize()?)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SdkError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// A starter config with placeholder wallet material, for `init-config`
    pub fn template() -> Self {
        SdkConfig {
            gateway_url: "http://localhost:7077".to_string(),
            chain_id: 9000,
            wallet: WalletConfig {
                mnemonic: Some(
                    "test test test test test test test test test test test junk".to_string(),
                ),
                private_key: None,
            },
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(TypedBuilder)]
pub struct Settings<'a> {
    #[builder(default, setter(strip_option))]
    path: Option<&'a str>,
    #[builder(default = "FHEVM")]
    env_prefix: &'a str,
}

impl Settings<'_> {
    /// Loads a configuration from the optional file path, with environment
    /// variables (e.g. `FHEVM__CHAIN_ID`, `FHEVM__WALLET__PRIVATE_KEY`)
    /// taking precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be created or deserialized.
    pub fn init_conf<T: for<'de> Deserialize<'de>>(&self) -> std::result::Result<T, ConfigError> {
        let mut s = Config::builder();

        if let Some(path) = self.path {
            s = s.add_source(File::with_name(path).required(false))
        };

        let s = s
            .add_source(
                Environment::default()
                    .prefix(self.env_prefix)
                    .separator("__"),
            )
            .build()?;

        let settings: T = s.try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> SdkConfig {
        SdkConfig {
            gateway_url: "http://localhost:7077".to_string(),
            chain_id: 9000,
            wallet: WalletConfig {
                mnemonic: Some(
                    "test test test test test test test test test test test junk".to_string(),
                ),
                private_key: None,
            },
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = valid_config();

        let temp_file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        config.to_file(temp_file.path()).unwrap();

        let loaded: SdkConfig = Settings::builder()
            .path(temp_file.path().to_str().unwrap())
            .build()
            .init_conf()
            .unwrap();
        assert_eq!(config, loaded);

        let direct = SdkConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config, direct);
    }

    #[test]
    fn test_timeouts_default_when_omitted() {
        let toml_str = r#"
            gateway_url = "http://localhost:7077"
            chain_id = 9000

            [wallet]
            private_key = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
        "#;
        let conf: SdkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(conf.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
        assert_eq!(conf.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut conf = valid_config();
        conf.gateway_url = "not a url".to_string();
        conf.validate().unwrap_err();

        let mut conf = valid_config();
        conf.chain_id = 0;
        conf.validate().unwrap_err();

        // Both wallet sources set
        let mut conf = valid_config();
        conf.wallet.private_key = Some("0xabcd".to_string());
        conf.validate().unwrap_err();

        // No wallet source set
        let mut conf = valid_config();
        conf.wallet = WalletConfig::default();
        conf.validate().unwrap_err();
    }

    #[test]
    fn test_deserialize_validates() {
        // Missing wallet source must be rejected at deserialization time
        let toml_str = r#"
            gateway_url = "http://localhost:7077"
            chain_id = 9000

            [wallet]
        "#;
        assert!(toml::from_str::<SdkConfig>(toml_str).is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let config = valid_config();

        let temp_file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        config.to_file(temp_file.path()).unwrap();

        std::env::set_var("FHEVM__CHAIN_ID", "1337");

        let loaded: SdkConfig = Settings::builder()
            .path(temp_file.path().to_str().unwrap())
            .build()
            .init_conf()
            .unwrap();

        std::env::remove_var("FHEVM__CHAIN_ID");

        assert_eq!(loaded.chain_id, 1337);
        assert_eq!(loaded.gateway_url, config.gateway_url);
    }
}
