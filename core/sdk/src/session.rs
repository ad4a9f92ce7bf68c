//! Session management: an explicitly-passed holder object instead of a
//! process-wide singleton.
//!
//! [`SessionHolder::init`] builds a [`SessionContext`] (wallet, HTTP client,
//! fetched FHE public key) and stores it; operations take the context by
//! reference. `reset` clears the slot but never tears down contexts callers
//! already hold: in-flight work against an old context runs to completion.

use crate::config::SdkConfig;
use crate::consts::DECRYPT_ROUTE;
use crate::error::{Result, SdkError};
use crate::instance::FhevmKeys;
use crate::keys::fetch_public_key;
use crate::wallet::SdkWallet;
use alloy_primitives::Address;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use validator::Validate;

/// Everything the encrypt/decrypt operations need. Immutable once built.
pub struct SessionContext {
    config: SdkConfig,
    wallet: SdkWallet,
    keys: FhevmKeys,
    http: reqwest::Client,
}

impl SessionContext {
    /// Builds a context from a validated config: constructs the wallet,
    /// the pooled HTTP client, and fetches the chain-wide FHE public key.
    pub async fn connect(config: SdkConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SdkError::Config(e.to_string()))?;

        let wallet = build_wallet(&config)?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let keys = fetch_public_key(&http, &config.gateway_url).await?;

        tracing::info!(
            "Session connected for account {} on chain {}",
            wallet.address(),
            config.chain_id
        );

        Ok(Self {
            config,
            wallet,
            keys,
            http,
        })
    }

    pub fn gateway_url(&self) -> &str {
        &self.config.gateway_url
    }

    pub fn chain_id(&self) -> u64 {
        self.config.chain_id
    }

    /// Address of the session account
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn wallet(&self) -> &SdkWallet {
        &self.wallet
    }

    pub fn keys(&self) -> &FhevmKeys {
        &self.keys
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn decrypt_url(&self) -> String {
        format!(
            "{}{}",
            self.config.gateway_url.trim_end_matches('/'),
            DECRYPT_ROUTE
        )
    }
}

fn build_wallet(config: &SdkConfig) -> Result<SdkWallet> {
    let chain_id = Some(config.chain_id);
    if let Some(phrase) = config
        .wallet
        .mnemonic
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        return Ok(SdkWallet::from_mnemonic(phrase, chain_id)?);
    }
    if let Some(key) = config
        .wallet
        .private_key
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        return Ok(SdkWallet::from_private_key_hex(key, chain_id)?);
    }
    Err(SdkError::Config(
        "One of wallet.mnemonic or wallet.private_key must be set".to_string(),
    ))
}

/// Holds the current session. Cheap to clone and share; all clones observe
/// the same slot.
#[derive(Clone, Default)]
pub struct SessionHolder {
    inner: Arc<RwLock<Option<Arc<SessionContext>>>>,
}

impl SessionHolder {
    /// Creates an empty holder. Operations fail with
    /// [`SdkError::UninitializedSession`] until [`SessionHolder::init`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a new session and stores it, replacing any previous one.
    /// Concurrent readers observe either the old or the new context, never
    /// a torn state.
    pub async fn init(&self, config: SdkConfig) -> Result<Arc<SessionContext>> {
        // Connect fully before touching the slot so a failed re-init leaves
        // the previous session usable.
        let context = Arc::new(SessionContext::connect(config).await?);

        let mut guard = self
            .inner
            .write()
            .map_err(|_| SdkError::Other(anyhow::anyhow!("session slot lock poisoned")))?;
        *guard = Some(context.clone());

        Ok(context)
    }

    /// Returns the live context, or [`SdkError::UninitializedSession`] when
    /// the holder is empty.
    pub fn current(&self) -> Result<Arc<SessionContext>> {
        let guard = self
            .inner
            .read()
            .map_err(|_| SdkError::Other(anyhow::anyhow!("session slot lock poisoned")))?;
        guard.clone().ok_or(SdkError::UninitializedSession)
    }

    /// Clears the slot. Contexts handed out earlier keep working; the next
    /// [`SessionHolder::current`] fails until a new init.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.take().is_some() {
                tracing::info!("Session reset");
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
