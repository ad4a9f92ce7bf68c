//! Constants shared across the SDK.

/// The maximal size of tfhe-rs objects the SDK will (de)serialize, 2 GiB
pub const SAFE_SER_SIZE_LIMIT: u64 = 1024 * 1024 * 1024 * 2;

/// Gateway route serving the chain-wide compact FHE public key
pub const PUBLIC_KEY_ROUTE: &str = "/fhevm/publicKey";

/// Gateway route accepting signed decryption requests
pub const DECRYPT_ROUTE: &str = "/fhevm/decrypt";

/// Default connect timeout for the gateway HTTP client in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default per-request timeout for the gateway HTTP client in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Largest chain id accepted by the validator. Bounded so chain ids survive
/// a round-trip through JS tooling, which loses precision above 2^53 - 1.
pub const MAX_CHAIN_ID: u64 = (1 << 53) - 1;
