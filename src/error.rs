//! Error types for wallet derivation and signing.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The system random source could not produce entropy.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// Word-list or address encoding failed.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// The mnemonic phrase failed BIP-39 checksum validation.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// HD path derivation failed.
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// A private key string was not valid hex or not 32 bytes.
    #[error("invalid private key hex: {0}")]
    InvalidHex(String),

    /// The private key scalar is zero or out of range, or signing failed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Chain configuration is invalid (bech32 prefix, HD path component).
    #[error("invalid configuration: {0}")]
    Config(String),
}
