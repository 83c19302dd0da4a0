//! Chain configuration for wallet derivation.

use crate::error::{Error, Result};

/// Parameters that pin a wallet to one chain identity.
///
/// The defaults reproduce the `eth_secp256k1` account scheme: coin type 60,
/// first account, first address index, empty BIP-39 passphrase. A non-empty
/// passphrase changes every derived key and address, so it must be an
/// explicit caller decision rather than a hidden constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Human-readable part of the bech32 account address.
    pub bech32_prefix: String,
    /// BIP-44 coin type (hardened). 60 is the Ethereum registration.
    pub coin_type: u32,
    /// BIP-44 account number (hardened).
    pub account: u32,
    /// BIP-44 address index (non-hardened).
    pub index: u32,
    /// BIP-39 passphrase mixed into the seed.
    pub passphrase: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            bech32_prefix: "cosmos".to_string(),
            coin_type: 60,
            account: 0,
            index: 0,
            passphrase: String::new(),
        }
    }
}

impl ChainConfig {
    /// BIP-44 hardened components are limited to 31 bits.
    const HARDENED_LIMIT: u32 = 1 << 31;

    /// Returns the full derivation path `m/44'/coin'/account'/0/index`.
    pub fn hd_path(&self) -> String {
        format!(
            "m/44'/{}'/{}'/0/{}",
            self.coin_type, self.account, self.index
        )
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bech32_prefix.is_empty() {
            return Err(Error::Config("bech32 prefix cannot be empty".into()));
        }
        if !self
            .bech32_prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(Error::Config(
                "bech32 prefix must be lowercase alphanumeric".into(),
            ));
        }
        if self.coin_type >= Self::HARDENED_LIMIT {
            return Err(Error::Config("coin type must fit in 31 bits".into()));
        }
        if self.account >= Self::HARDENED_LIMIT {
            return Err(Error::Config("account must fit in 31 bits".into()));
        }
        if self.index >= Self::HARDENED_LIMIT {
            return Err(Error::Config("address index must fit in 31 bits".into()));
        }
        Ok(())
    }
}
