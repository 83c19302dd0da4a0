//! BIP-39 mnemonic handling and BIP-32 hierarchical key derivation.

use bip32::{DerivationPath, XPrv};
use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::config::ChainConfig;
use crate::error::{Error, Result};

/// 128 bits of entropy encode as 12 words.
const ENTROPY_BYTES: usize = 16;

/// Generates a fresh 12-word English BIP-39 mnemonic from OS entropy.
pub fn generate_mnemonic() -> Result<String> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| Error::Entropy(format!("{e}")))?;
    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| Error::Encoding(format!("mnemonic encoding failed: {e}")))?;
    entropy.zeroize();
    Ok(mnemonic.to_string())
}

/// Validates a phrase against the BIP-39 word list and checksum.
pub fn validate_mnemonic(phrase: &str) -> Result<()> {
    parse_mnemonic(phrase).map(|_| ())
}

/// Derives the 32-byte private key for the config's HD path.
///
/// The seed is computed from the phrase and the configured passphrase, then
/// walked along `m/44'/coin'/account'/0/index`.
pub fn derive_secret(phrase: &str, config: &ChainConfig) -> Result<[u8; 32]> {
    let mnemonic = parse_mnemonic(phrase)?;
    let mut seed = mnemonic.to_seed(config.passphrase.as_str());

    let path: DerivationPath = config
        .hd_path()
        .parse()
        .map_err(|e| Error::Derivation(format!("invalid HD path: {e}")))?;

    let child_xprv = XPrv::derive_from_path(&seed, &path)
        .map_err(|e| Error::Derivation(format!("{e}")))?;
    seed.zeroize();

    Ok(child_xprv.private_key().to_bytes().into())
}

fn parse_mnemonic(phrase: &str) -> Result<Mnemonic> {
    phrase
        .parse()
        .map_err(|e| Error::InvalidMnemonic(format!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Standard BIP-39 test phrase (all-zero entropy).
    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon \
                                 abandon abandon abandon abandon abandon about";

    #[test]
    fn generated_mnemonic_has_12_words() {
        let phrase = generate_mnemonic().unwrap();
        assert_eq!(phrase.split_whitespace().count(), 12);
    }

    #[test]
    fn generated_mnemonic_revalidates() {
        let phrase = generate_mnemonic().unwrap();
        assert!(validate_mnemonic(&phrase).is_ok());
    }

    #[test]
    fn rejects_bad_checksum() {
        // 12 valid words, wrong checksum word
        let phrase = "abandon abandon abandon abandon abandon abandon \
                      abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            validate_mnemonic(phrase),
            Err(Error::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn rejects_garbage_words() {
        assert!(validate_mnemonic("definitely not a mnemonic").is_err());
    }

    #[test]
    fn derivation_is_deterministic() {
        let config = ChainConfig::default();
        let a = derive_secret(TEST_MNEMONIC, &config).unwrap();
        let b = derive_secret(TEST_MNEMONIC, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn known_vector_coin_type_60() {
        // m/44'/60'/0'/0/0 with empty passphrase
        let secret = derive_secret(TEST_MNEMONIC, &ChainConfig::default()).unwrap();
        assert_eq!(
            hex::encode(secret),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn passphrase_changes_key() {
        let plain = derive_secret(TEST_MNEMONIC, &ChainConfig::default()).unwrap();
        let config = ChainConfig {
            passphrase: "hunter2".into(),
            ..ChainConfig::default()
        };
        let salted = derive_secret(TEST_MNEMONIC, &config).unwrap();
        assert_ne!(plain, salted);
    }

    #[test]
    fn index_changes_key() {
        let base = derive_secret(TEST_MNEMONIC, &ChainConfig::default()).unwrap();
        let config = ChainConfig {
            index: 1,
            ..ChainConfig::default()
        };
        let next = derive_secret(TEST_MNEMONIC, &config).unwrap();
        assert_ne!(base, next);
    }
}
