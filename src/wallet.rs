//! The wallet model: secret key material plus a public identity that is
//! safe to log or export.

use serde::{Deserialize, Serialize};

use crate::config::ChainConfig;
use crate::crypto::{AccountAddress, EthAddress, Keypair};
use crate::error::Result;
use crate::hd;

/// Fields derived from the public key only. Safe to serialize.
///
/// `address` and `eth_address` are two encodings over the same public key,
/// so the wallet acts as a single identity on both chains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicIdentity {
    /// Bech32 account address.
    pub address: String,
    /// Hex-encoded compressed public key.
    pub publickey: String,
    /// 0x-prefixed, EIP-55 checksummed Ethereum address.
    pub eth_address: String,
}

/// Secret half of the wallet. Never serialized; zeroed on drop via the
/// keypair it owns.
pub struct KeyMaterial {
    keypair: Keypair,
}

impl KeyMaterial {
    /// Returns the secret key as hex (without 0x prefix).
    pub fn secret_hex(&self) -> String {
        self.keypair.secret_hex()
    }

    /// Returns the raw 32 secret bytes.
    pub fn secret_bytes(&self) -> &[u8; 32] {
        self.keypair.secret_bytes()
    }
}

/// Export record matching the legacy JSON contract, private key included.
///
/// Building one is the caller's explicit opt-in to expose the secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletExport {
    pub address: String,
    pub publickey: String,
    pub privatekey: String,
    pub eth_address: String,
}

/// A derived wallet: key material plus both address encodings.
pub struct Wallet {
    key: KeyMaterial,
    identity: PublicIdentity,
}

impl Wallet {
    /// Derives a wallet from a BIP-39 mnemonic along the config's HD path.
    pub fn from_mnemonic(phrase: &str, config: &ChainConfig) -> Result<Self> {
        config.validate()?;
        let secret = hd::derive_secret(phrase, config)?;
        let keypair = Keypair::from_secret_bytes(secret)?;
        Self::from_keypair(keypair, config)
    }

    /// Builds a wallet directly from a hex-encoded 32-byte private key.
    /// No HD derivation is involved.
    pub fn from_private_key_hex(secret_hex: &str, config: &ChainConfig) -> Result<Self> {
        config.validate()?;
        let keypair = Keypair::from_secret_hex(secret_hex)?;
        Self::from_keypair(keypair, config)
    }

    fn from_keypair(keypair: Keypair, config: &ChainConfig) -> Result<Self> {
        let account = AccountAddress::from_public_key(keypair.public_key(), &config.bech32_prefix);
        let eth = EthAddress::from_public_key(keypair.public_key());

        let identity = PublicIdentity {
            address: account.to_bech32()?,
            publickey: keypair.public_key_hex(),
            eth_address: eth.to_checksum(),
        };

        Ok(Self {
            key: KeyMaterial { keypair },
            identity,
        })
    }

    /// The public, serializable half of the wallet.
    pub fn identity(&self) -> &PublicIdentity {
        &self.identity
    }

    /// The secret half of the wallet.
    pub fn key_material(&self) -> &KeyMaterial {
        &self.key
    }

    /// Signs an arbitrary message (Keccak-256 digest, deterministic ECDSA).
    pub fn sign(&self, message: &[u8]) -> Result<[u8; 64]> {
        self.key.keypair.sign(message)
    }

    /// Verifies a compact signature against this wallet's public key.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> Result<bool> {
        self.key.keypair.verify(message, signature)
    }

    /// Produces the legacy export record, private key included.
    pub fn export(&self) -> WalletExport {
        WalletExport {
            address: self.identity.address.clone(),
            publickey: self.identity.publickey.clone(),
            privatekey: self.key.secret_hex(),
            eth_address: self.identity.eth_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::AccountAddress;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon \
                                 abandon abandon abandon abandon abandon about";

    #[test]
    fn known_vector_full_wallet() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, &ChainConfig::default()).unwrap();
        assert_eq!(
            wallet.key_material().secret_hex(),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
        assert_eq!(
            wallet.identity().eth_address,
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );
        assert!(wallet.identity().address.starts_with("cosmos1"));
    }

    #[test]
    fn private_key_hex_roundtrip() {
        let original = "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727";
        let wallet = Wallet::from_private_key_hex(original, &ChainConfig::default()).unwrap();
        assert_eq!(wallet.key_material().secret_hex(), original);
        assert_eq!(wallet.export().privatekey, original);
    }

    #[test]
    fn mnemonic_and_raw_key_agree() {
        let config = ChainConfig::default();
        let from_mnemonic = Wallet::from_mnemonic(TEST_MNEMONIC, &config).unwrap();
        let from_hex =
            Wallet::from_private_key_hex(&from_mnemonic.key_material().secret_hex(), &config)
                .unwrap();
        assert_eq!(from_mnemonic.identity(), from_hex.identity());
    }

    #[test]
    fn addresses_recompute_from_public_key() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, &ChainConfig::default()).unwrap();

        let pubkey_bytes = hex::decode(&wallet.identity().publickey).unwrap();
        let public_key = secp256k1::PublicKey::from_slice(&pubkey_bytes).unwrap();

        let account = AccountAddress::from_public_key(&public_key, "cosmos");
        assert_eq!(account.to_bech32().unwrap(), wallet.identity().address);

        let eth = crate::crypto::EthAddress::from_public_key(&public_key);
        assert_eq!(eth.to_checksum(), wallet.identity().eth_address);

        // decode the bech32 string back to the hash160 bytes
        let decoded = AccountAddress::from_bech32(&wallet.identity().address).unwrap();
        assert_eq!(decoded.as_bytes(), account.as_bytes());
    }

    #[test]
    fn custom_prefix_flows_through() {
        let config = ChainConfig {
            bech32_prefix: "osmo".into(),
            ..ChainConfig::default()
        };
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, &config).unwrap();
        assert!(wallet.identity().address.starts_with("osmo1"));
    }

    #[test]
    fn sign_verify_across_wallets() {
        let config = ChainConfig::default();
        let signer = Wallet::from_mnemonic(TEST_MNEMONIC, &config).unwrap();
        let other = Wallet::from_private_key_hex(
            "0000000000000000000000000000000000000000000000000000000000000002",
            &config,
        )
        .unwrap();

        let signature = signer.sign(b"one identity, two chains").unwrap();
        assert!(signer.verify(b"one identity, two chains", &signature).unwrap());
        assert!(!other.verify(b"one identity, two chains", &signature).unwrap());
    }

    #[test]
    fn identity_serializes_without_secret() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, &ChainConfig::default()).unwrap();
        let json = serde_json::to_string(wallet.identity()).unwrap();
        assert!(json.contains("\"address\""));
        assert!(json.contains("\"publickey\""));
        assert!(json.contains("\"eth_address\""));
        assert!(!json.contains(&wallet.key_material().secret_hex()));
    }

    #[test]
    fn export_carries_legacy_fields() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, &ChainConfig::default()).unwrap();
        let json = serde_json::to_value(wallet.export()).unwrap();
        for field in ["address", "publickey", "privatekey", "eth_address"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn invalid_hex_yields_no_wallet() {
        let config = ChainConfig::default();
        for bad in ["", "0x", "nothex!", "abc", "abcd", "0xgg"] {
            assert!(Wallet::from_private_key_hex(bad, &config).is_err());
        }
    }
}
