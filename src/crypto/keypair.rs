//! secp256k1 keypair construction, signing and verification.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// A secp256k1 keypair.
///
/// Secret bytes are kept alongside the parsed keys so the original material
/// can be re-exported; the buffer is zeroed on drop.
pub struct Keypair {
    secret_bytes: [u8; 32],
    secret_key: SecretKey,
    public_key: PublicKey,
}

impl Keypair {
    /// Builds a keypair from 32 raw secret bytes.
    ///
    /// Fails if the scalar is zero or not below the curve order.
    pub fn from_secret_bytes(secret_bytes: [u8; 32]) -> Result<Self> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret_bytes)
            .map_err(|e| Error::Signing(format!("invalid secret key: {e}")))?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            secret_bytes,
            secret_key,
            public_key,
        })
    }

    /// Builds a keypair from a hex-encoded secret key.
    ///
    /// The string must decode to exactly 32 bytes; an optional `0x` prefix
    /// is accepted.
    pub fn from_secret_hex(secret_hex: &str) -> Result<Self> {
        let trimmed = secret_hex.strip_prefix("0x").unwrap_or(secret_hex);
        let decoded =
            hex::decode(trimmed).map_err(|e| Error::InvalidHex(format!("{e}")))?;
        let decoded_len = decoded.len();
        let secret_bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| Error::InvalidHex(format!("expected 32 bytes, got {decoded_len}")))?;
        Self::from_secret_bytes(secret_bytes)
    }

    /// Returns the public key.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the compressed (33-byte) public key encoding.
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key.serialize()
    }

    /// Returns the uncompressed (65-byte) public key encoding.
    pub fn public_key_uncompressed(&self) -> [u8; 65] {
        self.public_key.serialize_uncompressed()
    }

    /// Returns the compressed public key as a hex string.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key.serialize())
    }

    /// Returns the secret key as a hex string (without 0x prefix).
    pub fn secret_hex(&self) -> String {
        hex::encode(self.secret_bytes)
    }

    /// Returns the raw secret bytes.
    pub fn secret_bytes(&self) -> &[u8; 32] {
        &self.secret_bytes
    }

    /// Signs an arbitrary message with deterministic (RFC 6979) ECDSA.
    ///
    /// The message is digested with Keccak-256 first, matching the
    /// `eth_secp256k1` scheme. Returns the 64-byte compact signature.
    pub fn sign(&self, message: &[u8]) -> Result<[u8; 64]> {
        let digest = keccak256(message);
        let msg = Message::from_digest(digest);
        let secp = Secp256k1::new();
        let signature = secp.sign_ecdsa(&msg, &self.secret_key);
        Ok(signature.serialize_compact())
    }

    /// Verifies a compact signature over a message against this public key.
    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> Result<bool> {
        let digest = keccak256(message);
        let msg = Message::from_digest(digest);
        let sig = Signature::from_compact(signature)
            .map_err(|e| Error::Signing(format!("malformed signature: {e}")))?;
        let secp = Secp256k1::new();
        Ok(secp.verify_ecdsa(&msg, &sig, &self.public_key).is_ok())
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
        self.secret_key.non_secure_erase();
    }
}

/// Keccak-256 digest of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut digest = [0u8; 32];
    hasher.finalize(&mut digest);
    digest
}
