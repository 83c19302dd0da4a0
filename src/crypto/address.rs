//! Address encodings derived from a secp256k1 public key.
//!
//! Both encodings are a function of the same key:
//! - Ethereum: last 20 bytes of Keccak256(uncompressed pubkey without the
//!   0x04 prefix byte), rendered as 0x-hex (EIP-55 checksum casing).
//! - Cosmos account: first 20 bytes of RIPEMD160(SHA256(compressed pubkey)),
//!   rendered as bech32 with the chain's prefix.

use std::fmt;

use ripemd::Ripemd160;
use secp256k1::PublicKey;
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use crate::error::{Error, Result};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthAddress([u8; 20]);

impl EthAddress {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives the address from a secp256k1 public key.
    ///
    /// Serializes the key uncompressed (65 bytes), drops the 0x04 prefix
    /// byte, hashes the remaining 64 bytes with Keccak-256 and keeps the
    /// last 20 bytes.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let public_key_bytes = public_key.serialize_uncompressed();

        let mut hasher = Keccak::v256();
        hasher.update(&public_key_bytes[1..]);

        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);

        Self(address_bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let mut hasher = Keccak::v256();
        hasher.update(hex_addr.as_bytes());
        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if c.is_ascii_digit() {
                checksum.push(c);
            } else if hash_nibble >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }
}

impl fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthAddress({})", self.to_checksum())
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

/// A Cosmos-style account address (20 bytes) plus its bech32 prefix.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress {
    bytes: [u8; 20],
    prefix: String,
}

impl AccountAddress {
    /// Derives the account address from a secp256k1 public key.
    ///
    /// hash160 of the compressed (33-byte) key: SHA256 then RIPEMD160,
    /// keeping all 20 digest bytes.
    pub fn from_public_key(public_key: &PublicKey, prefix: &str) -> Self {
        let compressed = public_key.serialize();
        let sha = Sha256::digest(compressed);
        let hash160 = Ripemd160::digest(sha);

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash160);

        Self {
            bytes,
            prefix: prefix.to_string(),
        }
    }

    /// Returns the raw 20 account bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }

    /// Returns the bech32 prefix this address was encoded with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Renders the address as a bech32 string (classic Bech32 variant).
    pub fn to_bech32(&self) -> Result<String> {
        let hrp = bech32::Hrp::parse(&self.prefix)
            .map_err(|e| Error::Encoding(format!("invalid bech32 prefix: {e}")))?;
        bech32::encode::<bech32::Bech32>(hrp, &self.bytes)
            .map_err(|e| Error::Encoding(format!("bech32 encoding failed: {e}")))
    }

    /// Decodes a bech32 account address string back into prefix + bytes.
    pub fn from_bech32(encoded: &str) -> Result<Self> {
        let (hrp, data) =
            bech32::decode(encoded).map_err(|e| Error::Encoding(format!("bech32: {e}")))?;
        let data_len = data.len();
        let bytes: [u8; 20] = data
            .try_into()
            .map_err(|_| Error::Encoding(format!("expected 20 address bytes, got {data_len}")))?;
        Ok(Self {
            bytes,
            prefix: hrp.to_lowercase(),
        })
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({}, 0x{})", self.prefix, hex::encode(self.bytes))
    }
}
