//! Cryptographic primitives for the dual-chain wallet.
//!
//! This module provides:
//! - secp256k1 keypair construction, signing and verification
//! - Ethereum address derivation using Keccak-256
//! - Cosmos account address derivation using SHA256 + RIPEMD160

mod address;
mod keypair;

pub use address::{AccountAddress, EthAddress};
pub use keypair::{keccak256, Keypair};
