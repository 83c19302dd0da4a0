//! # dualkey
//!
//! HD key derivation for a single identity usable on both a Cosmos-style
//! chain (bech32 account address) and Ethereum (0x-hex address), using the
//! `eth_secp256k1` scheme.
//!
//! ## Architecture
//!
//! - `crypto`: secp256k1 keypairs, signing, and both address encodings
//! - `hd`: BIP-39 mnemonics and BIP-32 path derivation
//! - `wallet`: the wallet model (secret key material + public identity)
//! - `config`: per-chain derivation parameters

pub mod config;
pub mod crypto;
pub mod error;
pub mod hd;
pub mod wallet;

pub use config::ChainConfig;
pub use crypto::{AccountAddress, EthAddress, Keypair};
pub use error::{Error, Result};
pub use hd::{generate_mnemonic, validate_mnemonic};
pub use wallet::{PublicIdentity, Wallet, WalletExport};
