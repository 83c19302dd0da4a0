//! Dual-chain wallet CLI
//!
//! Usage:
//!   dualkey generate                     # New mnemonic + derived wallet
//!   dualkey recover "<12 words>"         # Derive from an existing mnemonic
//!   dualkey import <hex-private-key>     # Wrap a raw private key
//!   dualkey sign <hex-private-key> <msg> # Sign a UTF-8 message

use std::process;

use clap::{Parser, Subcommand};

use dualkey::{generate_mnemonic, ChainConfig, Wallet};

/// Dual Cosmos/Ethereum HD wallet tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bech32 prefix for the account address
    #[arg(long, default_value = "cosmos")]
    prefix: String,

    /// BIP-44 coin type
    #[arg(long, default_value = "60")]
    coin_type: u32,

    /// BIP-44 account number
    #[arg(long, default_value = "0")]
    account: u32,

    /// BIP-44 address index
    #[arg(long, default_value = "0")]
    index: u32,

    /// BIP-39 passphrase (changes all derived addresses)
    #[arg(long, default_value = "")]
    passphrase: String,

    /// Emit JSON instead of the text report
    #[arg(long, default_value = "false")]
    json: bool,

    /// Include the private key in the output
    #[arg(long, default_value = "false")]
    show_private: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a fresh mnemonic and derive its wallet
    Generate,
    /// Derive a wallet from an existing mnemonic phrase
    Recover {
        /// The 12-word BIP-39 phrase, quoted
        mnemonic: String,
    },
    /// Build a wallet from a raw hex private key (no HD derivation)
    Import {
        /// 32-byte private key, hex encoded
        private_key: String,
    },
    /// Sign a UTF-8 message with a raw hex private key
    Sign {
        /// 32-byte private key, hex encoded
        private_key: String,
        /// Message to sign
        message: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> dualkey::Result<()> {
    let config = ChainConfig {
        bech32_prefix: cli.prefix.clone(),
        coin_type: cli.coin_type,
        account: cli.account,
        index: cli.index,
        passphrase: cli.passphrase.clone(),
    };
    config.validate()?;

    match &cli.command {
        Command::Generate => {
            let mnemonic = generate_mnemonic()?;
            let wallet = Wallet::from_mnemonic(&mnemonic, &config)?;
            print_wallet(cli, &wallet, Some(&mnemonic));
        }
        Command::Recover { mnemonic } => {
            let wallet = Wallet::from_mnemonic(mnemonic, &config)?;
            print_wallet(cli, &wallet, None);
        }
        Command::Import { private_key } => {
            let wallet = Wallet::from_private_key_hex(private_key, &config)?;
            print_wallet(cli, &wallet, None);
        }
        Command::Sign {
            private_key,
            message,
        } => {
            let wallet = Wallet::from_private_key_hex(private_key, &config)?;
            let signature = wallet.sign(message.as_bytes())?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "address": wallet.identity().address,
                        "signature": hex::encode(signature),
                    })
                );
            } else {
                println!("Address:   {}", wallet.identity().address);
                println!("Signature: {}", hex::encode(signature));
            }
        }
    }
    Ok(())
}

fn print_wallet(cli: &Cli, wallet: &Wallet, mnemonic: Option<&str>) {
    if cli.json {
        let output = if cli.show_private {
            serde_json::to_string_pretty(&wallet.export())
        } else {
            serde_json::to_string_pretty(wallet.identity())
        };
        match output {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: JSON encoding failed: {}", e),
        }
        return;
    }

    if let Some(phrase) = mnemonic {
        println!("Mnemonic:    {}", phrase);
    }
    println!("Address:     {}", wallet.identity().address);
    println!("ETH Address: {}", wallet.identity().eth_address);
    println!("Public Key:  {}", wallet.identity().publickey);
    if cli.show_private {
        println!("Private Key: {}", wallet.key_material().secret_hex());
    }
}
