use std::path::PathBuf;

use clap::Parser;

use crate::{KeyPart, KeypairSource};

pub const KEY_PART_ENV: &str = "KEYPAIR_BASE58_PART";

#[derive(Debug, Parser)]
#[command(name = "keypair-base58")]
#[command(version)]
#[command(
    about = "Prints the Base58 encoded secret key of a keypair file",
    long_about = "Example: keypair-base58 ~/.config/solana/id.json"
)]
pub struct Cli {
    /// Path to the keypair JSON file, or '-' for stdin
    pub keypair_file: PathBuf,

    /// Part of the keypair to encode
    #[arg(long, short, value_enum, env = KEY_PART_ENV, default_value_t)]
    pub part: KeyPart,
}

impl Cli {
    pub fn source(&self) -> KeypairSource {
        KeypairSource::from(self.keypair_file.clone())
    }
}
