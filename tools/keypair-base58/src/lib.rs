//! Converts a keypair file, a JSON array of bytes with the secret key first,
//! into the Base58 string of its secret key.

use std::io::Write;

use log::*;

pub mod cli;
mod encoder;
pub mod errors;
mod keypair;
mod reporter;

pub use encoder::*;
use errors::{KeypairBase58Error, KeypairBase58Result};
pub use keypair::*;
pub use reporter::*;

/// Loads the keypair from `source` and returns the Base58 encoding of
/// the selected `part`.
pub fn convert_keypair(
    source: &KeypairSource,
    part: KeyPart,
) -> KeypairBase58Result<String> {
    let keypair = source.load()?;
    encode_key_part(&keypair, part)
}

/// Runs the full conversion and writes the result to `out`.
/// Nothing is written when loading or encoding fails.
pub fn run<W: Write>(
    source: &KeypairSource,
    part: KeyPart,
    out: &mut W,
) -> KeypairBase58Result<()> {
    let encoded = convert_keypair(source, part)?;
    debug!("Encoded {} from {}", part, source);
    report(out, &encoded).map_err(KeypairBase58Error::Output)
}
