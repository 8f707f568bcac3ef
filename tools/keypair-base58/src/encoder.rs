use std::{fmt, ops::Range};

use clap::ValueEnum;
use log::*;

use crate::{
    errors::{KeypairBase58Error, KeypairBase58Result},
    keypair::KeypairBytes,
};

pub const SECRET_KEY_LENGTH: usize = 32;
pub const PUBLIC_KEY_LENGTH: usize = 32;
pub const KEYPAIR_LENGTH: usize = SECRET_KEY_LENGTH + PUBLIC_KEY_LENGTH;

/// Which bytes of the keypair end up in the Base58 output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyPart {
    /// First 32 bytes, any trailing bytes are ignored
    #[default]
    Secret,
    /// Bytes 32..64, requires at least 64 bytes
    Public,
    /// All bytes as loaded
    Keypair,
}

impl KeyPart {
    /// Minimum number of keypair bytes needed to encode this part.
    pub fn required_len(&self) -> usize {
        match self {
            KeyPart::Secret | KeyPart::Keypair => SECRET_KEY_LENGTH,
            KeyPart::Public => KEYPAIR_LENGTH,
        }
    }

    fn range(&self, keypair_len: usize) -> Range<usize> {
        match self {
            KeyPart::Secret => 0..SECRET_KEY_LENGTH,
            KeyPart::Public => SECRET_KEY_LENGTH..KEYPAIR_LENGTH,
            KeyPart::Keypair => 0..keypair_len,
        }
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyPart::Secret => write!(f, "secret key"),
            KeyPart::Public => write!(f, "public key"),
            KeyPart::Keypair => write!(f, "keypair"),
        }
    }
}

/// Encodes the first [SECRET_KEY_LENGTH] bytes of the keypair as raw Base58
/// (no version byte, no checksum).
pub fn encode_secret_key(
    keypair: &KeypairBytes,
) -> KeypairBase58Result<String> {
    encode_key_part(keypair, KeyPart::Secret)
}

pub fn encode_key_part(
    keypair: &KeypairBytes,
    part: KeyPart,
) -> KeypairBase58Result<String> {
    let required = part.required_len();
    if keypair.len() < required {
        return Err(KeypairBase58Error::Length {
            part,
            required,
            actual: keypair.len(),
        });
    }
    let range = part.range(keypair.len());
    trace!("Encoding {} from bytes {:?}", part, range);
    Ok(bs58::encode(&keypair.as_bytes()[range]).into_string())
}
