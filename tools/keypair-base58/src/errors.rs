use std::path::PathBuf;

use thiserror::Error;

use crate::KeyPart;

pub type KeypairBase58Result<T> = std::result::Result<T, KeypairBase58Error>;

#[derive(Debug, Error)]
pub enum KeypairBase58Error {
    #[error("Failed to read keypair from '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Keypair is not a JSON array of bytes: {0}")]
    Format(#[from] serde_json::Error),

    #[error(
        "Keypair has {actual} bytes, at least {required} are needed to encode the {part}"
    )]
    Length {
        part: KeyPart,
        required: usize,
        actual: usize,
    },

    #[error("Failed to write encoded key: {0}")]
    Output(#[source] std::io::Error),
}
