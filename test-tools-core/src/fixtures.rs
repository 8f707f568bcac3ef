use std::{
    fs,
    path::{Path, PathBuf},
};

use log::*;
use tempfile::TempDir;

pub const KEYPAIR_FILE_NAME: &str = "keypair.json";

/// A keypair file written to a temporary directory.
/// The directory and the file are removed when this is dropped.
pub struct KeypairFile {
    dir: TempDir,
    path: PathBuf,
}

impl KeypairFile {
    /// Writes `bytes` as a JSON array, the same layout `solana-keygen` uses.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let json = serde_json::to_string(bytes).unwrap();
        Self::with_contents(&json)
    }

    /// Writes `contents` verbatim, useful for malformed keypair files.
    pub fn with_contents(contents: &str) -> Self {
        Self::with_raw_bytes(contents.as_bytes())
    }

    /// Writes `contents` as is, they don't even need to be UTF-8.
    pub fn with_raw_bytes(contents: &[u8]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(KEYPAIR_FILE_NAME);
        fs::write(&path, contents).unwrap();
        debug!("Wrote keypair fixture to '{}'", path.display());
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path inside the temp dir which does not exist.
    pub fn missing_sibling(&self) -> PathBuf {
        self.dir.path().join("missing.json")
    }
}

/// Keypair bytes `1, 2, 3, ..., len` which make encodings easy to verify.
pub fn sequential_bytes(len: u8) -> Vec<u8> {
    (1..=len).collect()
}
