use std::{
    fmt, fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use log::*;

use crate::errors::{KeypairBase58Error, KeypairBase58Result};

/// Path argument which makes the tool read the keypair from stdin.
pub const STDIN_PATH: &str = "-";

// -----------------
// KeypairSource
// -----------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypairSource {
    File(PathBuf),
    Stdin,
}

impl KeypairSource {
    pub fn load(&self) -> KeypairBase58Result<KeypairBytes> {
        debug!("Loading keypair from {}", self);
        let json = match self {
            KeypairSource::File(path) => fs::read(path)
                .map_err(|source| KeypairBase58Error::FileAccess {
                    path: path.clone(),
                    source,
                })?,
            KeypairSource::Stdin => {
                let mut json = Vec::new();
                io::stdin().lock().read_to_end(&mut json).map_err(
                    |source| KeypairBase58Error::FileAccess {
                        path: PathBuf::from(STDIN_PATH),
                        source,
                    },
                )?;
                json
            }
        };
        parse_keypair_json(&json)
    }
}

impl From<PathBuf> for KeypairSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_PATH {
            KeypairSource::Stdin
        } else {
            KeypairSource::File(path)
        }
    }
}

impl fmt::Display for KeypairSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeypairSource::File(path) => write!(f, "'{}'", path.display()),
            KeypairSource::Stdin => write!(f, "stdin"),
        }
    }
}

// -----------------
// KeypairBytes
// -----------------
/// Raw keypair bytes as stored on disk, secret key first.
/// The length is not validated until a key part is sliced out of it.
#[derive(Clone, PartialEq, Eq)]
pub struct KeypairBytes(Vec<u8>);

impl KeypairBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Never print key material.
impl fmt::Debug for KeypairBytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeypairBytes")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

// -----------------
// Loading
// -----------------
/// Reads the keypair file at `path` and parses it as a JSON byte array.
pub fn load_keypair(
    path: impl AsRef<Path>,
) -> KeypairBase58Result<KeypairBytes> {
    KeypairSource::File(path.as_ref().to_path_buf()).load()
}

/// Parses a JSON document whose top level value is an array of integers
/// in `0..=255`. Input that is not UTF-8 is a format error as well.
pub fn parse_keypair_json(
    json: impl AsRef<[u8]>,
) -> KeypairBase58Result<KeypairBytes> {
    let bytes: Vec<u8> = serde_json::from_slice(json.as_ref())?;
    debug!("Parsed keypair with {} bytes", bytes.len());
    Ok(KeypairBytes::new(bytes))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_parse_keypair_json_array() {
        let keypair = parse_keypair_json("[1, 2, 255]").unwrap();
        assert_eq!(keypair.as_bytes(), &[1, 2, 255]);
    }

    #[test]
    fn test_parse_keypair_json_whitespace_layout() {
        let keypair = parse_keypair_json("\n[\n  0,\n  7\n]\n").unwrap();
        assert_eq!(keypair.as_bytes(), &[0, 7]);
    }

    #[test]
    fn test_parse_keypair_json_empty_array() {
        let keypair = parse_keypair_json("[]").unwrap();
        assert!(keypair.is_empty());
    }

    #[test]
    fn test_parse_keypair_json_rejects_non_bytes() {
        for json in [
            r#"{"not":"an array"}"#,
            "[1, 256]",
            "[-1]",
            "[1.5]",
            r#"["1"]"#,
            "[1, 2",
            "",
        ] {
            assert_matches!(
                parse_keypair_json(json),
                Err(KeypairBase58Error::Format(_)),
                "{json}"
            );
        }
    }

    #[test]
    fn test_parse_keypair_json_rejects_invalid_utf8() {
        assert_matches!(
            parse_keypair_json([0xffu8, 0xfe]),
            Err(KeypairBase58Error::Format(_))
        );
        assert_matches!(
            parse_keypair_json(b"[1, 2]\xff"),
            Err(KeypairBase58Error::Format(_))
        );
    }

    #[test]
    fn test_source_from_path() {
        assert_eq!(
            KeypairSource::from(PathBuf::from("-")),
            KeypairSource::Stdin
        );
        assert_eq!(
            KeypairSource::from(PathBuf::from("id.json")),
            KeypairSource::File(PathBuf::from("id.json"))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let res = load_keypair("/definitely/not/here/keypair.json");
        assert_matches!(
            res,
            Err(KeypairBase58Error::FileAccess { path, source })
                if path == Path::new("/definitely/not/here/keypair.json")
                    && source.kind() == io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_debug_hides_key_material() {
        let keypair = KeypairBytes::new(vec![42; 64]);
        assert_eq!(format!("{keypair:?}"), "KeypairBytes { len: 64, .. }");
    }
}
