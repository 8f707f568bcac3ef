use std::path::{Path, PathBuf};

/// Root of the cargo workspace, resolved from the manifest dir of this crate.
pub fn cargo_workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("test-tools-core lives inside the workspace")
        .to_path_buf()
}

/// Directory holding the keypair JSON fixtures of the keypair-base58 tool.
pub fn keypair_fixtures_dir() -> PathBuf {
    cargo_workspace_dir()
        .join("tools")
        .join("keypair-base58")
        .join("tests")
        .join("fixtures")
}

pub fn keypair_fixture(name: &str) -> PathBuf {
    keypair_fixtures_dir().join(name)
}
