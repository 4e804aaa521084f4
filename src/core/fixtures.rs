//! Recording helper for persisting raw HTTP bodies as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("SR_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Symbols and queries may carry `^`, `=`, spaces or CJK text; keep file names portable.
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}_{}.{}", endpoint, sanitize(key), ext));
    fs::write(&path, body)?;

    if env::var("SR_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("SR_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
