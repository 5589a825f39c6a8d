//! Synchronous `.dot` / `.gv` file loading and saving.
//!
//! DOT sources are small text files, so reads happen on the UI thread
//! behind an upper size guard rather than through a background loader.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Refuse to load anything larger than this; a multi-megabyte "DOT file"
/// is almost certainly the wrong file.
pub const MAX_DOT_FILE_BYTES: u64 = 4 * 1024 * 1024;

/// Reads a DOT source file into a string.
pub fn load_dot_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    if metadata.len() > MAX_DOT_FILE_BYTES {
        bail!(
            "{} is {} bytes, larger than the {} byte limit for DOT sources",
            path.display(),
            metadata.len(),
            MAX_DOT_FILE_BYTES
        );
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes a DOT source to disk.
pub fn save_dot_file(path: &Path, source: &str) -> Result<()> {
    fs::write(path, source).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_save_and_load_round_trip() -> Result<()> {
        let path = env::temp_dir().join("dotdeck_io_test.dot");
        let source = "digraph T {\n  a -> b;\n}\n";

        save_dot_file(&path, source)?;
        let loaded = load_dot_file(&path)?;
        assert_eq!(loaded, source);

        let _ = fs::remove_file(&path);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = env::temp_dir().join("dotdeck_io_missing.dot");
        let _ = fs::remove_file(&path);
        let err = load_dot_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to stat"));
    }

    #[test]
    fn test_load_rejects_oversized_file() -> Result<()> {
        let path = env::temp_dir().join("dotdeck_io_oversized.dot");
        let big = "x".repeat((MAX_DOT_FILE_BYTES + 1) as usize);
        fs::write(&path, big)?;

        let err = load_dot_file(&path).unwrap_err();
        assert!(err.to_string().contains("byte limit"));

        let _ = fs::remove_file(&path);
        Ok(())
    }
}
