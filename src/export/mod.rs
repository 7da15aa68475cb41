//! Export of scratch documents and portfolio shortcuts
//!
//! - `export_scratch` writes a scratch document to a user-chosen file
//! - `export_shortcut` writes an `.url` Internet Shortcut to the portfolio
//! - [`clipboard`] copies text out of and into the system clipboard

pub mod clipboard;

pub use clipboard::{copy_text, read_text, CLIPBOARD_DENIED};

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};

/// Default file name for the portfolio shortcut.
pub const SHORTCUT_FILE_NAME: &str = "Suman_Mandal_Portfolio.url";

/// Write scratch content to `path`.
pub fn export_scratch(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported scratch document to {}", path.display());
    Ok(())
}

/// Body of an Internet Shortcut file pointing at `url`.
pub fn shortcut_contents(url: &str) -> String {
    format!("[InternetShortcut]\nURL={}\n", url)
}

/// Write an Internet Shortcut to `url` at `path`.
pub fn export_shortcut(path: &Path, url: &str) -> Result<()> {
    fs::write(path, shortcut_contents(url)).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved shortcut to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_scratch_writes_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Untitled.txt");

        export_scratch(&path, "line one\nline two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_export_scratch_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        export_scratch(&path, "old").unwrap();
        export_scratch(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("Untitled.txt");

        let result = export_scratch(&path, "x");
        match result {
            Err(Error::FileWrite { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileWrite, got {:?}", other),
        }
    }

    #[test]
    fn test_shortcut_contents() {
        assert_eq!(
            shortcut_contents("https://suman-mandal.dev"),
            "[InternetShortcut]\nURL=https://suman-mandal.dev\n"
        );
    }

    #[test]
    fn test_export_shortcut() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SHORTCUT_FILE_NAME);
        export_shortcut(&path, "https://example.com").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[InternetShortcut]"));
        assert!(written.contains("URL=https://example.com"));
    }
}
