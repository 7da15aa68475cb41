//! System clipboard access
//!
//! Uses the arboard crate. Each call opens its own clipboard handle.

use arboard::Clipboard;

use crate::error::{Error, Result};

/// Message shown when the clipboard cannot be read.
pub const CLIPBOARD_DENIED: &str =
    "Clipboard access denied. Please use Ctrl+V in the editor directly.";

/// Copy plain text to the clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Read plain text from the clipboard. `None` if it holds no text.
pub fn read_text() -> Result<Option<String>> {
    let mut clipboard = Clipboard::new()?;
    match clipboard.get_text() {
        Ok(text) if text.is_empty() => Ok(None),
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(Error::from(e)),
    }
}
