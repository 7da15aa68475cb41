//! Native save dialogs using the rfd crate

use rfd::FileDialog;
use std::path::PathBuf;

const TEXT_EXTENSIONS: &[&str] = &["txt", "text"];
const SHORTCUT_EXTENSIONS: &[&str] = &["url"];

/// Ask where to save a scratch document.
///
/// Returns `Some(PathBuf)` if a location was selected, `None` if cancelled.
pub fn save_file_dialog(default_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save As")
        .add_filter("Text Files", TEXT_EXTENSIONS)
        .add_filter("All Files", &["*"])
        .set_directory(default_directory())
        .set_file_name(default_name)
        .save_file()
}

/// Ask where to save the portfolio shortcut.
pub fn save_shortcut_dialog(default_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save As Shortcut")
        .add_filter("Internet Shortcut", SHORTCUT_EXTENSIONS)
        .set_directory(default_directory())
        .set_file_name(default_name)
        .save_file()
}

/// Downloads folder, falling back to the home directory.
fn default_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
