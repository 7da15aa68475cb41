//! Error type shared by every Devfolio subsystem.
//!
//! Nothing here is fatal: callers either surface the message in a toast or
//! the error modal, or log it and carry on with defaults.

use std::fmt;
use std::io;
use std::path::PathBuf;

use log::warn;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// Writing a scratch document or shortcut to disk failed
    FileWrite { path: PathBuf, source: io::Error },

    ConfigLoad { path: PathBuf, source: BoxedSource },
    ConfigSave { path: PathBuf, source: BoxedSource },
    /// `config.json` exists but is not valid JSON
    ConfigParse {
        message: String,
        source: Option<BoxedSource>,
    },
    /// The platform exposes no per-user config directory
    ConfigDirNotFound,

    Clipboard(String),
    /// The assistant endpoint was unreachable or replied with an unusable body
    Chat {
        message: String,
        source: Option<BoxedSource>,
    },

    /// Bundled profile content is malformed
    Content(String),
    Application(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Chat {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
            Error::ConfigLoad { path, source } => {
                write!(f, "Could not read settings at '{}': {}", path.display(), source)
            }
            Error::ConfigSave { path, source } => {
                write!(f, "Could not store settings at '{}': {}", path.display(), source)
            }
            Error::ConfigParse { message, .. } => write!(f, "Malformed settings: {}", message),
            Error::ConfigDirNotFound => f.write_str("Configuration directory not found"),
            Error::Clipboard(msg) => write!(f, "Clipboard unavailable: {}", msg),
            Error::Chat { message, .. } => write!(f, "Chat request failed: {}", message),
            Error::Content(msg) => write!(f, "Invalid embedded content: {}", msg),
            Error::Application(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) | Error::FileWrite { source: err, .. } => Some(err),
            Error::ConfigLoad { source, .. } | Error::ConfigSave { source, .. } => {
                Some(source.as_ref())
            }
            Error::ConfigParse { source, .. } | Error::Chat { source, .. } => {
                source.as_deref().map(|s| s as &(dyn std::error::Error + 'static))
            }
            Error::ConfigDirNotFound
            | Error::Clipboard(_)
            | Error::Content(_)
            | Error::Application(_) => None,
        }
    }
}

/// Log-and-fallback for failures that should not interrupt the session.
pub trait ResultExt<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        self.unwrap_or_else(|err| {
            warn!("{}: {}; falling back to default", context, err);
            default
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arboard_error_maps_to_clipboard() {
        let err = Error::from(arboard::Error::ContentNotAvailable);
        assert!(matches!(err, Error::Clipboard(_)));
    }

    #[test]
    fn test_file_write_error_display() {
        let err = Error::FileWrite {
            path: PathBuf::from("/tmp/Untitled.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Untitled.txt"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_result: std::result::Result<String, _> = serde_json::from_str("invalid json");
        let err = Error::from(json_result.unwrap_err());
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_display_clipboard_error() {
        let err = Error::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }

    #[test]
    fn test_display_chat_error() {
        let err = Error::Chat {
            message: "missing API key".to_string(),
            source: None,
        };
        assert!(err.to_string().contains("missing API key"));
    }

    #[test]
    fn test_display_config_dir_not_found() {
        let err = Error::ConfigDirNotFound;
        assert_eq!(err.to_string(), "Configuration directory not found");
    }

    #[test]
    fn test_config_save_keeps_source() {
        use std::error::Error as StdError;
        let err = Error::ConfigSave {
            path: PathBuf::from("/nowhere/config.json"),
            source: Box::new(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_error_source_none_for_simple_variants() {
        use std::error::Error as StdError;
        assert!(Error::Application("test".to_string()).source().is_none());
        assert!(Error::Clipboard("test".to_string()).source().is_none());
        assert!(Error::Content("test".to_string()).source().is_none());
        assert!(Error::ConfigDirNotFound.source().is_none());
    }

    #[test]
    fn test_unwrap_or_warn_default_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.unwrap_or_warn_default(0, "test context"), 42);
    }

    #[test]
    fn test_unwrap_or_warn_default_err() {
        let result: Result<i32> = Err(Error::Application("test".to_string()));
        assert_eq!(result.unwrap_or_warn_default(0, "test context"), 0);
    }
}
