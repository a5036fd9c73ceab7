//! Errors raised while locating, reading, or writing the hosts file.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HostsError {
    /// File exists but the process lacks the privilege to read or write it.
    #[error("Permission denied accessing hosts file {}.{}", .path.display(), hint_suffix(.hint))]
    AccessDenied {
        path: PathBuf,
        hint: Option<&'static str>,
    },

    /// No default hosts location is known for this OS and no custom path was given.
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("I/O error on hosts file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    match hint {
        Some(h) => format!(" {h}"),
        None => String::new(),
    }
}

impl HostsError {
    /// Classify an I/O failure: permission problems become `AccessDenied`.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error, hint: Option<&'static str>) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::PermissionDenied {
            HostsError::AccessDenied { path, hint }
        } else {
            HostsError::Io { path, source: err }
        }
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, HostsError::AccessDenied { .. })
    }
}

pub type Result<T> = std::result::Result<T, HostsError>;
