//! Platform abstraction for the hosts file location and raw read/write.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod unix;
pub mod windows;

use crate::block;
use crate::error::{HostsError, Result};

/// Operating-system families with a known hosts file location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// Linux and macOS.
    Unix,
}

impl Platform {
    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" | "macos" => Ok(Platform::Unix),
            other => Err(HostsError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn hosts_file(self) -> Box<dyn HostsFile> {
        match self {
            Platform::Windows => Box::new(windows::WindowsHostsFile),
            Platform::Unix => Box::new(unix::UnixHostsFile),
        }
    }
}

/// Read and write access to one hosts file.
///
/// Implementations only differ in location and in the privilege hint attached
/// to permission errors.
pub trait HostsFile {
    fn path(&self) -> &Path;

    /// Appended to permission-denied messages (e.g. "Run as administrator.").
    fn privilege_hint(&self) -> Option<&'static str> {
        None
    }

    /// Read all lines, terminators included. A missing file is an empty sequence.
    fn read_lines(&self) -> Result<Vec<String>> {
        match fs::read_to_string(self.path()) {
            Ok(content) => Ok(block::split_lines(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!("Hosts file not found, starting with empty list.");
                Ok(Vec::new())
            }
            Err(e) => Err(HostsError::from_io(self.path(), e, self.privilege_hint())),
        }
    }

    /// Overwrite the file with `lines` in a single write.
    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let path = self.path();
        let map_err = |e| HostsError::from_io(path, e, self.privilege_hint());
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(map_err)?;
        file.write_all(block::join_lines(lines).as_bytes())
            .map_err(map_err)?;
        Ok(())
    }
}

/// Hosts file at a caller-supplied path.
#[derive(Debug, Clone)]
pub struct CustomHostsFile {
    path: PathBuf,
}

impl CustomHostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HostsFile for CustomHostsFile {
    fn path(&self) -> &Path {
        &self.path
    }
}

/// Pick the hosts file: `custom` if given, otherwise the current platform's default.
pub fn hosts_file(custom: Option<PathBuf>) -> Result<Box<dyn HostsFile>> {
    hosts_file_for(custom, std::env::consts::OS)
}

/// Same as [`hosts_file`] with an explicit OS name.
pub fn hosts_file_for(custom: Option<PathBuf>, os: &str) -> Result<Box<dyn HostsFile>> {
    if let Some(path) = custom {
        return Ok(Box::new(CustomHostsFile::new(path)));
    }
    Ok(Platform::from_os(os)?.hosts_file())
}

/// Path that [`hosts_file`] would use.
pub fn resolve_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    Ok(hosts_file(custom)?.path().to_path_buf())
}
