//! Unix (Linux, macOS) hosts file.

use std::path::Path;

use super::HostsFile;

pub const HOSTS_PATH: &str = "/etc/hosts";

pub struct UnixHostsFile;

impl HostsFile for UnixHostsFile {
    fn path(&self) -> &Path {
        Path::new(HOSTS_PATH)
    }

    fn privilege_hint(&self) -> Option<&'static str> {
        Some("Run as root or with sudo.")
    }
}
