//! Windows hosts file.

use std::path::Path;

use super::HostsFile;

pub const HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

pub struct WindowsHostsFile;

impl HostsFile for WindowsHostsFile {
    fn path(&self) -> &Path {
        Path::new(HOSTS_PATH)
    }

    fn privilege_hint(&self) -> Option<&'static str> {
        Some("Run as administrator.")
    }
}
