//! Hosts file selection: custom path, known platforms, unsupported OS.

use addhost::error::HostsError;
use addhost::platform::{self, Platform};
use std::path::{Path, PathBuf};

#[test]
fn custom_path_wins() {
    let file = platform::hosts_file_for(Some(PathBuf::from("/tmp/my-hosts")), "plan9").unwrap();
    assert_eq!(file.path(), Path::new("/tmp/my-hosts"));
    assert_eq!(file.privilege_hint(), None);
}

#[test]
fn unix_family_uses_etc_hosts() {
    for os in ["linux", "macos"] {
        assert_eq!(Platform::from_os(os).unwrap(), Platform::Unix);
        let file = platform::hosts_file_for(None, os).unwrap();
        assert_eq!(file.path(), Path::new("/etc/hosts"));
        assert_eq!(file.privilege_hint(), Some("Run as root or with sudo."));
    }
}

#[test]
fn windows_uses_drivers_etc() {
    let file = platform::hosts_file_for(None, "windows").unwrap();
    assert_eq!(file.path(), Path::new(r"C:\Windows\System32\drivers\etc\hosts"));
    assert_eq!(file.privilege_hint(), Some("Run as administrator."));
}

#[test]
fn unknown_os_is_unsupported() {
    let err = platform::hosts_file_for(None, "freebsd").err().unwrap();
    assert!(matches!(err, HostsError::UnsupportedPlatform(ref os) if os == "freebsd"));
    assert_eq!(err.to_string(), "Unsupported operating system: freebsd");
}

#[cfg(target_os = "linux")]
#[test]
fn resolve_path_on_linux() {
    assert_eq!(platform::resolve_path(None).unwrap(), PathBuf::from("/etc/hosts"));
    assert_eq!(
        platform::resolve_path(Some(PathBuf::from("custom"))).unwrap(),
        PathBuf::from("custom")
    );
}
