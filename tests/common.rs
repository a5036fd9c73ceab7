//! Shared test helpers.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

use addhost::block::{Entry, Markers};

/// Create a temp directory for hosts and config files.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("add_host_test_")
        .tempdir()
        .expect("temp dir")
}

pub fn web_server_markers() -> Markers {
    Markers::for_app("web-server")
}

pub fn entry(hostname: &str) -> Entry {
    Entry::new("127.0.0.1", hostname)
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).expect("write test file");
}
