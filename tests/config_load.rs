//! Settings: defaults, config.toml values, APP_NAME override, marker text.

mod common;

use addhost::config::{ConfigFile, Settings};

#[test]
fn defaults_without_sources() {
    let s = Settings::from_sources(ConfigFile::default(), None);
    assert_eq!(s.app_name, "web-server");
    assert_eq!(s.host_address, "127.0.0.1");
}

#[test]
fn markers_use_app_name() {
    let s = Settings::from_sources(ConfigFile::default(), Some("my-app".to_string()));
    let m = s.markers();
    assert_eq!(m.header, "# START Added by my-app hosts");
    assert_eq!(m.footer, "# END my-app hosts");
}

#[test]
fn file_values_are_used() {
    let dir = common::temp_dir();
    let path = dir.path().join("config.toml");
    common::write_file(&path, "app_name = \"proxy\"\nhost_address = \"10.0.0.5\"\n");

    let file = ConfigFile::load(&path).unwrap();
    let s = Settings::from_sources(file, None);
    assert_eq!(s.app_name, "proxy");
    assert_eq!(s.host_address, "10.0.0.5");
}

#[test]
fn env_app_name_beats_file() {
    let file = ConfigFile {
        app_name: Some("from-file".to_string()),
        host_address: None,
    };
    let s = Settings::from_sources(file, Some("from-env".to_string()));
    assert_eq!(s.app_name, "from-env");
    assert_eq!(s.host_address, "127.0.0.1");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = common::temp_dir();
    let file = ConfigFile::load(&dir.path().join("nope.toml")).unwrap();
    assert!(file.app_name.is_none());
    assert!(file.host_address.is_none());
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = common::temp_dir();
    let path = dir.path().join("config.toml");
    common::write_file(&path, "app_name = [unclosed\n");
    let err = ConfigFile::load(&path).unwrap_err();
    assert!(err.to_string().contains("parse config"));
}
