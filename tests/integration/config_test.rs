//! Config and profile loading through the public API

use std::io::Write;

use qterm::shell::Profile;
use qterm::Config;

#[test]
fn default_config_round_trips_through_toml() {
    let config = Config::default();
    let rendered = config.to_toml_string().unwrap();
    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn config_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        theme: "ocean".to_string(),
        boot_ms: 0,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn configured_profile_overrides_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "title = \"GHOST_SHELL\"\nwhoami = \"ghost@shell\""
    )
    .unwrap();

    let config = Config {
        profile_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let profile = config.load_profile().unwrap();
    assert_eq!(profile.title, "GHOST_SHELL");
    assert_eq!(profile.whoami, "ghost@shell");
    // Unspecified sections keep the CYBER2070 defaults.
    assert_eq!(profile.tree, Profile::cyber2070().tree);
}

#[test]
fn missing_profile_file_is_an_error() {
    let config = Config {
        profile_path: Some("/nonexistent/profile.toml".into()),
        ..Config::default()
    };
    assert!(config.load_profile().is_err());
}

#[test]
fn delay_source_reflects_latency_window() {
    use qterm::session::delay::DelaySource;
    use std::time::Duration;

    let config = Config {
        latency: qterm::config::Latency {
            min_ms: 10,
            max_ms: 10,
        },
        ..Config::default()
    };
    let mut source = config.delay_source();
    assert_eq!(source.next_delay(), Duration::from_millis(10));
}
