//! Tests for loading TUI configuration files.

use std::io::Write;
use strictly_rewind::SortOrder;
use strictly_rewind_tui::TuiConfig;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
sort_order = "descending"
highlight_winning_line = false
log_file = "rewind.log"
"#
    )
    .expect("write config");

    let config = TuiConfig::from_file(file.path()).expect("valid config");

    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert!(!config.highlight_winning_line());
    assert_eq!(config.log_file().to_str(), Some("rewind.log"));
}

#[test]
fn test_partial_config_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"sort_order = "ascending""#).expect("write config");

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_invalid_config_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"sort_order = "sideways""#).expect("write config");

    let err = TuiConfig::from_file(file.path()).expect_err("unknown order");
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
}
