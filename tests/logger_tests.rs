//! Integration tests for logger behavior

use curricu_forge::error;
use curricu_forge::logger::set_level_from_str;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_tagged_lines() {
    use curricu_forge::logger::{close_file_logging, init_file_logging};
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("logs").join("curricuforge.log");

    assert!(init_file_logging(&log_path));
    // Other tests change the level concurrently; errors always pass the filter
    error!("file error line");
    error!("second error line");
    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[ERROR] file error line"));
    assert!(contents.contains("[ERROR] second error line"));
}
