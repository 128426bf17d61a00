//! Level filtering and the runtime debug switch, observed through the log file
//!
//! Kept in its own test binary with a single test: the logger state is
//! process-global.

#![cfg(all(feature = "file-logging", feature = "log-info", feature = "log-debug"))]

use curricu_forge::logger::{
    close_file_logging, disable_debug, enable_debug, init_file_logging, set_level, LogLevel,
};
use curricu_forge::{debug, error, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_and_debug_switch_filter_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("capture.log");
    assert!(init_file_logging(&log_path));

    set_level(LogLevel::Debug);
    disable_debug();
    debug!("debug while switched off");
    enable_debug();
    debug!("debug while switched on");
    info!("info at debug level");

    set_level(LogLevel::Warn);
    info!("info above warn");
    debug!("debug above warn");
    warn!("warn at warn level");
    error!("error at warn level");

    close_file_logging();
    disable_debug();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[DEBUG] debug while switched on",
            "[INFO] info at debug level",
            "[WARN] warn at warn level",
            "[ERROR] error at warn level",
        ]
    );
}
