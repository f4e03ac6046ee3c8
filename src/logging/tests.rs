// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, init_logging};

#[test]
fn test_log_level_bounds() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(7), None);
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::try_from(4u8).map(u8::from).ok(), Some(4));
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .map(|n| LogLevel::new(n).unwrap().to_filter_string())
        .collect();
    insta::assert_snapshot!(filters.join(" "), @"off corelib_native=error corelib_native=warn corelib_native=info corelib_native=debug corelib_native=trace trace");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_init_logging_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("probe.log");
    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .with_log_file(path.display().to_string())
        .build();

    // only one test in this binary installs a global subscriber
    let guard = init_logging(&config).unwrap();
    tracing::info!("hello from the test");
    drop(guard);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("hello from the test"));
}
