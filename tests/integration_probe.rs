// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests running the `corelib-probe` binary.
//!
//! Each test gets a child process with a controlled environment, which is
//! the only way to observe `exit` and to enumerate a known table.

use std::process::{Command, Output};

fn probe(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_corelib-probe"));
    cmd.env_clear()
        .args(["--no-default-inis", "--log-level", "0"])
        .args(args);
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run corelib-probe")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn probe_exit_code_propagates() {
    for code in [0, 3, 42] {
        let output = probe(&["exit", &code.to_string()], &[]);
        assert_eq!(output.status.code(), Some(code));
    }
}

#[test]
fn probe_get_present_and_absent() {
    let output = probe(&["get", "FOO"], &[("FOO", "bar")]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "bar\n");

    let output = probe(&["get", "FOO"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn probe_list_controlled_environment() {
    let output = probe(&["list"], &[("PATH", "/usr/bin"), ("FOO", "bar")]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert!(lines.contains(&"PATH=/usr/bin"));
    assert!(lines.contains(&"FOO=bar"));
}

#[test]
fn probe_list_fixed_capacity_truncates() {
    let output = probe(
        &["list", "--capacity", "5", "--raw"],
        &[("PATH", "/usr/bin"), ("FOO", "bar")],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end_matches('\n').len(), 5);
}

#[test]
fn probe_list_respects_env_config_ceiling() {
    let output = probe(
        &["list"],
        &[
            ("FOO", "bar"),
            ("PADDING", &"x".repeat(200)),
            ("CORELIB_ENUMERATION__INITIAL_CAPACITY", "8"),
            ("CORELIB_ENUMERATION__MAX_CAPACITY", "16"),
        ],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not fit in 16 bytes"));
}

#[test]
fn probe_cpu() {
    let output = probe(&["cpu"], &[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("current_cpu: "));
    assert!(text.contains("logical_cpus: "));
}

#[test]
fn probe_version() {
    let output = probe(&["version"], &[]);
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}
