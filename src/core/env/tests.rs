// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::current_env;
use super::EnvironmentTable;
use crate::core::env::container::Env;
use crate::core::env::os::OsEnvironment;
use crate::core::env::types::VarName;
use crate::error::ShimError;
use std::ops::ControlFlow;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar").unwrap();

    assert_eq!(env.get("FOO"), Some(&b"bar"[..]));
    // POSIX keys are case-sensitive
    assert_eq!(env.get("foo"), None);
    assert_eq!(env.get("NOTEXIST"), None);
}

#[test]
fn test_env_keeps_insertion_order() {
    let mut env = Env::from_pairs([("B", "1"), ("A", "2"), ("C", "3")]).unwrap();
    env.set("A", "changed").unwrap();

    let keys: Vec<_> = env.iter().map(|(k, _)| k.to_vec()).collect();
    assert_eq!(keys, vec![b"B".to_vec(), b"A".to_vec(), b"C".to_vec()]);
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1").unwrap();

    // Modifying the clone triggers copy-on-write, doesn't affect env1
    let mut env2 = env1.clone();
    env2.set("KEY2", "value2").unwrap();

    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some(&b"value1"[..]));
    assert_eq!(env2.get("KEY2"), Some(&b"value2"[..]));
}

#[test]
fn test_env_remove() {
    let mut env = Env::from_pairs([("A", "1"), ("B", "2")]).unwrap();
    let snapshot = env.clone();

    env.remove("MISSING");
    assert_eq!(env.len(), 2);

    env.remove("A");
    assert_eq!(env.get("A"), None);
    assert_eq!(env.len(), 1);
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn test_env_rejects_invalid_names() {
    let mut env = Env::new();
    for name in ["", "A=B", "A;B", "A\0B"] {
        let err = env.set(name, "x").unwrap_err();
        assert!(matches!(err, ShimError::InvalidName { .. }), "{name:?}");
    }
    assert!(env.is_empty());
}

#[test]
fn test_var_name_reasons() {
    let reasons: Vec<_> = ["", "A=B", "A;B"]
        .into_iter()
        .map(|n| VarName::new(n).unwrap_err().to_string())
        .collect();
    insta::assert_snapshot!(reasons.join("\n"), @r"
    invalid variable name '': name is empty
    invalid variable name 'A=B': contains '='
    invalid variable name 'A;B': contains ';'
    ");
    assert!(matches!(
        VarName::new("A\0B"),
        Err(ShimError::InvalidName {
            reason: "contains NUL",
            ..
        })
    ));
}

#[test]
fn test_env_table_lookup_borrows() {
    let env = Env::from_pairs([("FOO", "bar")]).unwrap();
    let name = VarName::new("FOO").unwrap();

    let value = env.lookup(&name).unwrap();
    assert!(matches!(value, std::borrow::Cow::Borrowed(b"bar")));
}

#[test]
fn test_env_table_visit_stops_on_break() {
    let env = Env::from_pairs([("A", "1"), ("B", "2"), ("C", "3")]).unwrap();
    let mut seen = Vec::new();

    env.visit(&mut |key, _| {
        seen.push(key.to_vec());
        if key == b"B" {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    assert_eq!(seen, vec![b"A".to_vec(), b"B".to_vec()]);
}

#[test]
fn test_capture_skips_duplicates_and_keeps_first() {
    struct Duplicates;
    impl EnvironmentTable for Duplicates {
        fn lookup(&self, _: &VarName) -> Option<std::borrow::Cow<'_, [u8]>> {
            None
        }
        fn visit(&self, visitor: &mut dyn FnMut(&[u8], &[u8]) -> ControlFlow<()>) {
            for (k, v) in [
                (&b"A"[..], &b"first"[..]),
                (&b"A"[..], &b"second"[..]),
                (&b"=C:"[..], &b"x"[..]),
            ] {
                if visitor(k, v).is_break() {
                    break;
                }
            }
        }
    }

    let env = Env::capture(&Duplicates);
    assert_eq!(env.len(), 1);
    assert_eq!(env.get("A"), Some(&b"first"[..]));
}

#[test]
fn test_current_env() {
    // Behavioral test - PATH should exist
    let env = current_env();
    assert!(
        env.get("PATH").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_os_environment_lookup_missing() {
    let name = VarName::new("CORELIB_NATIVE_SURELY_UNSET_7F3A").unwrap();
    assert!(OsEnvironment.lookup(&name).is_none());
}

#[test]
fn test_os_environment_lookup_matches_std() {
    let name = VarName::new("PATH").unwrap();
    let expected = std::env::var_os("PATH").map(|v| v.into_encoded_bytes());
    let actual = OsEnvironment.lookup(&name).map(std::borrow::Cow::into_owned);
    assert_eq!(actual, expected);
}
