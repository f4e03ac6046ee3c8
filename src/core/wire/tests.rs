// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    EnumerationLimits, Record, enumerate_to_vec, parse_block, serialized_len, write_block,
    write_entries,
};
use crate::core::env::container::Env;
use crate::error::ShimError;

const CANARY: u8 = 0xAA;

fn sample_env() -> Env {
    Env::from_pairs([("PATH", "/usr/bin"), ("FOO", "bar"), ("EMPTY", "")]).unwrap()
}

#[test]
fn test_write_block_full() {
    let env = sample_env();
    let mut buf = [0u8; 64];

    let written = write_block(&env, &mut buf);

    assert_eq!(written, serialized_len(&env));
    insta::assert_snapshot!(
        String::from_utf8_lossy(&buf[..written]),
        @"PATH=/usr/bin;FOO=bar;EMPTY=;"
    );
}

#[test]
fn test_write_block_exact_capacity() {
    let env = sample_env();
    let total = serialized_len(&env);
    let mut buf = vec![0u8; total];

    assert_eq!(write_block(&env, &mut buf), total);
    assert_eq!(buf.last(), Some(&b';'));
}

#[test]
fn test_write_block_zero_capacity() {
    let env = sample_env();
    let mut buf = [0u8; 0];
    assert_eq!(write_block(&env, &mut buf), 0);
}

#[test]
fn test_write_block_empty_table() {
    let env = Env::new();
    let mut buf = [CANARY; 8];
    assert_eq!(write_block(&env, &mut buf), 0);
    assert!(buf.iter().all(|&b| b == CANARY));
}

#[test]
fn test_write_block_truncates_mid_record() {
    let env = sample_env();
    let full = {
        let mut buf = vec![0u8; serialized_len(&env)];
        write_block(&env, &mut buf);
        buf
    };

    // every cutoff, including ones that land on separators
    for capacity in 1..full.len() {
        let mut backing = vec![CANARY; capacity + 16];
        let written = write_block(&env, &mut backing[..capacity]);

        assert_eq!(written, capacity, "capacity {capacity}");
        assert_eq!(&backing[..capacity], &full[..capacity], "capacity {capacity}");
        assert!(
            backing[capacity..].iter().all(|&b| b == CANARY),
            "wrote past capacity {capacity}"
        );
    }
}

#[test]
fn test_write_block_truncation_keeps_partial_record() {
    let env = sample_env();
    let mut buf = [0u8; 18];

    let written = write_block(&env, &mut buf);

    insta::assert_snapshot!(String::from_utf8_lossy(&buf[..written]), @"PATH=/usr/bin;FOO=");
}

#[test]
fn test_write_entries_copies_entries_verbatim() {
    let entries: [&[u8]; 4] = [b"A=1", b"NOEQ", b"=x", b"B=2"];
    let mut buf = [0u8; 64];

    let written = write_entries(entries, &mut buf);

    insta::assert_snapshot!(
        String::from_utf8_lossy(&buf[..written]),
        @"A=1;NOEQ;=x;B=2;"
    );
}

#[test]
fn test_write_entries_truncates_at_capacity() {
    let entries: [&[u8]; 3] = [b"A=1", b"NOEQ", b"B=2"];
    // "A=1;NOEQ;B=2;" is 13 bytes
    for capacity in 0..13 {
        let mut backing = [CANARY; 32];
        let written = write_entries(entries, &mut backing[..capacity]);

        assert_eq!(written, capacity);
        assert_eq!(&backing[..capacity], &b"A=1;NOEQ;B=2;"[..capacity]);
        assert!(backing[capacity..].iter().all(|&b| b == CANARY));
    }
}

#[test]
fn test_serialized_len() {
    assert_eq!(serialized_len(&Env::new()), 0);
    assert_eq!(serialized_len(&sample_env()), "PATH=/usr/bin;FOO=bar;EMPTY=;".len());
}

#[test]
fn test_enumerate_to_vec_grows() {
    let mut env = Env::new();
    for i in 0..100 {
        env.set(format!("VAR_{i:03}"), "x".repeat(40)).unwrap();
    }
    let limits = EnumerationLimits {
        initial_capacity: 16,
        max_capacity: 1 << 20,
    };

    let block = enumerate_to_vec(&env, limits).unwrap();

    assert_eq!(block.len(), serialized_len(&env));
    assert_eq!(parse_block(&block).records.len(), 100);
}

#[test]
fn test_enumerate_to_vec_exact_fit_at_limit() {
    let env = sample_env();
    let total = serialized_len(&env);
    let limits = EnumerationLimits {
        initial_capacity: total,
        max_capacity: total,
    };

    let block = enumerate_to_vec(&env, limits).unwrap();
    assert_eq!(block.len(), total);
}

#[test]
fn test_enumerate_to_vec_limit_exceeded() {
    let env = sample_env();
    let limits = EnumerationLimits {
        initial_capacity: 4,
        max_capacity: 16,
    };

    let err = enumerate_to_vec(&env, limits).unwrap_err();
    assert!(matches!(err, ShimError::BufferLimitExceeded { limit: 16 }));
}

#[test]
fn test_enumerate_to_vec_zero_initial_capacity() {
    let env = sample_env();
    let limits = EnumerationLimits {
        initial_capacity: 0,
        max_capacity: 1024,
    };

    let block = enumerate_to_vec(&env, limits).unwrap();
    assert_eq!(block, b"PATH=/usr/bin;FOO=bar;EMPTY=;");
}

#[test]
fn test_parse_block_full() {
    let parsed = parse_block(b"PATH=/usr/bin;FOO=bar;EMPTY=;");

    assert!(!parsed.is_truncated());
    assert_eq!(
        parsed.records,
        vec![
            Record {
                key: b"PATH",
                value: b"/usr/bin"
            },
            Record {
                key: b"FOO",
                value: b"bar"
            },
            Record {
                key: b"EMPTY",
                value: b""
            },
        ]
    );
}

#[test]
fn test_parse_block_truncated_tail() {
    let parsed = parse_block(b"PATH=/usr/bin;FOO=b");

    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.incomplete_tail, Some(&b"FOO=b"[..]));
}

#[test]
fn test_parse_block_splits_on_first_equals() {
    let parsed = parse_block(b"OPTS=a=b=c;NOEQ;");

    let pairs: Vec<_> = parsed.records.iter().map(Record::to_lossy_pair).collect();
    insta::assert_snapshot!(format!("{pairs:?}"), @r#"[("OPTS", "a=b=c"), ("NOEQ", "")]"#);
}

#[test]
fn test_parse_block_empty_and_separators_only() {
    assert_eq!(parse_block(b""), super::ParsedBlock::default());
    assert!(parse_block(b";;;").records.is_empty());
}

#[test]
fn test_semicolon_in_value_is_not_escaped() {
    let env = Env::from_pairs([("LIST", "a;b")]).unwrap();
    let block = enumerate_to_vec(&env, EnumerationLimits::default()).unwrap();

    // the format has no escaping: the value splits into two records
    let parsed = parse_block(&block);
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[0].value, b"a");
    assert_eq!(parsed.records[1].key, b"b");
}
