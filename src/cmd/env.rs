// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `get` and `list` command implementations.

use std::io::Write;

use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{GetArgs, ListArgs};
use crate::config::Config;
use crate::core::cpu::ProcessorInfo;
use crate::core::env::EnvironmentTable;
use crate::core::wire::{self, parse_block};
use crate::error::Result;
use crate::shim::EnvironmentShim;

/// Handler for the `get` command.
///
/// # Errors
///
/// Returns an error if the variable is not set or output fails.
pub fn run_get_command<E: EnvironmentTable, P: ProcessorInfo>(
    args: &GetArgs,
    shim: &EnvironmentShim<E, P>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(value) = shim.get_variable(&args.name) else {
        anyhow::bail!("{} is not set", args.name);
    };
    out.write_all(&value)?;
    out.write_all(b"\n")?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ListOutput {
    bytes: usize,
    records: Vec<RecordOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    incomplete_tail: Option<String>,
}

#[derive(Debug, Serialize)]
struct RecordOutput {
    key: String,
    value: String,
}

/// Handler for the `list` command.
///
/// # Errors
///
/// Returns an error if the grow-and-retry enumeration hits its configured
/// ceiling or output fails.
pub fn run_list_command<E: EnvironmentTable, P: ProcessorInfo>(
    args: &ListArgs,
    shim: &EnvironmentShim<E, P>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let block = match args.capacity {
        Some(capacity) => {
            let mut buf = vec![0; capacity];
            let written = shim.enumerate_variables(&mut buf);
            if written == capacity && capacity > 0 {
                warn!(capacity, "buffer filled completely, block may be truncated");
            }
            buf.truncate(written);
            buf
        }
        None => wire::enumerate_to_vec(shim.table(), config.limits())?,
    };

    if args.raw {
        out.write_all(&block)?;
        out.write_all(b"\n")?;
        return Ok(());
    }

    let parsed = parse_block(&block);
    info!(
        bytes = block.len(),
        records = parsed.records.len(),
        truncated = parsed.is_truncated(),
        "environment enumerated"
    );

    if args.json {
        let output = ListOutput {
            bytes: block.len(),
            records: parsed
                .records
                .iter()
                .map(|r| {
                    let (key, value) = r.to_lossy_pair();
                    RecordOutput { key, value }
                })
                .collect(),
            incomplete_tail: parsed
                .incomplete_tail
                .map(|t| String::from_utf8_lossy(t).into_owned()),
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        out.write_all(b"\n")?;
        return Ok(());
    }

    for record in &parsed.records {
        out.write_all(record.key)?;
        out.write_all(b"=")?;
        out.write_all(record.value)?;
        out.write_all(b"\n")?;
    }
    if let Some(tail) = parsed.incomplete_tail {
        warn!(
            tail = %String::from_utf8_lossy(tail),
            "last record cut off by buffer capacity"
        );
    }
    Ok(())
}
