// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `cpu` command implementation.

use std::io::Write;

use crate::core::cpu::{ProcessorInfo, UNSUPPORTED_CPU_INDEX, logical_cpu_count};
use crate::core::env::EnvironmentTable;
use crate::error::Result;
use crate::shim::EnvironmentShim;

/// Handler for the `cpu` command.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn run_cpu_command<E: EnvironmentTable, P: ProcessorInfo>(
    shim: &EnvironmentShim<E, P>,
    out: &mut dyn Write,
) -> Result<()> {
    let index = shim.current_cpu_index();
    if index == UNSUPPORTED_CPU_INDEX {
        writeln!(out, "current_cpu: unsupported ({index})")?;
    } else {
        writeln!(out, "current_cpu: {index}")?;
    }
    writeln!(out, "logical_cpus: {}", logical_cpu_count())?;
    Ok(())
}
