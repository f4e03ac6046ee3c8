// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` command implementation.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Handler for the `options` command.
///
/// Prints the loaded sources, then the merged configuration as JSON.
///
/// # Errors
///
/// Returns an error if serialization or output fails.
pub fn run_options_command(
    config: &Config,
    sources: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    for source in sources {
        writeln!(out, "# {source}")?;
    }
    serde_json::to_writer_pretty(&mut *out, config)?;
    out.write_all(b"\n")?;
    Ok(())
}
