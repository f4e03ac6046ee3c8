// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for `corelib-probe` using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! corelib-probe [global options] <command>
//! get NAME
//! list [--capacity N] [--raw | --json]
//! cpu
//! exit CODE
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Probe for the native environment shim.
///
/// Calls each shim operation against the live process and prints the
/// result.
#[derive(Debug, Parser)]
#[command(
    name = "corelib-probe",
    author,
    version,
    about = "Exercise the native environment shim",
    long_about = "corelib-probe Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Calls the environment, CPU and exit primitives that the\n\
                  native shim exposes to the managed runtime, against the\n\
                  current process.",
    after_help = "CONFIG FILES:\n\n\
                  Files given with --ini are loaded in order, followed by\n\
                  `corelib.toml` in the current directory if it exists. Use\n\
                  --no-default-inis to skip the latter. CORELIB_* environment\n\
                  variables override both, e.g.\n\
                  CORELIB_ENUMERATION__INITIAL_CAPACITY=4096."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints the effective configuration.
    Options,

    /// Prints the value of an environment variable.
    Get(GetArgs),

    /// Enumerates the environment through the wire format.
    List(ListArgs),

    /// Prints the current logical CPU index.
    Cpu,

    /// Terminates the process with an exit code.
    Exit(ExitArgs),
}

/// Arguments for `get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name, matched exactly.
    pub name: String,
}

/// Arguments for `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Use a single fixed buffer of this many bytes instead of growing.
    /// Shows exactly what a caller with that buffer would receive.
    #[arg(short = 'c', long, value_name = "BYTES")]
    pub capacity: Option<usize>,

    /// Print the raw wire block instead of one record per line.
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,

    /// Print records as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `exit`.
#[derive(Debug, Clone, Args)]
pub struct ExitArgs {
    /// Status code handed to the OS.
    #[arg(allow_negative_numbers = true)]
    pub code: i32,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
