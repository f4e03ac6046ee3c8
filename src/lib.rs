// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!   managed runtime                corelib-probe (main.rs)
//!          |                              |
//!          v                        cli --> cmd
//!   ffi  CoreLibNative_*                  |
//!          |                              |
//!          +--------------+---------------+
//!                         v
//!                  shim::EnvironmentShim
//!                         |
//!   +---------------------+---------------------+
//!   |  core   env, wire, cpu, process           |
//!   +-------------------------------------------+
//!   |  foundation   error, logging, config      |
//!   +-------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
#[cfg(unix)]
pub mod ffi;
pub mod logging;
pub mod shim;
