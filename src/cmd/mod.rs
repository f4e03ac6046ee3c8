// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> EnvironmentShim
//!   get, list, cpu, options
//! ```
//!
//! `exit` is handled in `main` because it has to release the log guard
//! before the process goes away.

pub mod config;
pub mod cpu;
pub mod env;
