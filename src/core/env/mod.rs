// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable tables.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentTable (capability)
//!    lookup(&VarName) -> Option<Cow<[u8]>>
//!    visit(|key, value| ControlFlow)
//!         |
//!    +----+-------------+
//!    v                  v
//!   Env            OsEnvironment
//!   in-memory      process table
//!   copy-on-write  via std::env
//! ```
//!
//! - **Case-sensitive** keys (POSIX semantics)
//! - **Insertion order** preserved, matching how `environ` is walked
//! - **Bytes, not text**: values are passed through unmodified

pub mod container;
pub mod os;
pub mod types;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::ops::ControlFlow;

use container::Env;
use os::OsEnvironment;
use types::VarName;

/// Read access to a process-style environment table.
///
/// The shim never reaches for the process environment directly; it is
/// handed one of these, so an in-memory [`Env`] can stand in for the real
/// table.
pub trait EnvironmentTable {
    /// Looks up the value stored under `name`, exact match.
    fn lookup(&self, name: &VarName) -> Option<Cow<'_, [u8]>>;

    /// Walks every `KEY=VALUE` entry in table order until the visitor
    /// breaks.
    fn visit(&self, visitor: &mut dyn FnMut(&[u8], &[u8]) -> ControlFlow<()>);
}

impl<T: EnvironmentTable + ?Sized> EnvironmentTable for &T {
    fn lookup(&self, name: &VarName) -> Option<Cow<'_, [u8]>> {
        (**self).lookup(name)
    }

    fn visit(&self, visitor: &mut dyn FnMut(&[u8], &[u8]) -> ControlFlow<()>) {
        (**self).visit(visitor);
    }
}

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Env {
    Env::capture(&OsEnvironment)
}
