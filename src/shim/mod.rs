// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The four shim operations over injected capabilities.
//!
//! ```text
//! EnvironmentShim<E: EnvironmentTable, P: ProcessorInfo>
//!   get_variable(name)        -> Option<Cow<[u8]>>
//!   enumerate_variables(buf)  -> usize (<= buf.len())
//!   current_cpu_index()       -> i32  (-1 if unsupported)
//!   terminate(code)           -> !
//! ```
//!
//! [`EnvironmentShim::os`] wires in the real process; tests hand in an
//! [`Env`](crate::core::env::container::Env) and a fake processor.


use std::borrow::Cow;

use tracing::trace;

use crate::core::cpu::{OsProcessor, ProcessorInfo, to_abi_index};
use crate::core::env::EnvironmentTable;
use crate::core::env::os::OsEnvironment;
use crate::core::env::types::VarName;
use crate::core::{process, wire};

/// Environment, processor and process primitives for a managed runtime.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentShim<E, P = OsProcessor> {
    table: E,
    processor: P,
}

impl EnvironmentShim<OsEnvironment, OsProcessor> {
    /// Shim over the live process environment and processor.
    #[must_use]
    pub const fn os() -> Self {
        Self {
            table: OsEnvironment,
            processor: OsProcessor,
        }
    }
}

impl<E: EnvironmentTable, P: ProcessorInfo> EnvironmentShim<E, P> {
    #[must_use]
    pub const fn new(table: E, processor: P) -> Self {
        Self { table, processor }
    }

    #[must_use]
    pub const fn table(&self) -> &E {
        &self.table
    }

    /// Looks up `name`, exact match.
    ///
    /// There is no error channel: a name that cannot exist in the table
    /// (empty, or containing `=`, `;` or NUL) is reported as absent, same
    /// as a name that simply is not set.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        match VarName::new(name) {
            Ok(name) => self.table.lookup(&name),
            Err(e) => {
                trace!("lookup treated as absent: {e}");
                None
            }
        }
    }

    /// [`get_variable`](Self::get_variable), decoded lossily as UTF-8.
    #[must_use]
    pub fn get_variable_str(&self, name: &str) -> Option<String> {
        self.get_variable(name)
            .map(|value| String::from_utf8_lossy(&value).into_owned())
    }

    /// Serializes every entry as `KEY=VALUE;` into `buf`.
    ///
    /// Returns the number of bytes written, never more than `buf.len()`.
    /// When the block does not fit, the buffer is filled to the last byte
    /// and the final record is cut wherever the capacity ran out.
    pub fn enumerate_variables(&self, buf: &mut [u8]) -> usize {
        let written = wire::write_block(&self.table, buf);
        trace!(capacity = buf.len(), written, "enumerated environment");
        written
    }

    /// Logical CPU index of the calling thread, or `-1` if unsupported.
    #[must_use]
    pub fn current_cpu_index(&self) -> i32 {
        to_abi_index(self.processor.current_cpu())
    }

    /// Ends the process with `exit_code`.
    pub fn terminate(&self, exit_code: i32) -> ! {
        process::terminate(exit_code)
    }
}
