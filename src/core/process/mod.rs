// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process termination.
//!
//! ```text
//! terminate(code)
//!   --> std::process::exit
//!       --> exit(3): atexit handlers, C stdio flush
//!   (no unwinding, no Rust destructors)
//! ```

use tracing::debug;

/// Ends the process with `exit_code`. Never returns.
///
/// C-level cleanup registered with the OS runs; destructors on the Rust
/// stack, including logging guards, do not. Callers that need buffered
/// logs flushed must drop their guards first.
pub fn terminate(exit_code: i32) -> ! {
    debug!(exit_code, "terminating process");
    std::process::exit(exit_code)
}
