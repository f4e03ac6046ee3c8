// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `extern "C"` entry points called by the managed runtime.
//!
//! ```text
//! runtime P/Invoke
//!   CoreLibNative_GetEnv                         --> getenv(3)
//!   CoreLibNative_GetEnumerateEnvironmentVariables --> environ --> wire::write_entries
//!   CoreLibNative_SchedGetCpu                    --> cpu::current_cpu_index
//!   CoreLibNative_Exit                           --> process::terminate
//! ```
//!
//! Names and signatures are fixed by the runtime and must not change.
//! None of these functions lock the environment: callers serialize
//! mutations themselves.
//!
//! Enumeration copies every `environ` string as is, including entries
//! without a `=` that `std::env::vars_os` would skip. The safe
//! [`OsEnvironment`](crate::core::env::os::OsEnvironment) table goes
//! through `std::env` and only sees well-formed entries.

#![allow(non_snake_case)]


use std::ffi::{CStr, c_char};

use crate::core::{cpu, process, wire};

/// NULL-terminated array of `KEY=VALUE` strings.
type Environ = *const *const c_char;

#[cfg(not(target_vendor = "apple"))]
fn process_environ() -> Environ {
    unsafe extern "C" {
        static mut environ: Environ;
    }
    // SAFETY: reads the pointer value only; libc keeps it NULL or valid.
    unsafe { environ }
}

#[cfg(target_vendor = "apple")]
fn process_environ() -> Environ {
    // SAFETY: _NSGetEnviron returns the address of the process table slot.
    unsafe { (*libc::_NSGetEnviron()).cast_const().cast() }
}

/// Iterates the strings of `environ` in table order.
///
/// # Safety
///
/// `environ` must be NULL or a NULL-terminated array of NUL-terminated
/// strings, all of which stay valid and unmodified for `'a`.
unsafe fn environ_entries<'a>(mut environ: Environ) -> impl Iterator<Item = &'a [u8]> {
    std::iter::from_fn(move || {
        if environ.is_null() {
            return None;
        }
        // SAFETY: in bounds, the array is NULL-terminated.
        let entry = unsafe { *environ };
        if entry.is_null() {
            return None;
        }
        // SAFETY: not past the terminator yet.
        environ = unsafe { environ.add(1) };
        // SAFETY: NUL-terminated and valid for 'a per the caller contract.
        Some(unsafe { CStr::from_ptr(entry) }.to_bytes())
    })
}

/// Serializes the strings of `environ` into `buf`.
///
/// # Safety
///
/// Same contract as [`environ_entries`] for the duration of the call.
unsafe fn write_environ(environ: Environ, buf: &mut [u8]) -> usize {
    // SAFETY: forwarded from the caller.
    wire::write_entries(unsafe { environ_entries(environ) }, buf)
}

/// Returns the value of `variable`, or NULL if it is not set.
///
/// The pointer refers to the process environment itself. It must not be
/// freed and is invalidated by the next change to the environment.
///
/// # Safety
///
/// `variable` must be NULL or point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CoreLibNative_GetEnv(variable: *const c_char) -> *mut c_char {
    if variable.is_null() {
        return std::ptr::null_mut();
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    unsafe { libc::getenv(variable) }
}

/// Writes the environment into `buffer` as `KEY=VALUE;` records.
///
/// Returns the number of bytes written, at most `buffer_size`. A result
/// equal to `buffer_size` means the block may have been cut short.
/// A NULL buffer or a non-positive size writes nothing and returns 0.
///
/// # Safety
///
/// `buffer` must be NULL or valid for writes of `buffer_size` bytes, and
/// must not be read or written by anyone else during the call. The
/// environment must not be modified until the call returns.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn CoreLibNative_GetEnumerateEnvironmentVariables(
    buffer: *mut c_char,
    buffer_size: i32,
) -> i32 {
    let Ok(capacity) = usize::try_from(buffer_size) else {
        return 0;
    };
    if buffer.is_null() || capacity == 0 {
        return 0;
    }

    // SAFETY: non-null, valid for `capacity` bytes and exclusively ours for
    // the duration of the call per the caller contract.
    let buf = unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), capacity) };
    // SAFETY: nobody mutates the environment during the call per the caller
    // contract.
    let written = unsafe { write_environ(process_environ(), buf) };

    // written <= capacity <= i32::MAX
    i32::try_from(written).unwrap_or(buffer_size)
}

/// Logical CPU index of the calling thread, or -1 if unsupported.
#[unsafe(no_mangle)]
pub extern "C" fn CoreLibNative_SchedGetCpu() -> i32 {
    cpu::current_cpu_index()
}

/// Terminates the process with `exit_code`. Does not return.
#[unsafe(no_mangle)]
pub extern "C" fn CoreLibNative_Exit(exit_code: i32) -> ! {
    process::terminate(exit_code)
}
