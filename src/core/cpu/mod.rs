// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Processor queries.
//!
//! ```text
//! ProcessorInfo (capability)
//!    current_cpu() -> Option<u32>
//!         |
//!    OsProcessor
//!    Linux/Android: sched_getcpu(3)
//!    elsewhere:     None  (=> -1 at the ABI)
//! ```


/// Returned by the ABI when the current CPU cannot be queried.
pub const UNSUPPORTED_CPU_INDEX: i32 = -1;

/// Source of processor information for the calling thread.
pub trait ProcessorInfo {
    /// Logical CPU the calling thread is running on right now, if known.
    ///
    /// The answer may be stale as soon as it is returned.
    fn current_cpu(&self) -> Option<u32>;
}

/// The processor information the operating system reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcessor;

impl ProcessorInfo for OsProcessor {
    fn current_cpu(&self) -> Option<u32> {
        os_current_cpu()
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn os_current_cpu() -> Option<u32> {
    // SAFETY: sched_getcpu takes no arguments and touches no caller memory.
    let cpu = unsafe { libc::sched_getcpu() };
    u32::try_from(cpu).ok()
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
const fn os_current_cpu() -> Option<u32> {
    None
}

/// Maps a processor answer onto the ABI's sentinel convention.
#[must_use]
pub fn to_abi_index(cpu: Option<u32>) -> i32 {
    cpu.and_then(|c| i32::try_from(c).ok())
        .unwrap_or(UNSUPPORTED_CPU_INDEX)
}

/// Logical CPU index of the calling thread, or `-1` if unsupported.
#[must_use]
pub fn current_cpu_index() -> i32 {
    to_abi_index(OsProcessor.current_cpu())
}

/// Number of logical CPUs configured in the system.
///
/// This is the bound on valid CPU indices, independent of the affinity mask
/// of the calling thread.
#[must_use]
pub fn logical_cpu_count() -> usize {
    #[cfg(unix)]
    {
        // SAFETY: sysconf only reads system configuration.
        let configured = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_CONF) };
        if let Ok(n) = usize::try_from(configured)
            && n > 0
        {
            return n;
        }
    }

    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}
