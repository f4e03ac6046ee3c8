// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Safe building blocks behind the shim.
//!
//! ```text
//!                core
//!                 |
//!     +-------+---+----+---------+
//!     v       v        v         v
//!    env     wire     cpu     process
//!     |       |        |         |
//!   Env     block    sched_   terminate
//!   OsEnv   parse    getcpu
//! ```

pub mod cpu;
pub mod env;
pub mod process;
pub mod wire;
