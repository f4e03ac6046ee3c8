// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Enumeration wire format.
//!
//! ```text
//! KEY=VALUE;KEY=VALUE;KEY=VAL
//! '--------''--------''-----'
//!  record    record    truncated at capacity
//! ```
//!
//! No framing, no length prefix, no escaping. A key or value containing
//! `;` or `=` cannot be told apart from a separator on the way back.
//!
//! # Truncation
//!
//! The writer copies as much of each record as fits and stops at the first
//! byte that would cross the capacity. Partial records are kept, never
//! rolled back, so a truncated block always fills its buffer exactly.

#[cfg(test)]
mod tests;

use std::ops::ControlFlow;

use tracing::debug;

use crate::core::env::EnvironmentTable;
use crate::error::{ShimError, ShimResult};

/// Terminates every record.
pub const RECORD_SEPARATOR: u8 = b';';

/// Joins a key to its value inside a record.
pub const KEY_VALUE_SEPARATOR: u8 = b'=';

/// First buffer size tried by [`enumerate_to_vec`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Largest buffer [`enumerate_to_vec`] will grow to.
pub const DEFAULT_MAX_CAPACITY: usize = 16 * 1024 * 1024;

/// Writes into a fixed slice, refusing to cross its end.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> BoundedWriter<'a> {
    const fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, written: 0 }
    }

    /// Copies the prefix of `bytes` that fits; breaks if anything was cut.
    fn write(&mut self, bytes: &[u8]) -> ControlFlow<()> {
        let n = bytes.len().min(self.buf.len() - self.written);
        self.buf[self.written..self.written + n].copy_from_slice(&bytes[..n]);
        self.written += n;

        if n < bytes.len() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Serializes `table` into `buf` and returns the number of bytes written.
///
/// The result never exceeds `buf.len()`. An empty buffer yields 0.
pub fn write_block(table: &impl EnvironmentTable, buf: &mut [u8]) -> usize {
    let mut writer = BoundedWriter::new(buf);

    table.visit(&mut |key: &[u8], value: &[u8]| -> ControlFlow<()> {
        writer.write(key)?;
        writer.write(&[KEY_VALUE_SEPARATOR])?;
        writer.write(value)?;
        writer.write(&[RECORD_SEPARATOR])
    });

    writer.written
}

/// Writes pre-joined `KEY=VALUE` entries into `buf`, each followed by the
/// record separator, and returns the number of bytes written.
///
/// Entries are copied byte for byte, whether or not they contain a `=`.
/// Truncation follows [`write_block`].
pub fn write_entries<'e>(entries: impl IntoIterator<Item = &'e [u8]>, buf: &mut [u8]) -> usize {
    let mut writer = BoundedWriter::new(buf);
    let mut record = |entry: &[u8]| -> ControlFlow<()> {
        writer.write(entry)?;
        writer.write(&[RECORD_SEPARATOR])
    };

    for entry in entries {
        if record(entry).is_break() {
            break;
        }
    }

    writer.written
}

/// Length of the complete serialization of `table`.
#[must_use]
pub fn serialized_len(table: &impl EnvironmentTable) -> usize {
    let mut total = 0;
    table.visit(&mut |key, value| {
        total += key.len() + value.len() + 2;
        ControlFlow::Continue(())
    });
    total
}

/// Buffer bounds for [`enumerate_to_vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationLimits {
    pub initial_capacity: usize,
    pub max_capacity: usize,
}

impl Default for EnumerationLimits {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Enumerates `table` into a buffer that grows until the block fits.
///
/// Starts at `limits.initial_capacity` and doubles whenever the writer
/// fills the whole buffer, which is how a caller tells truncation apart
/// from success without a second channel.
///
/// # Errors
///
/// Returns [`ShimError::BufferLimitExceeded`] if the block is longer than
/// `limits.max_capacity`.
pub fn enumerate_to_vec(
    table: &impl EnvironmentTable,
    limits: EnumerationLimits,
) -> ShimResult<Vec<u8>> {
    let max = limits.max_capacity.max(1);
    let mut capacity = limits.initial_capacity.clamp(1, max);

    loop {
        let mut buf = vec![0; capacity];
        let written = write_block(table, &mut buf);

        if written < capacity {
            buf.truncate(written);
            return Ok(buf);
        }

        if capacity >= max {
            // a full buffer at the ceiling may still be an exact fit
            if serialized_len(table) == written {
                return Ok(buf);
            }
            return Err(ShimError::BufferLimitExceeded { limit: max });
        }

        let next = capacity.saturating_mul(2).min(max);
        debug!(capacity, next, "environment block filled the buffer, growing");
        capacity = next;
    }
}

/// One `KEY=VALUE` record borrowed from a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> Record<'a> {
    /// Splits on the first `=`; a record without one has an empty value.
    #[must_use]
    pub fn parse(raw: &'a [u8]) -> Self {
        match raw.iter().position(|&b| b == KEY_VALUE_SEPARATOR) {
            Some(i) => Self {
                key: &raw[..i],
                value: &raw[i + 1..],
            },
            None => Self {
                key: raw,
                value: &[],
            },
        }
    }

    /// Lossy UTF-8 rendering as `(key, value)`.
    #[must_use]
    pub fn to_lossy_pair(&self) -> (String, String) {
        (
            String::from_utf8_lossy(self.key).into_owned(),
            String::from_utf8_lossy(self.value).into_owned(),
        )
    }
}

/// A block split back into records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock<'a> {
    /// Records that ended with a separator.
    pub records: Vec<Record<'a>>,
    /// Bytes after the last separator, if any. Present only when the block
    /// was truncated mid-record.
    pub incomplete_tail: Option<&'a [u8]>,
}

impl ParsedBlock<'_> {
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.incomplete_tail.is_some()
    }
}

/// Splits a block on `;` and each record on its first `=`.
///
/// Empty records are skipped. Keys and values are returned untrimmed.
#[must_use]
pub fn parse_block(block: &[u8]) -> ParsedBlock<'_> {
    let (complete, tail) = match block.iter().rposition(|&b| b == RECORD_SEPARATOR) {
        Some(i) => (&block[..i], &block[i + 1..]),
        None => (&block[..0], block),
    };

    let records = complete
        .split(|&b| b == RECORD_SEPARATOR)
        .filter(|raw| !raw.is_empty())
        .map(Record::parse)
        .collect();

    ParsedBlock {
        records,
        incomplete_tail: (!tail.is_empty()).then_some(tail),
    }
}
