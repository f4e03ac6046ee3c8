// corelib-native: Native Environment Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment table with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Option<Arc<EnvData>>
//! clone shares Arc until the first write (Arc::make_mut)
//! ```

use super::EnvironmentTable;
use super::types::{EnvData, VarName};
use crate::error::ShimResult;
use std::borrow::Cow;
use std::ops::ControlFlow;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Entries keep insertion order, so enumeration over an `Env` behaves like
/// a walk over `environ`. Clones share data until one of them is modified.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    data: Option<Arc<EnvData>>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Creates an environment from `(name, value)` pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is not a valid [`VarName`].
    pub fn from_pairs<I, K, V>(pairs: I) -> ShimResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<[u8]>,
    {
        let mut env = Self::new();
        for (name, value) in pairs {
            env.set(name, value)?;
        }
        Ok(env)
    }

    /// Copies every entry of `table` whose key is a valid [`VarName`].
    ///
    /// Keys that are not UTF-8 or contain separators cannot be addressed by
    /// name and are skipped.
    #[must_use]
    pub fn capture(table: &impl EnvironmentTable) -> Self {
        let mut data = EnvData::default();
        table.visit(&mut |key, value| {
            match std::str::from_utf8(key).map(VarName::new) {
                // getenv(3) answers with the first match, so later duplicates lose
                Ok(Ok(name)) if data.position(name.as_bytes()).is_none() => {
                    data.insert(name, value.to_vec());
                }
                Ok(Ok(name)) => tracing::trace!(%name, "skipping duplicate entry"),
                Ok(Err(e)) => tracing::trace!("skipping entry: {e}"),
                Err(_) => tracing::trace!("skipping entry with non-UTF-8 name"),
            }
            ControlFlow::Continue(())
        });
        Self {
            data: Some(Arc::new(data)),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid [`VarName`].
    pub fn set(&mut self, name: impl Into<String>, value: impl AsRef<[u8]>) -> ShimResult<&mut Self> {
        let name = VarName::new(name)?;
        self.data_mut().insert(name, value.as_ref().to_vec());
        Ok(self)
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.data.as_ref().and_then(|d| d.get(name.as_bytes()))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if self.get(name).is_some() {
            self.data_mut().remove(name.as_bytes());
        }
        self
    }

    /// Returns an iterator over environment variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.data.iter().flat_map(|d| {
            d.entries()
                .iter()
                .map(|(k, v)| (k.as_bytes(), v.as_slice()))
        })
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.entries().len())
    }

    /// Ensures exclusive ownership of the data for modification.
    fn data_mut(&mut self) -> &mut EnvData {
        Arc::make_mut(self.data.get_or_insert_with(Arc::default))
    }
}

impl EnvironmentTable for Env {
    fn lookup(&self, name: &VarName) -> Option<Cow<'_, [u8]>> {
        self.get(name.as_str()).map(Cow::Borrowed)
    }

    fn visit(&self, visitor: &mut dyn FnMut(&[u8], &[u8]) -> ControlFlow<()>) {
        for (key, value) in self.iter() {
            if visitor(key, value).is_break() {
                break;
            }
        }
    }
}
