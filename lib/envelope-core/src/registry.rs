//! Error code registry.
//!
//! [`ErrorRegistry`] maps numeric error codes to the text shown to clients.
//! The host installs the whole map once at startup with
//! [`ErrorRegistry::set_error_map`]; responses then resolve codes against it.
//!
//! # Example
//!
//! ```
//! use envelope_core::ErrorRegistry;
//!
//! let registry = ErrorRegistry::new();
//! registry.set_error_map([(1, "Missing Auth"), (2, "Missing Parameter")]);
//!
//! assert_eq!(registry.resolve_error_text(1).expect("registered"), "Missing Auth");
//! assert!(registry.resolve_error_text(3).is_err());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::{Error, Result};

type ErrorMap = HashMap<i64, String>;

/// Shared mapping from error code to display text.
///
/// Cloning is cheap: clones share the same underlying map, so replacing the
/// map through one handle is visible through all of them. Lookups work on an
/// immutable snapshot, so a concurrent [`set_error_map`](Self::set_error_map)
/// never exposes a partially built map.
#[derive(Debug, Clone, Default)]
pub struct ErrorRegistry {
    inner: Arc<RwLock<Arc<ErrorMap>>>,
}

impl ErrorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the given entries.
    #[must_use]
    pub fn from_map<S>(entries: impl IntoIterator<Item = (i64, S)>) -> Self
    where
        S: Into<String>,
    {
        let registry = Self::new();
        registry.set_error_map(entries);
        registry
    }

    /// Replaces the whole registry with the given entries.
    ///
    /// Earlier entries are discarded, not merged.
    pub fn set_error_map<S>(&self, entries: impl IntoIterator<Item = (i64, S)>)
    where
        S: Into<String>,
    {
        let map: ErrorMap = entries
            .into_iter()
            .map(|(code, text)| (code, text.into()))
            .collect();
        debug!(entries = map.len(), "error map replaced");

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(map);
    }

    /// Returns the text registered for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredErrorCode`] if `code` is not registered.
    pub fn resolve_error_text(&self, code: i64) -> Result<String> {
        lookup(&self.snapshot(), code).map(str::to_owned)
    }

    /// Returns `true` if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: i64) -> bool {
        self.snapshot().contains_key(&code)
    }

    pub(crate) fn snapshot(&self) -> Arc<ErrorMap> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }
}

impl<S: Into<String>> FromIterator<(i64, S)> for ErrorRegistry {
    fn from_iter<I: IntoIterator<Item = (i64, S)>>(iter: I) -> Self {
        Self::from_map(iter)
    }
}

pub(crate) fn lookup(map: &ErrorMap, code: i64) -> Result<&str> {
    map.get(&code).map(String::as_str).ok_or_else(|| {
        warn!(code, "error code not registered");
        Error::unregistered_error_code(code)
    })
}
