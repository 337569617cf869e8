//! Error details reported in the envelope.

use serde::{Deserialize, Serialize};

use crate::registry::{ErrorRegistry, lookup};
use crate::Result;

/// A registered error code together with its display text.
///
/// The text always comes from an [`ErrorRegistry`], so a detail can only be
/// built for a code that was registered at that time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorDetail {
    code: i64,
    text: String,
}

impl ErrorDetail {
    /// Resolves `code` against the registry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnregisteredErrorCode`] if `code` is not registered.
    pub fn resolve(registry: &ErrorRegistry, code: i64) -> Result<Self> {
        let text = registry.resolve_error_text(code)?;
        Ok(Self { code, text })
    }

    /// Resolves every code against a single registry snapshot.
    ///
    /// Either all codes resolve, or none are returned.
    pub(crate) fn resolve_all(
        registry: &ErrorRegistry,
        codes: impl IntoIterator<Item = i64>,
    ) -> Result<Vec<Self>> {
        let snapshot = registry.snapshot();
        codes
            .into_iter()
            .map(|code| {
                lookup(&snapshot, code).map(|text| Self {
                    code,
                    text: text.to_owned(),
                })
            })
            .collect()
    }

    /// Error code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
