//! Decoding rendered envelopes.
//!
//! The client-side counterpart of rendering: turns a JSON envelope body back
//! into an owned [`ParsedEnvelope`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{ErrorDetail, Result};

/// Owned envelope decoded from a rendered body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParsedEnvelope<T> {
    /// `true` iff the status code was 2xx.
    pub success: bool,
    /// Numeric status code.
    pub status_code: u16,
    /// Status phrase.
    pub status_text: String,
    /// Error details, empty when the body carried `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub error_details: Vec<ErrorDetail>,
    /// Response payload.
    pub content: Option<T>,
}

impl<T> ParsedEnvelope<T> {
    /// Error codes in the order they were reported.
    #[must_use]
    pub fn error_codes(&self) -> Vec<i64> {
        self.error_details.iter().map(ErrorDetail::code).collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<ErrorDetail>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<ErrorDetail>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a rendered envelope.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] with the path of the offending field.
///
/// # Example
///
/// ```
/// use envelope_core::decode;
///
/// let body = br#"{"success":true,"status_code":200,"status_text":"OK","error_details":null,"content":7}"#;
/// let envelope = decode::<u32>(body).expect("decode");
///
/// assert!(envelope.success);
/// assert_eq!(envelope.content, Some(7));
/// assert!(envelope.error_details.is_empty());
/// ```
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<ParsedEnvelope<T>> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}
