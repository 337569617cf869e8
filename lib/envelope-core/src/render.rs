//! Rendering strategies.
//!
//! A [`Renderer`] turns the [`Envelope`] view of a finished response into
//! its textual body. [`JsonRenderer`] (compact) is the default;
//! [`PrettyJsonRenderer`] produces indented output with the same fields in
//! the same order.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;

use crate::{ErrorDetail, Result};

/// Content type announced for rendered bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    #[default]
    Json,
    /// JSON with an explicit charset (`application/json; charset=utf-8`).
    JsonUtf8,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::JsonUtf8 => "application/json; charset=utf-8",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serializable view of a finished response.
///
/// Field order is the wire order. Empty error details and missing content
/// both render as `null`.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, C> {
    /// `true` iff the status code is 2xx.
    pub success: bool,
    /// Numeric status code.
    pub status_code: u16,
    /// Status phrase.
    pub status_text: &'a str,
    /// Error details in insertion order, `None` when there are none.
    pub error_details: Option<&'a [ErrorDetail]>,
    /// Response payload.
    pub content: Option<&'a C>,
}

/// Strategy converting an [`Envelope`] into the response body.
///
/// `render` is generic over the content type, so the trait is not
/// dyn-compatible and a [`crate::Response`] carries its renderer as a type
/// parameter. To pick the layout at runtime, use one renderer type that
/// switches internally, such as `OutputFormat` or `ConfiguredRenderer` in the
/// `envelope` crate.
///
/// # Example
///
/// ```
/// use envelope_core::{Envelope, Renderer, Result};
/// use serde::Serialize;
///
/// /// Renders only the status line.
/// struct StatusLine;
///
/// impl Renderer for StatusLine {
///     fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String> {
///         Ok(format!("{} {}", envelope.status_code, envelope.status_text))
///     }
/// }
/// ```
pub trait Renderer {
    /// Render the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the envelope (usually its
    /// content) cannot be represented. No partial output is produced.
    fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String>;

    /// Content type of the rendered body.
    fn content_type(&self) -> ContentType {
        ContentType::Json
    }
}

impl<R: Renderer> Renderer for &R {
    fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String> {
        (**self).render(envelope)
    }

    fn content_type(&self) -> ContentType {
        (**self).content_type()
    }
}

/// Compact JSON renderer, the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String> {
        serde_json::to_string(envelope).map_err(Into::into)
    }
}

/// Indented JSON renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyJsonRenderer {
    indent: usize,
}

impl PrettyJsonRenderer {
    /// Default indentation width.
    pub const DEFAULT_INDENT: usize = 4;

    /// Create a pretty renderer indenting with `indent` spaces.
    #[must_use]
    pub const fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Indentation width in spaces.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for PrettyJsonRenderer {
    fn default() -> Self {
        Self::with_indent(Self::DEFAULT_INDENT)
    }
}

impl Renderer for PrettyJsonRenderer {
    fn render<C: Serialize>(&self, envelope: &Envelope<'_, C>) -> Result<String> {
        let indent = " ".repeat(self.indent);
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        envelope.serialize(&mut serializer)?;

        String::from_utf8(out).map_err(|err| serde_json::Error::custom(err).into())
    }
}
