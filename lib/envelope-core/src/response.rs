//! Response envelope builder.
//!
//! [`Response`] collects the outcome of a request (status, error details,
//! content) through chained calls, then renders it with [`Response::output`]
//! or [`Response::write_to`].
//!
//! # Example
//!
//! ```
//! use envelope_core::{ErrorRegistry, Response};
//!
//! let registry = ErrorRegistry::from_map([(1, "Missing Auth")]);
//!
//! let body = Response::new(&registry)
//!     .add_error_detail([1])?
//!     .set_result(401, ())
//!     .output()?;
//!
//! assert_eq!(
//!     body,
//!     r#"{"success":false,"status_code":401,"status_text":"Unauthorized","error_details":[{"code":1,"text":"Missing Auth"}],"content":null}"#
//! );
//! # Ok::<(), envelope_core::Error>(())
//! ```

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::{Envelope, ErrorDetail, ErrorRegistry, JsonRenderer, OutputSink, Renderer, Result};

/// Status code of a response nobody set a result on.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Standard reason phrase for a status code, empty when there is none.
#[must_use]
pub fn status_text(status_code: u16) -> &'static str {
    http::StatusCode::from_u16(status_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}

/// Status is 2xx.
#[must_use]
pub const fn is_success(status_code: u16) -> bool {
    status_code >= 200 && status_code < 300
}

/// API response envelope under construction.
///
/// `C` is the content type, `R` the [`Renderer`]. Both change through
/// [`set_result`](Self::set_result) and [`set_renderer`](Self::set_renderer).
#[derive(Debug, Clone)]
pub struct Response<C = (), R = JsonRenderer> {
    registry: ErrorRegistry,
    success: bool,
    status_code: u16,
    status_text: Option<String>,
    explicit_status_text: bool,
    error_details: Vec<ErrorDetail>,
    content: Option<C>,
    renderer: R,
}

impl Response {
    /// Creates a response with status 500, no error details, no content and
    /// the compact JSON renderer.
    #[must_use]
    pub fn new(registry: &ErrorRegistry) -> Self {
        Self {
            registry: registry.clone(),
            success: false,
            status_code: DEFAULT_STATUS_CODE,
            status_text: None,
            explicit_status_text: false,
            error_details: Vec::new(),
            content: None,
            renderer: JsonRenderer,
        }
    }
}

impl<C, R> Response<C, R> {
    /// Replaces the renderer.
    #[must_use]
    pub fn set_renderer<R2: Renderer>(self, renderer: R2) -> Response<C, R2> {
        Response {
            registry: self.registry,
            success: self.success,
            status_code: self.status_code,
            status_text: self.status_text,
            explicit_status_text: self.explicit_status_text,
            error_details: self.error_details,
            content: self.content,
            renderer,
        }
    }

    /// Appends the details for one or more error codes, in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnregisteredErrorCode`] for the first code
    /// missing from the registry. In that case nothing is appended.
    pub fn add_error_detail(mut self, codes: impl IntoIterator<Item = i64>) -> Result<Self> {
        let details = ErrorDetail::resolve_all(&self.registry, codes)?;
        self.error_details.extend(details);
        Ok(self)
    }

    /// Sets the status code and content.
    ///
    /// The status text is derived from the code when rendering, unless one
    /// was set explicitly.
    ///
    /// Status codes are `u16`: negative codes cannot be represented. Any
    /// value in `0..=u16::MAX` is accepted and classified; codes without a
    /// standard phrase render an empty status text.
    #[must_use]
    pub fn set_result<T>(self, status_code: u16, content: T) -> Response<T, R> {
        Response {
            registry: self.registry,
            success: self.success,
            status_code,
            status_text: self.status_text,
            explicit_status_text: self.explicit_status_text,
            error_details: self.error_details,
            content: Some(content),
            renderer: self.renderer,
        }
    }

    /// Sets the status code, an explicit status text and the content.
    ///
    /// The text is kept verbatim whatever the code. As with
    /// [`set_result`](Self::set_result), the code is a `u16`.
    #[must_use]
    pub fn set_result_with_status_text<T>(
        self,
        status_code: u16,
        status_text: impl Into<String>,
        content: T,
    ) -> Response<T, R> {
        let mut response = self.set_result(status_code, content);
        response.status_text = Some(status_text.into());
        response.explicit_status_text = true;
        response
    }

    /// Whether the response is a success.
    ///
    /// Only meaningful once the response has been rendered.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Status text, explicit or derived by the last render.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    /// Error details in insertion order.
    #[must_use]
    pub fn error_details(&self) -> &[ErrorDetail] {
        &self.error_details
    }

    /// Response content.
    #[must_use]
    pub const fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Renderer used by [`output`](Self::output).
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Registry error codes are resolved against.
    #[must_use]
    pub const fn registry(&self) -> &ErrorRegistry {
        &self.registry
    }

    fn envelope(&self) -> Envelope<'_, C> {
        Envelope {
            success: self.success,
            status_code: self.status_code,
            status_text: self.status_text.as_deref().unwrap_or_default(),
            error_details: (!self.error_details.is_empty())
                .then_some(self.error_details.as_slice()),
            content: self.content.as_ref(),
        }
    }
}

impl<C: Serialize, R: Renderer> Response<C, R> {
    /// Finalizes and renders the response.
    ///
    /// Sets `success` from the status code, derives the status text unless
    /// one was set explicitly, then delegates to the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the content cannot be rendered.
    pub fn output(&mut self) -> Result<String> {
        self.success = is_success(self.status_code);
        if !self.explicit_status_text {
            self.status_text = Some(status_text(self.status_code).to_owned());
        }

        let body = self.renderer.render(&self.envelope())?;
        debug!(
            status_code = self.status_code,
            success = self.success,
            error_details = self.error_details.len(),
            "response rendered"
        );
        Ok(body)
    }

    /// Renders the response and writes it to `sink`.
    ///
    /// The status code goes to the sink's header capability first, if it has
    /// one, then the body. Nothing is written when rendering fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if rendering fails, or
    /// [`crate::Error::Sink`] if writing the body fails.
    pub fn write_to<S: OutputSink>(&mut self, mut sink: S) -> Result<String> {
        let body = self.output()?;

        if let Some(header) = sink.header_writer() {
            debug!(status_code = self.status_code, "writing status header");
            header.write_header(self.status_code);
        }
        sink.write_all(body.as_bytes())?;
        sink.flush()?;

        Ok(body)
    }
}
