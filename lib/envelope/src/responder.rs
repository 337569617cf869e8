//! Response factory bound to a registry and a configuration.

use bytes::Bytes;
use envelope_core::{ErrorRegistry, Response, Result};
use serde::Serialize;
use tracing::{Level, debug, span};

use crate::config::{ConfiguredRenderer, ResponderConfig};
use crate::http_sink::ResponseExt;

/// Creates [`Response`]s sharing one [`ErrorRegistry`] and one
/// [`ResponderConfig`].
///
/// # Example
///
/// ```
/// use envelope::{ErrorRegistry, Responder, ResponderConfig};
///
/// let responder = Responder::new(ErrorRegistry::new(), ResponderConfig::default());
/// responder.registry().set_error_map([(1, "Missing Auth")]);
///
/// let response = responder.response().add_error_detail([1])?.set_result(401, ());
/// let http_response = responder.respond(response)?;
///
/// assert_eq!(http_response.status(), 401);
/// # Ok::<(), envelope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Responder {
    registry: ErrorRegistry,
    config: ResponderConfig,
}

impl Responder {
    /// Creates a responder.
    #[must_use]
    pub const fn new(registry: ErrorRegistry, config: ResponderConfig) -> Self {
        Self { registry, config }
    }

    /// Registry shared by every response of this responder.
    #[must_use]
    pub const fn registry(&self) -> &ErrorRegistry {
        &self.registry
    }

    /// Configuration.
    #[must_use]
    pub const fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Starts a new response using the configured renderer.
    #[must_use]
    pub fn response(&self) -> Response<(), ConfiguredRenderer> {
        debug!(format = ?self.config.format, "new response");
        Response::new(&self.registry).set_renderer(self.config.renderer())
    }

    /// Renders `response` into an [`http::Response`] with the configured
    /// format and content type.
    ///
    /// Whatever renderer `response` carries is replaced by the configured one.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the status code is rejected
    /// by the `http` crate.
    pub fn respond<C, R>(&self, response: Response<C, R>) -> Result<http::Response<Bytes>>
    where
        C: Serialize,
    {
        let span = span!(Level::DEBUG, "respond", status_code = response.status_code());
        let _entered = span.enter();

        response
            .set_renderer(self.config.renderer())
            .into_http_response()
    }
}
