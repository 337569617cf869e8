//! Uniform API response envelopes.
//!
//! Build a response with chained calls, resolve error codes against a shared
//! [`ErrorRegistry`], and render the result with a pluggable [`Renderer`]:
//!
//! ```json
//! {"success":false,"status_code":500,"status_text":"Internal Server Error","error_details":null,"content":null}
//! ```
//!
//! # Example
//!
//! ```
//! use envelope::prelude::*;
//!
//! #[derive(Serialize)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! let registry = ErrorRegistry::from_map([(1, "Missing Auth"), (2, "Missing Parameter")]);
//!
//! let body = Response::new(&registry)
//!     .set_result(200, Greeting { message: "Hello World".to_string() })
//!     .output()?;
//! assert_eq!(
//!     body,
//!     r#"{"success":true,"status_code":200,"status_text":"OK","error_details":null,"content":{"message":"Hello World"}}"#
//! );
//!
//! let http_response = Response::new(&registry)
//!     .add_error_detail([2])?
//!     .set_result(400, ())
//!     .into_http_response()?;
//! assert_eq!(http_response.status(), StatusCode::BAD_REQUEST);
//! # Ok::<(), envelope::Error>(())
//! ```
//!
//! For services rendering many responses with the same settings, see
//! [`Responder`] and [`ResponderConfig`].

mod config;
mod http_sink;
pub mod prelude;
mod responder;

pub use config::{ConfiguredRenderer, OutputFormat, ResponderConfig, ResponderConfigBuilder};
pub use http_sink::{HttpSink, ResponseExt};
pub use responder::Responder;

// Re-export core types
pub use envelope_core::{
    ContentType, DEFAULT_STATUS_CODE, Envelope, Error, ErrorDetail, ErrorRegistry, JsonRenderer,
    OutputSink, ParsedEnvelope, PrettyJsonRenderer, Renderer, Response, Result, StatusCode,
    WriteHeader, WriterSink, decode, is_success, status_text,
};

// Re-export crates used in public signatures
pub use bytes;
pub use http;
