//! Core types for uniform API response envelopes.
//!
//! This crate provides the foundational types used by envelope:
//! - [`ErrorRegistry`] - Shared mapping from error code to display text
//! - [`ErrorDetail`] - A resolved error code reported to clients
//! - [`Response`] - Envelope builder with chained mutators
//! - [`Renderer`] - Rendering strategy, with [`JsonRenderer`] and [`PrettyJsonRenderer`]
//! - [`OutputSink`] and [`WriteHeader`] - Destinations for rendered responses
//! - [`Error`] and [`Result`] - Error handling
//! - [`decode`] - Client-side decoding of rendered envelopes
//!
//! # Example
//!
//! ```
//! use envelope_core::{ErrorRegistry, Response};
//!
//! let registry = ErrorRegistry::from_map([(1, "Missing Auth")]);
//! let body = Response::new(&registry).add_error_detail([1])?.output()?;
//!
//! assert_eq!(
//!     body,
//!     r#"{"success":false,"status_code":500,"status_text":"Internal Server Error","error_details":[{"code":1,"text":"Missing Auth"}],"content":null}"#
//! );
//! # Ok::<(), envelope_core::Error>(())
//! ```

mod decode;
mod detail;
mod error;
pub mod prelude;
mod registry;
mod render;
mod response;
mod sink;

pub use decode::{ParsedEnvelope, decode};
pub use detail::ErrorDetail;
pub use error::{Error, Result};
pub use registry::ErrorRegistry;
pub use render::{ContentType, Envelope, JsonRenderer, PrettyJsonRenderer, Renderer};
pub use response::{DEFAULT_STATUS_CODE, Response, is_success, status_text};
pub use sink::{OutputSink, WriteHeader, WriterSink};

// Re-export http crate status codes
pub use http::StatusCode;
