//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types
//! for easy glob importing:
//!
//! ```ignore
//! use envelope_core::prelude::*;
//! ```

pub use crate::{
    ErrorDetail, ErrorRegistry, JsonRenderer, OutputSink, PrettyJsonRenderer, Renderer, Response,
    Result,
};
