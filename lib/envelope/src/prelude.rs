//! Prelude module for convenient imports.
//!
//! ```ignore
//! use envelope::prelude::*;
//! ```

pub use envelope_core::prelude::*;
pub use serde::Serialize;

pub use crate::{OutputFormat, Responder, ResponderConfig, ResponseExt, StatusCode};
