//! Rendering of run results.
//!
//! - [`console`]: the plain-text layout printed during an interactive session
//! - [`json`]: a machine-readable [`Report`](crate::models::Report)

pub mod console;
pub mod json;
