//! YQL value diagnostics and error handling
//!
//! This crate provides the error handling infrastructure for the value layer,
//! including error kinds, call-site capture, and context chains.

mod call_site;
mod error;
mod error_kind;

pub use call_site::*;
pub use error::*;
pub use error_kind::*;

/// Result type for value operations
pub type Result<T> = std::result::Result<T, ValueError>;
