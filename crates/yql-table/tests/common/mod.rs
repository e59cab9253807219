//! Common test utilities for the table client collaborators
//!
//! Provides mock implementations of `TableClient` and `Connection` that
//! count the calls they receive.

pub mod mocks;

pub use mocks::*;
