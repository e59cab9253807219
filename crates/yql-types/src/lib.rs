//! YQL value and type system
//!
//! This crate defines the in-process representation of data exchanged with
//! the engine:
//! - Type descriptors with canonical YQL rendering
//! - Runtime values (scalars, decimals, optionals, lists, tuples, structs, dicts)
//! - Typed accessors that fail with a descriptive error on shape mismatch
//! - Lossless casting into native Rust destinations

pub mod accessor;
pub mod cast;
pub mod decimal;
pub mod type_system;
pub mod value;

pub use accessor::*;
pub use cast::*;
pub use decimal::*;
pub use type_system::*;
pub use value::*;

pub use yql_diagnostics::{ErrorKind, Result, ValueError};
