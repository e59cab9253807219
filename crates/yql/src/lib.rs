//! YQL value layer for Rust
//!
//! This crate bundles the pieces of a YQL client that deal with data:
//! - Type descriptors and their canonical YQL text
//! - Runtime values with typed accessors
//! - Lossless casts into native destinations
//! - Table client collaborators (configuration, lazy client, prepared statements)
//!
//! # Example
//!
//! ```
//! use yql::{Value, list_items, struct_fields};
//!
//! let row = Value::structure([("a", Value::int32(1)), ("b", Value::utf8("x"))]);
//! assert_eq!(row.yql(), "Struct<'a':Int32,'b':Utf8>");
//!
//! let fields = struct_fields(&row)?;
//! assert_eq!(fields["a"], Value::int32(1));
//!
//! let err = list_items(&row).unwrap_err();
//! assert!(err.is_capability_mismatch());
//! # Ok::<(), yql::ValueError>(())
//! ```

// Re-export all public APIs from internal crates
pub use yql_diagnostics as diagnostics;
pub use yql_table as table;
pub use yql_types as types;

// Convenience re-exports
pub use yql_diagnostics::{ErrorKind, Result, ValueError};
pub use yql_table::{TableConfig, TableError, TableOptions};
pub use yql_types::{
    Decimal, DecimalValue, FromValue, Type, Value, cast_to, dict_values, list_items,
    struct_fields, to_decimal, tuple_items,
};
