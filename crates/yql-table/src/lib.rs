//! Table client collaborators for the YQL value layer
//!
//! These pieces sit around the value model without changing it:
//! - `TableOptions` → `TableConfig` assembly
//! - `LazyTable`, a client built on first use and closed at most once
//! - `Statement`, a prepared statement bound to a connection

pub mod config;
pub mod error;
pub mod lazy;
pub mod statement;

pub use config::{TableConfig, TableOptions, table_config};
pub use error::{TableError, TableResult};
pub use lazy::{LazyTable, TableClient};
pub use statement::{Connection, NamedValue, QueryMode, Statement};
