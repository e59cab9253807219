//! Prepared statement adapter
//!
//! A `Statement` keeps the query text and its declared parameters and
//! forwards execution to the owning connection. Only data queries can run
//! through a prepared statement.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use yql_types::{Type, Value};

use crate::{TableError, TableResult};

/// How a query is executed by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    #[default]
    Data,
    Scan,
    Explain,
    Scripting,
    Scheme,
}

impl QueryMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Scan => "scan",
            Self::Explain => "explain",
            Self::Scripting => "scripting",
            Self::Scheme => "scheme",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Query argument bound by name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedValue {
    pub name: String,
    pub value: Value,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Connection a statement executes on
#[async_trait]
pub trait Connection: Send + Sync {
    type Rows: Send;
    type ExecResult: Send;

    fn is_closed(&self) -> bool;

    /// Mode used when a call does not pick one
    fn default_query_mode(&self) -> QueryMode;

    async fn query(&self, query: &str, args: &[NamedValue]) -> TableResult<Self::Rows>;

    async fn exec(&self, query: &str, args: &[NamedValue]) -> TableResult<Self::ExecResult>;
}

/// Prepared statement bound to a connection
pub struct Statement<C> {
    conn: Arc<C>,
    query: String,
    params: IndexMap<String, Type>,
}

impl<C: Connection> Statement<C> {
    pub fn new(conn: Arc<C>, query: impl Into<String>, params: IndexMap<String, Type>) -> Self {
        Self {
            conn,
            query: query.into(),
            params,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query
    }

    /// Declared parameter types, in declaration order
    pub fn params(&self) -> &IndexMap<String, Type> {
        &self.params
    }

    /// Number of declared parameters
    pub fn num_input(&self) -> usize {
        self.params.len()
    }

    /// Run the statement and return its rows
    pub async fn query(&self, mode: Option<QueryMode>, args: &[NamedValue]) -> TableResult<C::Rows> {
        self.check(mode)?;
        self.conn.query(&self.query, args).await
    }

    /// Run the statement for its side effects
    pub async fn exec(
        &self,
        mode: Option<QueryMode>,
        args: &[NamedValue],
    ) -> TableResult<C::ExecResult> {
        self.check(mode)?;
        self.conn.exec(&self.query, args).await
    }

    /// Nothing is held beyond the connection, which outlives the statement
    pub fn close(&self) -> TableResult<()> {
        Ok(())
    }

    fn check(&self, mode: Option<QueryMode>) -> TableResult<()> {
        if self.conn.is_closed() {
            log::debug!("statement rejected: connection closed");
            return Err(TableError::ClosedConnection);
        }
        let mode = mode.unwrap_or_else(|| self.conn.default_query_mode());
        if mode != QueryMode::Data {
            log::debug!("statement rejected: query mode '{}'", mode);
            return Err(TableError::UnsupportedQueryMode { mode });
        }
        Ok(())
    }
}

impl<C> fmt::Debug for Statement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("query", &self.query)
            .field("params", &self.params)
            .finish()
    }
}
