//! Mock implementations for testing

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use yql_table::{Connection, NamedValue, QueryMode, TableClient, TableError, TableResult};

/// Call counters shared between a mock client and the test
#[derive(Debug, Default)]
pub struct ClientCounters {
    pub constructed: AtomicUsize,
    pub sessions: AtomicUsize,
    pub closed: AtomicUsize,
}

impl ClientCounters {
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::SeqCst)
    }

    pub fn sessions(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Mock table client handing out numbered sessions
pub struct MockTableClient {
    id: usize,
    counters: Arc<ClientCounters>,
    fail_close: bool,
}

impl MockTableClient {
    pub fn new(counters: Arc<ClientCounters>) -> Self {
        let id = counters.constructed.fetch_add(1, Ordering::SeqCst);
        Self {
            id,
            counters,
            fail_close: false,
        }
    }

    /// A client whose `close` reports a failure
    pub fn failing_close(counters: Arc<ClientCounters>) -> Self {
        Self {
            fail_close: true,
            ..Self::new(counters)
        }
    }
}

#[async_trait]
impl TableClient for MockTableClient {
    type Session = (usize, usize);

    async fn create_session(&self) -> TableResult<Self::Session> {
        let session = self.counters.sessions.fetch_add(1, Ordering::SeqCst);
        Ok((self.id, session))
    }

    async fn close(&self) -> TableResult<()> {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(TableError::client("transport is gone"));
        }
        Ok(())
    }
}

/// A call received by [`MockConnection`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub kind: &'static str,
    pub query: String,
    pub args: Vec<NamedValue>,
}

/// Mock connection recording every forwarded call
pub struct MockConnection {
    closed: AtomicBool,
    default_mode: RwLock<QueryMode>,
    calls: RwLock<Vec<RecordedCall>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            closed: AtomicBool::new(false),
            default_mode: RwLock::new(QueryMode::Data),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn set_default_mode(&self, mode: QueryMode) {
        *self.default_mode.write() = mode;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().clone()
    }

    fn record(&self, kind: &'static str, query: &str, args: &[NamedValue]) -> usize {
        let mut calls = self.calls.write();
        calls.push(RecordedCall {
            kind,
            query: query.to_string(),
            args: args.to_vec(),
        });
        calls.len()
    }
}

impl Default for MockConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connection for MockConnection {
    type Rows = Vec<NamedValue>;
    type ExecResult = usize;

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn default_query_mode(&self) -> QueryMode {
        *self.default_mode.read()
    }

    async fn query(&self, query: &str, args: &[NamedValue]) -> TableResult<Self::Rows> {
        self.record("query", query, args);
        Ok(args.to_vec())
    }

    async fn exec(&self, query: &str, args: &[NamedValue]) -> TableResult<Self::ExecResult> {
        Ok(self.record("exec", query, args))
    }
}
