//! Lazy table client tests
//!
//! Covers:
//! - Construction on first use only
//! - Session delegation
//! - Idempotent close and reconstruction after close

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Barrier};
use std::thread;
use yql_table::{LazyTable, TableConfig, TableError, TableOptions, table_config};

fn lazy_table(
    counters: &Arc<ClientCounters>,
) -> LazyTable<MockTableClient, impl Fn(&TableConfig) -> MockTableClient + use<>> {
    let counters = Arc::clone(counters);
    LazyTable::new(TableConfig::default(), move |_| {
        MockTableClient::new(Arc::clone(&counters))
    })
}

#[test]
fn test_not_constructed_until_used() {
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);

    assert!(!table.is_initialized());
    assert_eq!(counters.constructed(), 0);
}

#[tokio::test]
async fn test_constructed_once_across_sessions() {
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);

    let first = table.create_session().await.unwrap();
    let second = table.create_session().await.unwrap();

    assert_eq!(counters.constructed(), 1);
    assert_eq!(counters.sessions(), 2);
    assert_eq!(first.0, second.0);
    assert!(table.is_initialized());
}

#[test]
fn test_client_is_shared() {
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);

    let a = table.client();
    let b = table.client();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_concurrent_first_access_constructs_once() {
    const THREADS: usize = 16;
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);
    let barrier = Barrier::new(THREADS);

    let clients: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    table.client()
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(counters.constructed(), 1);
    assert_eq!(clients.len(), THREADS);
    assert!(clients.iter().all(|client| Arc::ptr_eq(client, &clients[0])));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sessions_share_one_client() {
    let counters = Arc::new(ClientCounters::default());
    let table = Arc::new(lazy_table(&counters));

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            tokio::spawn(async move { table.create_session().await })
        })
        .collect();
    let mut client_ids = Vec::new();
    for task in tasks {
        let (client_id, _) = task.await.unwrap().unwrap();
        client_ids.push(client_id);
    }

    assert_eq!(counters.constructed(), 1);
    assert_eq!(counters.sessions(), 8);
    assert!(client_ids.iter().all(|id| *id == client_ids[0]));
}

#[tokio::test]
async fn test_close_before_use() {
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);

    table.close().await.unwrap();
    assert_eq!(counters.closed(), 0);
    assert_eq!(counters.constructed(), 0);
}

#[tokio::test]
async fn test_close_is_idempotent() {
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);
    table.create_session().await.unwrap();

    table.close().await.unwrap();
    table.close().await.unwrap();

    assert_eq!(counters.closed(), 1);
    assert!(!table.is_initialized());
}

#[tokio::test]
async fn test_use_after_close_builds_new_client() {
    let counters = Arc::new(ClientCounters::default());
    let table = lazy_table(&counters);

    let (before, _) = table.create_session().await.unwrap();
    table.close().await.unwrap();
    let (after, _) = table.create_session().await.unwrap();

    assert_eq!(counters.constructed(), 2);
    assert_ne!(before, after);
}

#[tokio::test]
async fn test_close_failure_still_releases_client() {
    let counters = Arc::new(ClientCounters::default());
    let factory_counters = Arc::clone(&counters);
    let table = LazyTable::new(TableConfig::default(), move |_| {
        MockTableClient::failing_close(Arc::clone(&factory_counters))
    });
    table.client();

    let err = table.close().await.unwrap_err();
    assert!(matches!(err, TableError::Client { .. }));
    assert!(!table.is_initialized());
    table.close().await.unwrap();
}

#[test]
fn test_factory_receives_config() {
    let options = TableOptions::from_json(r#"{"session_pool_size_limit": 7}"#).unwrap();
    let counters = Arc::new(ClientCounters::default());
    let factory_counters = Arc::clone(&counters);
    let seen = Arc::new(parking_lot::Mutex::new(None));
    let seen_in_factory = Arc::clone(&seen);

    let table = LazyTable::new(table_config(&options), move |config: &TableConfig| {
        *seen_in_factory.lock() = Some(config.size_limit);
        MockTableClient::new(Arc::clone(&factory_counters))
    });
    assert_eq!(table.config().size_limit, 7);

    table.client();
    assert_eq!(*seen.lock(), Some(7));
}
