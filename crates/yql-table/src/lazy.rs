//! Lazily constructed table client
//!
//! The client is built from the configuration on first use and shared
//! afterwards. Closing releases it; a later use builds a fresh one.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::{TableConfig, TableResult};

/// Operations of a table service client
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Session handed out by the client
    type Session: Send;

    /// Open a new session
    async fn create_session(&self) -> TableResult<Self::Session>;

    /// Release all resources held by the client
    async fn close(&self) -> TableResult<()>;
}

/// Table client built on first access
pub struct LazyTable<C, F> {
    config: TableConfig,
    factory: F,
    client: Mutex<Option<Arc<C>>>,
}

impl<C, F> LazyTable<C, F>
where
    C: TableClient,
    F: Fn(&TableConfig) -> C,
{
    /// Create a lazy client; `factory` runs on first use
    pub fn new(config: TableConfig, factory: F) -> Self {
        Self {
            config,
            factory,
            client: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Whether a client is currently held
    pub fn is_initialized(&self) -> bool {
        self.client.lock().is_some()
    }

    /// The shared client, constructed if none is held
    pub fn client(&self) -> Arc<C> {
        let mut guard = self.client.lock();
        let client = guard.get_or_insert_with(|| {
            log::debug!(
                "constructing table client (size limit {})",
                self.config.size_limit
            );
            Arc::new((self.factory)(&self.config))
        });
        Arc::clone(client)
    }

    /// Open a session on the shared client
    pub async fn create_session(&self) -> TableResult<C::Session> {
        let client = self.client();
        client.create_session().await
    }

    /// Close the held client, if any.
    ///
    /// Closing an unused or already closed table succeeds.
    pub async fn close(&self) -> TableResult<()> {
        let taken = self.client.lock().take();
        match taken {
            Some(client) => {
                log::debug!("closing table client");
                client.close().await
            }
            None => Ok(()),
        }
    }
}

impl<C, F> std::fmt::Debug for LazyTable<C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyTable")
            .field("config", &self.config)
            .field("initialized", &self.client.lock().is_some())
            .finish()
    }
}
