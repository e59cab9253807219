//! Table client configuration
//!
//! `TableOptions` is the user-facing, partially filled set of settings;
//! `table_config` overlays the fields that are set onto `TableConfig::default()`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::TableResult;

/// Effective session pool settings handed to a table client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Upper bound on open sessions
    pub size_limit: usize,
    /// Sessions kept alive even when idle
    pub keep_alive_min_size: usize,
    /// Idle time after which a session is probed
    pub idle_threshold: Duration,
    /// Idle time after which a session is closed
    pub keep_alive_timeout: Duration,
    pub create_session_timeout: Duration,
    pub delete_timeout: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            size_limit: 50,
            keep_alive_min_size: 10,
            idle_threshold: Duration::from_secs(5 * 60),
            keep_alive_timeout: Duration::from_secs(5 * 60),
            create_session_timeout: Duration::from_secs(5),
            delete_timeout: Duration::from_millis(500),
        }
    }
}

/// Optional overrides for [`TableConfig`].
///
/// Durations are written in milliseconds when (de)serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    pub session_pool_size_limit: Option<usize>,
    pub session_pool_keep_alive_min_size: Option<usize>,
    #[serde(rename = "session_pool_idle_threshold_ms", with = "millis")]
    pub session_pool_idle_threshold: Option<Duration>,
    #[serde(rename = "session_pool_keep_alive_timeout_ms", with = "millis")]
    pub session_pool_keep_alive_timeout: Option<Duration>,
    #[serde(rename = "session_pool_create_session_timeout_ms", with = "millis")]
    pub session_pool_create_session_timeout: Option<Duration>,
    #[serde(rename = "session_pool_delete_timeout_ms", with = "millis")]
    pub session_pool_delete_timeout: Option<Duration>,
}

impl TableOptions {
    /// Decode options from a JSON document
    pub fn from_json(text: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Build the effective configuration from options
pub fn table_config(options: &TableOptions) -> TableConfig {
    let mut config = TableConfig::default();
    if let Some(size_limit) = options.session_pool_size_limit {
        config.size_limit = size_limit;
    }
    if let Some(min_size) = options.session_pool_keep_alive_min_size {
        config.keep_alive_min_size = min_size;
    }
    if let Some(threshold) = options.session_pool_idle_threshold {
        config.idle_threshold = threshold;
    }
    if let Some(timeout) = options.session_pool_keep_alive_timeout {
        config.keep_alive_timeout = timeout;
    }
    if let Some(timeout) = options.session_pool_create_session_timeout {
        config.create_session_timeout = timeout;
    }
    if let Some(timeout) = options.session_pool_delete_timeout {
        config.delete_timeout = timeout;
    }
    config
}

mod millis {
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => {
                let millis = u64::try_from(duration.as_millis()).map_err(|_| {
                    S::Error::custom(format!("duration {:?} exceeds u64 milliseconds", duration))
                })?;
                serializer.serialize_some(&millis)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
