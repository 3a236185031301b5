//! Cache adapter over a single backing table.
//!
//! `TableCache` turns cache keys and values into stored items and issues
//! exactly one point operation per call against its `ItemStore`.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use ddbcache_core::cache::{
    build_item, extract_data, key_item, Cache, CacheConfig, CacheKey, Result,
};
use ddbcache_core::storage::{CallOptions, ItemStore, WriteAck};
use ddbcache_core::value::Value;

#[cfg(feature = "dynamodb")]
use crate::config::ConnectionConfig;
#[cfg(feature = "dynamodb")]
use crate::storage::dynamodb::{create_client, DynamoDbStore};

/// Decides whether a value may be cached.
pub type CacheablePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Key-value cache backed by one table of an `ItemStore`.
#[derive(Clone)]
pub struct TableCache<S> {
    store: S,
    config: CacheConfig,
    cacheable: Option<CacheablePredicate>,
}

impl<S: ItemStore> TableCache<S> {
    /// Creates a cache over `store`. Fails if `config` is invalid.
    pub fn new(store: S, config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            cacheable: None,
        })
    }

    /// Replaces the default accept-everything cacheability check.
    pub fn with_cacheable_predicate(
        mut self,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.cacheable = Some(Arc::new(predicate));
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The backing store handle.
    pub fn client(&self) -> &S {
        &self.store
    }
}

impl<S: fmt::Debug> fmt::Debug for TableCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCache")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("cacheable", &self.cacheable.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

#[async_trait]
impl<S: ItemStore> Cache for TableCache<S> {
    async fn get(&self, key: &CacheKey, options: &CallOptions) -> Result<Option<Value>> {
        let key = key_item(key, &self.config)?;
        tracing::debug!(
            table = %self.config.table_name,
            operation = "get",
            key_attributes = ?key.keys().collect::<Vec<_>>(),
            "Cache request"
        );

        match self
            .store
            .get_item(&self.config.table_name, key, options)
            .await?
        {
            Some(item) => extract_data(item, &self.config).map(Some),
            None => {
                tracing::debug!(table = %self.config.table_name, "Cache miss");
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &CacheKey, value: Value, options: &CallOptions) -> Result<WriteAck> {
        let item = build_item(key, value, &self.config)?;
        tracing::debug!(
            table = %self.config.table_name,
            operation = "set",
            attributes = ?item.keys().collect::<Vec<_>>(),
            "Cache request"
        );

        self.store
            .put_item(&self.config.table_name, item, options)
            .await
    }

    async fn delete(&self, key: &CacheKey, options: &CallOptions) -> Result<WriteAck> {
        let key = key_item(key, &self.config)?;
        tracing::debug!(
            table = %self.config.table_name,
            operation = "delete",
            key_attributes = ?key.keys().collect::<Vec<_>>(),
            "Cache request"
        );

        self.store
            .delete_item(&self.config.table_name, key, options)
            .await
    }

    fn is_cacheable_value(&self, value: &Value) -> bool {
        self.cacheable
            .as_ref()
            .is_none_or(|predicate| predicate(value))
    }
}

/// A cache over DynamoDB.
#[cfg(feature = "dynamodb")]
pub type DynamoDbCache = TableCache<DynamoDbStore>;

#[cfg(feature = "dynamodb")]
impl TableCache<DynamoDbStore> {
    /// Connects to DynamoDB with the given naming and connection settings.
    ///
    /// The configuration is validated before any client is built.
    pub async fn connect(config: CacheConfig, connection: &ConnectionConfig) -> Result<Self> {
        config.validate()?;
        let client = create_client(connection).await;
        Ok(Self {
            store: DynamoDbStore::new(client),
            config,
            cacheable: None,
        })
    }
}
