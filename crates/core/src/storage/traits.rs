use async_trait::async_trait;

use crate::attribute::Item;
use crate::cache::Result;

use super::{CallOptions, WriteAck};

/// Point operations of the backing key-value table store.
///
/// Implementations report their own failures as
/// `CacheError::BackingStore`, keeping the original error as the source.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Reads the item addressed by `key`. A missing item is `Ok(None)`.
    async fn get_item(
        &self,
        table_name: &str,
        key: Item,
        options: &CallOptions,
    ) -> Result<Option<Item>>;

    /// Writes `item`, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: Item, options: &CallOptions)
        -> Result<WriteAck>;

    /// Deletes the item addressed by `key`. Deleting a missing item succeeds.
    async fn delete_item(
        &self,
        table_name: &str,
        key: Item,
        options: &CallOptions,
    ) -> Result<WriteAck>;
}
