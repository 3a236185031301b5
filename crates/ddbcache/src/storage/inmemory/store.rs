//! In-memory item store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ddbcache_core::attribute::{canonical_number, Item, TypedAttribute};
use ddbcache_core::cache::{CacheError, Result};
use ddbcache_core::storage::{CallOptions, ItemStore, ReturnValues, WriteAck};

use super::error::InMemoryStoreError;

#[derive(Debug)]
struct Table {
    key_schema: Vec<String>,
    items: HashMap<String, Item>,
}

impl Table {
    fn new(key_schema: Vec<String>) -> Self {
        Self {
            key_schema,
            items: HashMap::new(),
        }
    }

    /// Identity of a key, for lookups. The key must name exactly the
    /// schema attributes.
    fn lookup_key(
        &self,
        table_name: &str,
        key: &Item,
    ) -> std::result::Result<String, InMemoryStoreError> {
        if key.len() != self.key_schema.len() {
            return Err(InMemoryStoreError::KeySchemaMismatch {
                table: table_name.to_string(),
            });
        }

        let mut parts = Vec::with_capacity(self.key_schema.len());
        for attribute in &self.key_schema {
            let value = key
                .get(attribute)
                .ok_or_else(|| InMemoryStoreError::KeySchemaMismatch {
                    table: table_name.to_string(),
                })?;
            parts.push(key_part(attribute, value)?);
        }
        Ok(parts.join("|"))
    }

    /// Identity of a full item. Extra attributes are allowed.
    fn item_key(&self, item: &Item) -> std::result::Result<String, InMemoryStoreError> {
        let mut parts = Vec::with_capacity(self.key_schema.len());
        for attribute in &self.key_schema {
            let value = item
                .get(attribute)
                .ok_or_else(|| InMemoryStoreError::MissingKeyAttribute {
                    attribute: attribute.clone(),
                })?;
            parts.push(key_part(attribute, value)?);
        }
        Ok(parts.join("|"))
    }
}

fn key_part(
    attribute: &str,
    value: &TypedAttribute,
) -> std::result::Result<String, InMemoryStoreError> {
    match value {
        TypedAttribute::Number(n) => {
            let n = number(attribute, n)?;
            Ok(format!("{attribute}=N:{n}"))
        }
        TypedAttribute::String(_) | TypedAttribute::Binary(_) => {
            Ok(format!("{attribute}={value:?}"))
        }
        other => Err(InMemoryStoreError::InvalidKeyType {
            attribute: attribute.to_string(),
            tag: other.tag(),
        }),
    }
}

fn number(attribute: &str, n: &str) -> std::result::Result<String, InMemoryStoreError> {
    canonical_number(n).ok_or_else(|| InMemoryStoreError::InvalidNumber {
        attribute: attribute.to_string(),
        value: n.to_string(),
    })
}

/// Rewrites every number to its canonical text, the way DynamoDB stores it.
fn canonicalize(
    attribute: &str,
    value: TypedAttribute,
) -> std::result::Result<TypedAttribute, InMemoryStoreError> {
    Ok(match value {
        TypedAttribute::Number(n) => TypedAttribute::Number(number(attribute, &n)?),
        TypedAttribute::NumberSet(members) => TypedAttribute::NumberSet(
            members
                .iter()
                .map(|n| number(attribute, n))
                .collect::<std::result::Result<_, _>>()?,
        ),
        TypedAttribute::Map(map) => TypedAttribute::Map(canonicalize_item(map)?),
        TypedAttribute::List(items) => TypedAttribute::List(
            items
                .into_iter()
                .map(|item| canonicalize(attribute, item))
                .collect::<std::result::Result<_, _>>()?,
        ),
        other => other,
    })
}

fn canonicalize_item(item: Item) -> std::result::Result<Item, InMemoryStoreError> {
    item.into_iter()
        .map(|(name, value)| {
            let value = canonicalize(&name, value)?;
            Ok((name, value))
        })
        .collect()
}

/// In-memory item store for testing.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
/// Numbers are compared and stored in canonical form, as DynamoDB does.
/// Condition expressions are accepted but not evaluated.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new store without tables.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a new store with the given tables and their key attributes.
    pub fn with_tables<I, T, K>(tables: I) -> Self
    where
        I: IntoIterator<Item = (T, Vec<K>)>,
        T: Into<String>,
        K: Into<String>,
    {
        let tables = tables
            .into_iter()
            .map(|(name, schema)| {
                (
                    name.into(),
                    Table::new(schema.into_iter().map(Into::into).collect()),
                )
            })
            .collect();

        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Creates (or replaces) a table with the given key attributes.
    pub async fn create_table(&self, name: impl Into<String>, key_schema: Vec<String>) {
        let mut tables = self.tables.write().await;
        tables.insert(name.into(), Table::new(key_schema));
    }

    /// Number of items in a table, or `None` if the table does not exist.
    pub async fn item_count(&self, table_name: &str) -> Option<usize> {
        let tables = self.tables.read().await;
        tables.get(table_name).map(|table| table.items.len())
    }

    /// The stored item for `key`, bypassing the cache layer.
    pub async fn raw_item(&self, table_name: &str, key: &Item) -> Option<Item> {
        let tables = self.tables.read().await;
        let table = tables.get(table_name)?;
        let id = table.lookup_key(table_name, key).ok()?;
        table.items.get(&id).cloned()
    }
}

fn table_not_found(operation: &'static str, table_name: &str) -> CacheError {
    CacheError::backing_store(
        operation,
        InMemoryStoreError::TableNotFound(table_name.to_string()),
    )
}

fn log_ignored_condition(operation: &'static str, options: &CallOptions) {
    if let Some(condition) = &options.condition_expression {
        tracing::debug!(operation, condition, "Condition expression not evaluated in memory");
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn get_item(
        &self,
        table_name: &str,
        key: Item,
        _options: &CallOptions,
    ) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        let table = tables
            .get(table_name)
            .ok_or_else(|| table_not_found("GetItem", table_name))?;

        let id = table
            .lookup_key(table_name, &key)
            .map_err(|e| CacheError::backing_store("GetItem", e))?;

        Ok(table.items.get(&id).cloned())
    }

    async fn put_item(
        &self,
        table_name: &str,
        item: Item,
        options: &CallOptions,
    ) -> Result<WriteAck> {
        log_ignored_condition("PutItem", options);

        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found("PutItem", table_name))?;

        let item =
            canonicalize_item(item).map_err(|e| CacheError::backing_store("PutItem", e))?;
        let id = table
            .item_key(&item)
            .map_err(|e| CacheError::backing_store("PutItem", e))?;

        let previous = table.items.insert(id, item);

        Ok(WriteAck {
            attributes: match options.return_values {
                ReturnValues::AllOld => previous,
                ReturnValues::None => None,
            },
            consumed_capacity: None,
        })
    }

    async fn delete_item(
        &self,
        table_name: &str,
        key: Item,
        options: &CallOptions,
    ) -> Result<WriteAck> {
        log_ignored_condition("DeleteItem", options);

        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found("DeleteItem", table_name))?;

        let id = table
            .lookup_key(table_name, &key)
            .map_err(|e| CacheError::backing_store("DeleteItem", e))?;

        let previous = table.items.remove(&id);

        Ok(WriteAck {
            attributes: match options.return_values {
                ReturnValues::AllOld => previous,
                ReturnValues::None => None,
            },
            consumed_capacity: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> Item {
        Item::from([("key".to_string(), TypedAttribute::String(value.into()))])
    }

    fn item(value: &str, data: &str) -> Item {
        let mut item = key(value);
        item.insert("val".to_string(), TypedAttribute::String(data.into()));
        item
    }

    fn store() -> InMemoryStore {
        InMemoryStore::with_tables([("cache", vec!["key"])])
    }

    fn inner<'a>(err: &'a CacheError) -> &'a InMemoryStoreError {
        match err {
            CacheError::BackingStore { source, .. } => source
                .downcast_ref::<InMemoryStoreError>()
                .expect("in-memory store error"),
            other => panic!("expected a backing store error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = store();
        let options = CallOptions::default();

        store
            .put_item("cache", item("a", "one"), &options)
            .await
            .unwrap();

        let found = store.get_item("cache", key("a"), &options).await.unwrap();
        assert_eq!(found, Some(item("a", "one")));
        assert_eq!(store.item_count("cache").await, Some(1));
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let store = store();

        let found = store
            .get_item("cache", key("missing"), &CallOptions::default())
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_put_replaces_and_returns_old() {
        let store = store();
        let all_old = CallOptions::new().with_return_values(ReturnValues::AllOld);

        let first = store
            .put_item("cache", item("a", "one"), &all_old)
            .await
            .unwrap();
        assert_eq!(first.attributes, None);

        let second = store
            .put_item("cache", item("a", "two"), &all_old)
            .await
            .unwrap();
        assert_eq!(second.attributes, Some(item("a", "one")));
        assert_eq!(store.item_count("cache").await, Some(1));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store();
        let options = CallOptions::default();
        store
            .put_item("cache", item("a", "one"), &options)
            .await
            .unwrap();

        store.delete_item("cache", key("a"), &options).await.unwrap();
        let again = store.delete_item("cache", key("a"), &options).await.unwrap();

        assert_eq!(again, WriteAck::default());
        assert_eq!(store.item_count("cache").await, Some(0));
    }

    #[tokio::test]
    async fn test_missing_table() {
        let store = InMemoryStore::new();

        let err = store
            .get_item("cache", key("a"), &CallOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CacheError::BackingStore {
                operation: "GetItem",
                ..
            }
        ));
        assert_eq!(
            inner(&err),
            &InMemoryStoreError::TableNotFound("cache".to_string())
        );
    }

    #[tokio::test]
    async fn test_key_schema_mismatch() {
        let store = store();
        let wrong = Item::from([("id".to_string(), TypedAttribute::String("a".into()))]);

        let err = store
            .get_item("cache", wrong, &CallOptions::default())
            .await
            .unwrap_err();

        assert_eq!(
            inner(&err),
            &InMemoryStoreError::KeySchemaMismatch {
                table: "cache".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_put_requires_key_attribute() {
        let store = store();
        let no_key = Item::from([("val".to_string(), TypedAttribute::Boolean(true))]);

        let err = store
            .put_item("cache", no_key, &CallOptions::default())
            .await
            .unwrap_err();

        assert_eq!(
            inner(&err),
            &InMemoryStoreError::MissingKeyAttribute {
                attribute: "key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_key_attribute_type_is_checked() {
        let store = store();
        let bad = Item::from([("key".to_string(), TypedAttribute::Boolean(true))]);

        let err = store
            .put_item("cache", bad, &CallOptions::default())
            .await
            .unwrap_err();

        assert_eq!(
            inner(&err),
            &InMemoryStoreError::InvalidKeyType {
                attribute: "key".to_string(),
                tag: "BOOL",
            }
        );
    }

    #[tokio::test]
    async fn test_composite_key_schema() {
        let store = InMemoryStore::new();
        store
            .create_table("cache", vec!["id".to_string(), "environment".to_string()])
            .await;

        let key = Item::from([
            ("id".to_string(), TypedAttribute::Number("42".into())),
            ("environment".to_string(), TypedAttribute::String("dev".into())),
        ]);
        let mut item = key.clone();
        item.insert("config".to_string(), TypedAttribute::Null(true));

        store
            .put_item("cache", item.clone(), &CallOptions::default())
            .await
            .unwrap();

        assert_eq!(store.raw_item("cache", &key).await, Some(item));
    }

    fn number_key(n: &str) -> Item {
        Item::from([("key".to_string(), TypedAttribute::Number(n.into()))])
    }

    #[tokio::test]
    async fn test_numeric_keys_compare_by_value() {
        let store = store();
        let options = CallOptions::default();

        store
            .put_item("cache", number_key("42.0"), &options)
            .await
            .unwrap();
        store
            .put_item("cache", number_key("42"), &options)
            .await
            .unwrap();

        assert_eq!(store.item_count("cache").await, Some(1));
        assert_eq!(
            store.get_item("cache", number_key("4.2E1"), &options).await.unwrap(),
            Some(number_key("42"))
        );
    }

    #[tokio::test]
    async fn test_numbers_are_stored_canonical() {
        let store = store();
        let mut item = key("a");
        item.insert(
            "val".to_string(),
            TypedAttribute::Map(Item::from([(
                "data".to_string(),
                TypedAttribute::List(vec![
                    TypedAttribute::Number("2.0".into()),
                    TypedAttribute::NumberSet(vec!["1.50".into(), "1E+3".into()]),
                ]),
            )])),
        );

        store
            .put_item("cache", item, &CallOptions::default())
            .await
            .unwrap();

        let stored = store.raw_item("cache", &key("a")).await.unwrap();
        assert_eq!(
            stored["val"],
            TypedAttribute::Map(Item::from([(
                "data".to_string(),
                TypedAttribute::List(vec![
                    TypedAttribute::Number("2".into()),
                    TypedAttribute::NumberSet(vec!["1.5".into(), "1000".into()]),
                ]),
            )]))
        );
    }

    #[tokio::test]
    async fn test_invalid_number_is_rejected() {
        let store = store();

        let err = store
            .get_item("cache", number_key("4x"), &CallOptions::default())
            .await
            .unwrap_err();

        assert_eq!(
            inner(&err),
            &InMemoryStoreError::InvalidNumber {
                attribute: "key".to_string(),
                value: "4x".to_string(),
            }
        );
    }
}
