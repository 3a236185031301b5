//! DynamoDB item store implementation.
//!
//! Implements `ItemStore` from `ddbcache_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{ConsumedCapacity, ReturnConsumedCapacity, ReturnValue};
use aws_sdk_dynamodb::Client;

use ddbcache_core::attribute::Item;
use ddbcache_core::cache::Result;
use ddbcache_core::storage::{CallOptions, ItemStore, ReturnValues, WriteAck};

use super::conversions::{item_from_sdk, item_to_sdk};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error};

/// DynamoDB-based item store.
///
/// Cloning is cheap; the SDK client is reference counted and safe to share
/// across concurrent calls.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The underlying SDK client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn get_item(
        &self,
        table_name: &str,
        key: Item,
        options: &CallOptions,
    ) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(item_to_sdk(key)))
            .set_consistent_read(options.consistent_read)
            .set_return_consumed_capacity(return_consumed_capacity(options))
            .send()
            .await
            .map_err(map_get_item_error)?;

        log_consumed_capacity("GetItem", result.consumed_capacity());

        match result.item {
            Some(item) => Ok(Some(item_from_sdk(item)?)),
            None => Ok(None),
        }
    }

    async fn put_item(
        &self,
        table_name: &str,
        item: Item,
        options: &CallOptions,
    ) -> Result<WriteAck> {
        let result = self
            .client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item_to_sdk(item)))
            .set_condition_expression(options.condition_expression.clone())
            .set_expression_attribute_names(expression_attribute_names(options))
            .set_expression_attribute_values(expression_attribute_values(options))
            .set_return_values(return_values(options))
            .set_return_consumed_capacity(return_consumed_capacity(options))
            .send()
            .await
            .map_err(map_put_item_error)?;

        write_ack(result.attributes, result.consumed_capacity)
    }

    async fn delete_item(
        &self,
        table_name: &str,
        key: Item,
        options: &CallOptions,
    ) -> Result<WriteAck> {
        let result = self
            .client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(item_to_sdk(key)))
            .set_condition_expression(options.condition_expression.clone())
            .set_expression_attribute_names(expression_attribute_names(options))
            .set_expression_attribute_values(expression_attribute_values(options))
            .set_return_values(return_values(options))
            .set_return_consumed_capacity(return_consumed_capacity(options))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        write_ack(result.attributes, result.consumed_capacity)
    }
}

// ============================================================================
// Request option helpers
// ============================================================================

// DynamoDB rejects empty expression maps, so they are omitted instead.
fn expression_attribute_names(options: &CallOptions) -> Option<HashMap<String, String>> {
    (!options.expression_attribute_names.is_empty())
        .then(|| options.expression_attribute_names.clone())
}

fn expression_attribute_values(
    options: &CallOptions,
) -> Option<HashMap<String, aws_sdk_dynamodb::types::AttributeValue>> {
    (!options.expression_attribute_values.is_empty())
        .then(|| item_to_sdk(options.expression_attribute_values.clone()))
}

fn return_values(options: &CallOptions) -> Option<ReturnValue> {
    match options.return_values {
        ReturnValues::None => None,
        ReturnValues::AllOld => Some(ReturnValue::AllOld),
    }
}

fn return_consumed_capacity(options: &CallOptions) -> Option<ReturnConsumedCapacity> {
    options
        .return_consumed_capacity
        .then_some(ReturnConsumedCapacity::Total)
}

fn write_ack(
    attributes: Option<HashMap<String, aws_sdk_dynamodb::types::AttributeValue>>,
    consumed_capacity: Option<ConsumedCapacity>,
) -> Result<WriteAck> {
    Ok(WriteAck {
        attributes: attributes.map(item_from_sdk).transpose()?,
        consumed_capacity: consumed_capacity.and_then(|c| c.capacity_units()),
    })
}

fn log_consumed_capacity(operation: &'static str, consumed: Option<&ConsumedCapacity>) {
    if let Some(units) = consumed.and_then(|c| c.capacity_units()) {
        tracing::debug!(operation, units, "Consumed capacity");
    }
}

#[cfg(test)]
mod tests {
    use ddbcache_core::attribute::TypedAttribute;

    use super::*;

    #[test]
    fn test_empty_expression_maps_are_omitted() {
        let options = CallOptions::default();

        assert!(expression_attribute_names(&options).is_none());
        assert!(expression_attribute_values(&options).is_none());
        assert!(return_values(&options).is_none());
        assert!(return_consumed_capacity(&options).is_none());
    }

    #[test]
    fn test_options_are_forwarded() {
        let options = CallOptions::new()
            .with_attribute_name("#v", "val")
            .with_attribute_value(":one", TypedAttribute::Number("1".into()))
            .with_return_values(ReturnValues::AllOld)
            .with_consumed_capacity();

        let names = expression_attribute_names(&options).unwrap();
        assert_eq!(names.get("#v").map(String::as_str), Some("val"));

        let values = expression_attribute_values(&options).unwrap();
        assert_eq!(values.get(":one").unwrap().as_n().unwrap(), "1");

        assert_eq!(return_values(&options), Some(ReturnValue::AllOld));
        assert_eq!(
            return_consumed_capacity(&options),
            Some(ReturnConsumedCapacity::Total)
        );
    }

    #[test]
    fn test_write_ack_from_output_parts() {
        let attributes = HashMap::from([(
            "key".to_string(),
            aws_sdk_dynamodb::types::AttributeValue::S("42".to_string()),
        )]);
        let capacity = ConsumedCapacity::builder()
            .table_name("cache")
            .capacity_units(1.0)
            .build();

        let ack = write_ack(Some(attributes), Some(capacity)).unwrap();

        assert_eq!(
            ack.attributes.unwrap()["key"],
            TypedAttribute::String("42".into())
        );
        assert_eq!(ack.consumed_capacity, Some(1.0));
    }

    #[test]
    fn test_write_ack_without_return_values() {
        let ack = write_ack(None, None).unwrap();
        assert_eq!(ack, WriteAck::default());
    }
}
