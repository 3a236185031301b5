//! DynamoDB error mapping.
//!
//! Wraps AWS SDK errors into `CacheError::BackingStore`. The SDK error is kept
//! unchanged as the source; only the service error code is logged.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use ddbcache_core::cache::CacheError;

/// Map a GetItem SDK error to CacheError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> CacheError {
    map_sdk_error("GetItem", err)
}

/// Map a PutItem SDK error to CacheError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> CacheError {
    map_sdk_error("PutItem", err)
}

/// Map a DeleteItem SDK error to CacheError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> CacheError {
    map_sdk_error("DeleteItem", err)
}

fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> CacheError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    tracing::warn!(
        operation,
        code = err.code().unwrap_or("unknown"),
        "DynamoDB request failed"
    );
    CacheError::backing_store(operation, err)
}
