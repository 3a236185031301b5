//! AWS SDK client setup.

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use crate::config::ConnectionConfig;

/// Creates a DynamoDB client with the given connection parameters.
///
/// Starts from the SDK default chain and applies the configured region,
/// endpoint, profile and credentials on top.
pub async fn create_client(config: &ConnectionConfig) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    if let Some(credentials) = &config.credentials {
        loader = loader.credentials_provider(Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "ddbcache",
        ));
    }

    let sdk_config = loader.load().await;
    tracing::debug!(destination = %config.target_display(), "DynamoDB client created");

    Client::new(&sdk_config)
}
