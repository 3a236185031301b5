use std::env;
use std::fmt;

use ddbcache_core::cache::{
    CacheConfig, DEFAULT_DATA_REF, DEFAULT_KEY_FIELD, DEFAULT_TABLE_NAME, DEFAULT_VAL_FIELD,
};

/// Adapter configuration: attribute naming plus backing-store connection.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub cache: CacheConfig,
    pub connection: ConnectionConfig,
}

/// Parameters forwarded to the DynamoDB client. Unset fields fall back to
/// the AWS SDK default provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// AWS region.
    pub region: Option<String>,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// Named profile from the shared AWS config files.
    pub profile: Option<String>,
    /// Explicit credentials, overriding the provider chain.
    pub credentials: Option<StaticCredentials>,
}

/// A fixed access key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

impl ConnectionConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), _) => format!("Local DynamoDB ({})", url),
            (None, Some(region)) => format!("AWS DynamoDB (region: {})", region),
            (None, None) => "AWS DynamoDB (default region)".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DDBCACHE_TABLE_NAME` - Target table (default: "cache")
    /// - `DDBCACHE_KEY_FIELD` - Scalar key attribute (default: "key")
    /// - `DDBCACHE_VAL_FIELD` - Value attribute (default: "val")
    /// - `DDBCACHE_DATA_REF` - Data entry inside the value attribute (default: "data")
    /// - `AWS_REGION` - AWS region
    /// - `AWS_ENDPOINT_URL` - Use local DynamoDB (e.g., http://localhost:8000)
    /// - `AWS_PROFILE` - AWS profile to use for credentials
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let setting = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Self {
            cache: CacheConfig {
                key_field: setting("DDBCACHE_KEY_FIELD", DEFAULT_KEY_FIELD),
                val_field: setting("DDBCACHE_VAL_FIELD", DEFAULT_VAL_FIELD),
                data_ref: setting("DDBCACHE_DATA_REF", DEFAULT_DATA_REF),
                table_name: setting("DDBCACHE_TABLE_NAME", DEFAULT_TABLE_NAME),
            },
            connection: ConnectionConfig {
                region: lookup("AWS_REGION"),
                endpoint_url: lookup("AWS_ENDPOINT_URL"),
                profile: lookup("AWS_PROFILE"),
                credentials: None,
            },
        }
    }
}
