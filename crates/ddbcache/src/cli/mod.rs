//! CLI command definitions.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use ddbcache_core::attribute::TypedAttribute;
use ddbcache_core::cache::{
    CacheConfig, CacheKey, DEFAULT_DATA_REF, DEFAULT_KEY_FIELD, DEFAULT_TABLE_NAME,
    DEFAULT_VAL_FIELD,
};
use ddbcache_core::storage::{CallOptions, ReturnValues};
use ddbcache_core::value::Value;

use crate::config::{Config, ConnectionConfig};

/// Key-value cache over a DynamoDB table.
#[derive(Debug, Parser)]
#[command(name = "ddbcache")]
#[command(about = "Key-value cache over a DynamoDB table", long_about = None)]
pub struct Cli {
    /// Table holding the cache items.
    #[arg(long, env = "DDBCACHE_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    /// Attribute that holds scalar keys.
    #[arg(long, env = "DDBCACHE_KEY_FIELD", default_value = DEFAULT_KEY_FIELD)]
    pub key_field: String,

    /// Attribute that wraps the cached value.
    #[arg(long, env = "DDBCACHE_VAL_FIELD", default_value = DEFAULT_VAL_FIELD)]
    pub val_field: String,

    /// Entry inside the value attribute holding the data.
    #[arg(long, env = "DDBCACHE_DATA_REF", default_value = DEFAULT_DATA_REF)]
    pub data_ref: String,

    /// AWS region.
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom endpoint URL (e.g., http://localhost:8000 for DynamoDB Local).
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// AWS profile to use for credentials.
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Adapter configuration from the parsed flags.
    pub fn config(&self) -> Config {
        Config {
            cache: CacheConfig {
                key_field: self.key_field.clone(),
                val_field: self.val_field.clone(),
                data_ref: self.data_ref.clone(),
                table_name: self.table_name.clone(),
            },
            connection: ConnectionConfig {
                region: self.region.clone(),
                endpoint_url: self.endpoint_url.clone(),
                profile: self.profile.clone(),
                credentials: None,
            },
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a cached value.
    Get {
        #[command(flatten)]
        key: KeyArgs,

        /// Use a strongly consistent read.
        #[arg(long)]
        consistent_read: bool,
    },
    /// Store a value, replacing any previous one.
    Set {
        #[command(flatten)]
        key: KeyArgs,

        /// Value to store.
        value: String,

        /// Parse the value as JSON instead of storing it as a string.
        #[arg(long)]
        value_json: bool,

        #[command(flatten)]
        write: WriteArgs,
    },
    /// Remove a cached value.
    Delete {
        #[command(flatten)]
        key: KeyArgs,

        #[command(flatten)]
        write: WriteArgs,
    },
}

/// Cache key argument.
#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Cache key.
    pub key: String,

    /// Parse the key as JSON (a number or an object of key attributes).
    #[arg(long)]
    pub key_json: bool,
}

impl KeyArgs {
    pub fn parse_key(&self) -> anyhow::Result<CacheKey> {
        if !self.key_json {
            return Ok(CacheKey::from(self.key.as_str()));
        }

        let json: serde_json::Value =
            serde_json::from_str(&self.key).context("Key is not valid JSON")?;
        Ok(CacheKey::try_from(json)?)
    }
}

/// Options shared by writes.
#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Condition the write must satisfy.
    #[arg(long)]
    pub condition_expression: Option<String>,

    /// Expression attribute name, as PLACEHOLDER=NAME. Repeatable.
    #[arg(long = "attribute-name", value_parser = parse_assignment)]
    pub attribute_names: Vec<(String, String)>,

    /// Expression attribute value in DynamoDB JSON, as PLACEHOLDER=JSON. Repeatable.
    #[arg(long = "attribute-value", value_parser = parse_assignment)]
    pub attribute_values: Vec<(String, String)>,

    /// Print the item as it was before the write.
    #[arg(long)]
    pub return_old: bool,
}

impl WriteArgs {
    pub fn call_options(&self) -> anyhow::Result<CallOptions> {
        let mut options = CallOptions::new();

        if let Some(condition) = &self.condition_expression {
            options = options.with_condition_expression(condition);
        }

        for (placeholder, name) in &self.attribute_names {
            options = options.with_attribute_name(placeholder, name);
        }

        for (placeholder, json) in &self.attribute_values {
            let value: TypedAttribute = serde_json::from_str(json)
                .with_context(|| format!("Invalid attribute value for `{placeholder}`"))?;
            options = options.with_attribute_value(placeholder, value);
        }

        if self.return_old {
            options = options.with_return_values(ReturnValues::AllOld);
        }

        Ok(options)
    }
}

/// Parses a `set` value argument.
pub fn parse_value(raw: &str, json: bool) -> anyhow::Result<Value> {
    if !json {
        return Ok(Value::from(raw));
    }

    let json: serde_json::Value = serde_json::from_str(raw).context("Value is not valid JSON")?;
    Ok(Value::from(json))
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(left, right)| (left.to_string(), right.to_string()))
        .ok_or_else(|| format!("expected PLACEHOLDER=VALUE, got `{s}`"))
}
