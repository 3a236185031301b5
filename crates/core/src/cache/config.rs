//! Attribute naming configuration.
//!
//! These names are the on-disk compatibility boundary: every reader and writer
//! of a table must agree on them.

use super::{CacheError, Result};

pub const DEFAULT_KEY_FIELD: &str = "key";
pub const DEFAULT_VAL_FIELD: &str = "val";
pub const DEFAULT_DATA_REF: &str = "data";
pub const DEFAULT_TABLE_NAME: &str = "cache";

/// Names controlling how keys and values map onto item attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Attribute holding a scalar key (default: "key").
    pub key_field: String,
    /// Attribute holding the wrapped value (default: "val").
    pub val_field: String,
    /// Entry inside `val_field` holding the cached value (default: "data").
    pub data_ref: String,
    /// Target table (default: "cache").
    pub table_name: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
            val_field: DEFAULT_VAL_FIELD.to_string(),
            data_ref: DEFAULT_DATA_REF.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

impl CacheConfig {
    pub fn with_key_field(mut self, name: impl Into<String>) -> Self {
        self.key_field = name.into();
        self
    }

    pub fn with_val_field(mut self, name: impl Into<String>) -> Self {
        self.val_field = name.into();
        self
    }

    pub fn with_data_ref(mut self, name: impl Into<String>) -> Self {
        self.data_ref = name.into();
        self
    }

    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// Checks that every name is set and that scalar keys cannot collide
    /// with the value attribute.
    pub fn validate(&self) -> Result<()> {
        let settings = [
            ("key_field", &self.key_field),
            ("val_field", &self.val_field),
            ("data_ref", &self.data_ref),
            ("table_name", &self.table_name),
        ];
        for (setting, value) in settings {
            if value.is_empty() {
                return Err(CacheError::InvalidConfiguration(format!(
                    "{setting} must not be empty"
                )));
            }
        }

        if self.key_field == self.val_field {
            return Err(CacheError::InvalidConfiguration(format!(
                "key_field and val_field must differ (both are `{}`)",
                self.key_field
            )));
        }

        Ok(())
    }
}
