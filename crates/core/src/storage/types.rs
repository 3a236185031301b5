use std::collections::HashMap;

use serde::Serialize;

use crate::attribute::{Item, TypedAttribute};

/// Which item attributes a write returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnValues {
    #[default]
    None,
    /// The item as it was before the write.
    AllOld,
}

/// Per-call overlay forwarded to the backing store.
///
/// The adapter never reads these fields; each store applies the ones its
/// backend understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Strongly consistent read (reads only).
    pub consistent_read: Option<bool>,
    /// Condition the write must satisfy (writes only).
    pub condition_expression: Option<String>,
    pub expression_attribute_names: HashMap<String, String>,
    pub expression_attribute_values: HashMap<String, TypedAttribute>,
    pub return_values: ReturnValues,
    pub return_consumed_capacity: bool,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consistent_read(mut self, consistent: bool) -> Self {
        self.consistent_read = Some(consistent);
        self
    }

    pub fn with_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    pub fn with_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .insert(placeholder.into(), name.into());
        self
    }

    pub fn with_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: TypedAttribute,
    ) -> Self {
        self.expression_attribute_values
            .insert(placeholder.into(), value);
        self
    }

    pub fn with_return_values(mut self, return_values: ReturnValues) -> Self {
        self.return_values = return_values;
        self
    }

    pub fn with_consumed_capacity(mut self) -> Self {
        self.return_consumed_capacity = true;
        self
    }
}

/// Raw acknowledgement of a write, passed through to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WriteAck {
    /// Previous attributes, when `ReturnValues::AllOld` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Item>,
    /// Capacity units consumed, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<f64>,
}
