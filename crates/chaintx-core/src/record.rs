//! `TxRecord` — an open, loosely-typed transaction request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::value::FieldValue;

/// Field names inspected by the variant predicates.
pub mod fields {
    pub const TYPE: &str = "type";
    pub const FROM: &str = "from";
    pub const MAX_FEE_PER_GAS: &str = "maxFeePerGas";
    pub const MAX_PRIORITY_FEE_PER_GAS: &str = "maxPriorityFeePerGas";
    pub const FEE_CURRENCY: &str = "feeCurrency";
    pub const GATEWAY_FEE_RECIPIENT: &str = "gatewayFeeRecipient";
    pub const GATEWAY_FEE: &str = "gatewayFee";
}

static ABSENT: FieldValue = FieldValue::Absent;

/// A transaction request as assembled by a wallet before signing.
///
/// There is no fixed schema: any key may be present, and unknown keys are
/// carried along untouched. Lookups of missing keys yield
/// [`FieldValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxRecord {
    fields: HashMap<String, FieldValue>,
}

impl TxRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Remove a field.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Look up a field. Missing keys read as [`FieldValue::Absent`].
    pub fn get(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&ABSENT)
    }

    /// Whether the key exists at all (even if its value is empty).
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Shorthand for `self.get(key).is_present()`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_present()
    }

    /// The explicit `type` tag, when it is a string.
    pub fn type_tag(&self) -> Option<&str> {
        self.get(fields::TYPE).as_str()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a record from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Build a record from an already-parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, RecordError> {
        use serde_json::Value;
        match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from_json(v)))
                .collect()),
            Value::Null => Err(RecordError::NotAnObject { found: "null" }),
            Value::Bool(_) => Err(RecordError::NotAnObject { found: "boolean" }),
            Value::Number(_) => Err(RecordError::NotAnObject { found: "number" }),
            Value::String(_) => Err(RecordError::NotAnObject { found: "string" }),
            Value::Array(_) => Err(RecordError::NotAnObject { found: "array" }),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for TxRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
