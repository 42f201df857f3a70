//! Opaque JSON values embedded in DSL objects (script params, options).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// An arbitrary JSON value passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonData(Value);

impl JsonData {
    /// Capture any serializable value.
    pub fn of<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }

    /// Convert into a concrete type.
    pub fn to<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.0.clone())?)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for JsonData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for JsonData {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

impl From<String> for JsonData {
    fn from(value: String) -> Self {
        Self(Value::from(value))
    }
}

impl From<i64> for JsonData {
    fn from(value: i64) -> Self {
        Self(Value::from(value))
    }
}

impl From<f64> for JsonData {
    fn from(value: f64) -> Self {
        Self(Value::from(value))
    }
}

impl From<bool> for JsonData {
    fn from(value: bool) -> Self {
        Self(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transparent_encoding() {
        let data = JsonData::from(json!({"factor": 2, "tags": ["a"]}));
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"factor":2,"tags":["a"]}"#
        );
    }

    #[test]
    fn test_of_and_to() {
        let data = JsonData::of(&vec![1, 2, 3]).unwrap();
        assert_eq!(data.as_value(), &json!([1, 2, 3]));
        assert_eq!(data.to::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
        assert!(data.to::<String>().is_err());
    }
}
