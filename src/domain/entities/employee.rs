//! Employee record owned by the employee service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An employee as returned by the employee service, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee(Value);

impl Employee {
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Employee {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
