//! Department record owned by the department service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A department as returned by the department service.
///
/// The structure belongs to that service, so it is kept as raw JSON and
/// passed through untouched. Departments fetched "with employees" carry their
/// nested employee list inside the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(Value);

impl Department {
    /// Borrows the underlying JSON.
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Department {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
