use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single outbound request to the host.
///
/// `kind` is an opaque command tag (`"type"` on the wire); the payload is
/// a string-keyed map that defaults to empty. Envelopes are built per
/// call and discarded once the answer arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl QueryRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Map::new(),
        }
    }

    /// Add one payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
