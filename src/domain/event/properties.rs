//! In-house properties attached to an event by the event store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Store-owned document of extra event settings.
///
/// Carried as raw JSON; nothing in this crate reads inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InhouseProperties(Value);

impl InhouseProperties {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }
}

impl Default for InhouseProperties {
    fn default() -> Self {
        Self(Value::Object(Default::default()))
    }
}
