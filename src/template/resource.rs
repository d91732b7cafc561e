//! Resource declarations: a type tag plus an insertion-ordered property map.

use crate::template::value::Value;
use hashlink::LinkedHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    kind: String,

    #[serde(rename = "Properties")]
    properties: LinkedHashMap<String, Value>,
}

impl Resource {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: LinkedHashMap::new(),
        }
    }

    /// Set a property, keeping declaration order. Setting a key twice
    /// replaces the value in place.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
