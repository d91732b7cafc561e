//! Property and output values.
//!
//! Values are either literal strings, `Ref` intrinsics, or tag lists. A
//! placeholder token like `{{ .stack.cidr }}` is just a literal string here;
//! the orchestrator substitutes it outside this program.

use serde::Serialize;

/// Intrinsic reference to a resource by logical id.
///
/// Serializes as `{"Ref": "VPC"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ref {
    #[serde(rename = "Ref")]
    pub logical_id: String,
}

impl Ref {
    pub fn new(logical_id: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
        }
    }
}

/// A `Key`/`Value` tag pair, as carried by a resource's `Tags` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A value as it appears under `Properties` or an output's `Value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Ref(Ref),
    Tags(Vec<Tag>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Ref> for Value {
    fn from(r: Ref) -> Self {
        Value::Ref(r)
    }
}

impl From<Vec<Tag>> for Value {
    fn from(tags: Vec<Tag>) -> Self {
        Value::Tags(tags)
    }
}
