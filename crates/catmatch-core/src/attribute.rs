//! AI-produced and schema-mapped attribute records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One attribute as produced by the upstream LLM.
///
/// Both sides are free text and untrusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAttribute {
    pub name: String,
    pub value: String,
}

impl AiAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Attribute payload exactly as the LLM returned it.
///
/// The model answers either with an object (`{"merk": "Flysurfer"}`) or with
/// a list of records (`[{"name": "merk", "value": "Flysurfer"}]`). Both shapes
/// are accepted here and normalized into [`AiAttribute`]s before any matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAttributes {
    Map(Map<String, Value>),
    List(Vec<Value>),
}

impl Default for RawAttributes {
    fn default() -> Self {
        RawAttributes::List(Vec::new())
    }
}

impl From<Vec<AiAttribute>> for RawAttributes {
    fn from(attributes: Vec<AiAttribute>) -> Self {
        RawAttributes::List(
            attributes
                .into_iter()
                .map(|a| serde_json::json!({ "name": a.name, "value": a.value }))
                .collect(),
        )
    }
}

/// An attribute whose key is drawn from the resolved category's schema.
///
/// For ENUM entries `value` is one of the option tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappedAttribute {
    pub key: String,
    pub value: String,
}

impl MappedAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
