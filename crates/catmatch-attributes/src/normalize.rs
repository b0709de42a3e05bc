//! Normalization of the AI attribute payload.

use catmatch_core::{AiAttribute, RawAttributes};
use serde_json::{Map, Value};
use tracing::trace;

/// Flattens either payload shape into a list of name/value records.
///
/// - object form: every member becomes one record, in document order
/// - list form: each element must be an object with `name` and/or `value`
///
/// Scalars are rendered as text, nested values as compact JSON. Names are
/// trimmed; values are kept as given unless blank. An entry with neither a
/// name nor a value is discarded; when only one side is present the other
/// becomes the empty string.
pub fn normalize(raw: &RawAttributes) -> Vec<AiAttribute> {
    let records: Vec<AiAttribute> = match raw {
        RawAttributes::Map(map) => map
            .iter()
            .filter_map(|(name, value)| record(Some(name.as_str()), text(value).as_deref()))
            .collect(),
        RawAttributes::List(items) => items.iter().filter_map(list_record).collect(),
    };
    trace!(event = "attributes_normalized", count = records.len() as u64);
    records
}

fn list_record(item: &Value) -> Option<AiAttribute> {
    let object: &Map<String, Value> = item.as_object()?;
    let name = object.get("name").and_then(text);
    let value = object.get("value").and_then(text);
    record(name.as_deref(), value.as_deref())
}

fn record(name: Option<&str>, value: Option<&str>) -> Option<AiAttribute> {
    let name = name.map(str::trim).filter(|s| !s.is_empty());
    let value = value.filter(|s| !s.trim().is_empty());
    if name.is_none() && value.is_none() {
        return None;
    }
    Some(AiAttribute::new(
        name.unwrap_or_default(),
        value.unwrap_or_default(),
    ))
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
