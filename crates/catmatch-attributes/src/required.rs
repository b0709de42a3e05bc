//! Required-attribute check.

use std::collections::HashSet;

use catmatch_core::{AttributeSpec, MappedAttribute};

/// Keys of required schema entries that `mapped` does not fill, in schema order.
///
/// An empty result means the listing is attribute-complete.
pub fn missing_required(mapped: &[MappedAttribute], schema: &[AttributeSpec]) -> Vec<String> {
    let present: HashSet<&str> = mapped.iter().map(|m| m.key.as_str()).collect();
    schema
        .iter()
        .filter(|spec| spec.required && !present.contains(spec.key.as_str()))
        .map(|spec| spec.key.clone())
        .collect()
}
