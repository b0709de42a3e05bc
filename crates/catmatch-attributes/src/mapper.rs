//! Fuzzy mapping of AI attributes onto an attribute schema.
//!
//! Every emitted [`MappedAttribute`] takes its key from the schema and, for
//! ENUM entries, its value from the option tokens. Nothing the model invented
//! is passed through: names that match no label, enum values that match no
//! option and repeats of an already mapped key are dropped and reported.

use std::collections::HashSet;
use std::fmt;

use catmatch_config::MatchingConfig;
use catmatch_core::{AiAttribute, AttributeSpec, EnumOption, MappedAttribute, Matcher, RawAttributes};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::normalize::normalize;

/// Why an AI attribute was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Name is not close enough to any schema label.
    UnknownName,

    /// Value matches none of the ENUM entry's options.
    InvalidEnumValue,

    /// Name matched a key that an earlier attribute already filled.
    DuplicateKey,

    /// Name matched but no value was given.
    EmptyValue,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DropReason::UnknownName => "unknown_name",
            DropReason::InvalidEnumValue => "invalid_enum_value",
            DropReason::DuplicateKey => "duplicate_key",
            DropReason::EmptyValue => "empty_value",
        };
        f.write_str(reason)
    }
}

/// An AI attribute that did not make it into the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedAttribute {
    pub name: String,
    pub value: String,

    /// Schema key the name matched, if it matched one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    pub reason: DropReason,
}

/// Diagnostics collected while mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    pub dropped: Vec<DroppedAttribute>,
}

impl MappingReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Number of attributes dropped for `reason`.
    pub fn count(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|d| d.reason == reason).count()
    }

    fn record(&mut self, attribute: &AiAttribute, key: Option<&str>, reason: DropReason) {
        debug!(
            event = "attribute_dropped",
            name = %attribute.name,
            reason = %reason,
        );
        self.dropped.push(DroppedAttribute {
            name: attribute.name.clone(),
            value: attribute.value.clone(),
            key: key.map(str::to_string),
            reason,
        });
    }
}

/// Result of [`map_attributes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Schema-valid attributes in input order, at most one per key.
    pub attributes: Vec<MappedAttribute>,

    pub report: MappingReport,
}

impl Mapping {
    /// Value mapped for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.key.as_str())
    }
}

/// Normalizes `raw` and maps it onto `schema`.
pub fn map_attributes(
    raw: &RawAttributes,
    schema: &[AttributeSpec],
    config: &MatchingConfig,
) -> Mapping {
    map_normalized(&normalize(raw), schema, config)
}

/// Maps already normalized attributes onto `schema`.
///
/// Names are matched against each entry's label (its key when unlabeled)
/// with the label cutoff. A blank value is dropped as
/// [`DropReason::EmptyValue`]. For ENUM entries the trimmed value must equal
/// an option token or label, or match an option label with the enum cutoff;
/// the option's token is emitted. Other values are kept verbatim. When several
/// attributes land on the same key, the first wins.
pub fn map_normalized(
    attributes: &[AiAttribute],
    schema: &[AttributeSpec],
    config: &MatchingConfig,
) -> Mapping {
    let label_matcher = config.label_matcher();
    let enum_matcher = config.enum_matcher();

    let mut mapping = Mapping::default();
    let mut filled: HashSet<&str> = HashSet::new();

    for attribute in attributes {
        let Some(hit) = label_matcher.best(
            &attribute.name,
            schema.iter().map(AttributeSpec::display_label),
        ) else {
            mapping.report.record(attribute, None, DropReason::UnknownName);
            continue;
        };
        let spec = &schema[hit.index];
        let key = spec.key.as_str();

        if filled.contains(key) {
            mapping.report.record(attribute, Some(key), DropReason::DuplicateKey);
            continue;
        }

        let value = attribute.value.trim();
        if value.is_empty() {
            mapping.report.record(attribute, Some(key), DropReason::EmptyValue);
            continue;
        }

        let value = if spec.is_enum() {
            match enum_option(value, &spec.enum_options, &enum_matcher) {
                Some(option) => option.token.clone(),
                None => {
                    warn!(
                        event = "enum_value_rejected",
                        key = key,
                        value = value,
                        option_count = spec.enum_options.len() as u64,
                    );
                    mapping
                        .report
                        .record(attribute, Some(key), DropReason::InvalidEnumValue);
                    continue;
                }
            }
        } else {
            attribute.value.clone()
        };

        debug!(
            event = "attribute_mapped",
            name = %attribute.name,
            key = key,
            score = hit.score,
        );
        filled.insert(key);
        mapping.attributes.push(MappedAttribute::new(key, value));
    }

    mapping
}

fn enum_option<'s>(value: &str, options: &'s [EnumOption], matcher: &Matcher) -> Option<&'s EnumOption> {
    if let Some(option) = options.iter().find(|o| o.token == value || o.label == value) {
        return Some(option);
    }
    let hit = matcher.best(value, options.iter().map(|o| o.label.as_str()))?;
    Some(&options[hit.index])
}
