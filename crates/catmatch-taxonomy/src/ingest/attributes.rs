//! Attribute schema payloads.

use std::collections::HashSet;

use catmatch_core::{AttributeSpec, AttributeType, EnumOption, NumericRange};
use serde::Deserialize;
use tracing::debug;

use super::localized::{first_text, Localized};

/// Attribute as found in a taxonomy file's `attributeGroups`.
#[derive(Debug, Deserialize)]
pub(crate) struct FileAttribute {
    #[serde(default)]
    key: String,
    #[serde(default)]
    label: Option<Localized<String>>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    mandatory: bool,
    #[serde(default)]
    values: Option<Localized<Vec<String>>>,
    #[serde(default)]
    range: Option<RawRange>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FileAttributeGroup {
    #[serde(default)]
    pub(crate) attributes: Vec<FileAttribute>,
}

/// Field as returned by the marketplace attributes API.
#[derive(Debug, Deserialize)]
struct ApiField {
    #[serde(default)]
    key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    labels: Option<Localized<String>>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default, alias = "required")]
    mandatory: bool,
    #[serde(default)]
    options: Vec<ApiOption>,
    #[serde(default)]
    range: Option<RawRange>,
}

#[derive(Debug, Deserialize)]
struct ApiOption {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    labels: Option<Localized<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiFieldsPayload {
    List(Vec<ApiField>),
    Fields {
        fields: Vec<ApiField>,
    },
    Embedded {
        #[serde(rename = "_embedded")]
        embedded: EmbeddedFields,
    },
}

#[derive(Debug, Deserialize)]
struct EmbeddedFields {
    #[serde(default, rename = "mp:attribute")]
    attributes: Vec<ApiField>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RawRange {
    Bounds { min: f64, max: f64 },
    Pair([f64; 2]),
}

impl From<RawRange> for NumericRange {
    fn from(range: RawRange) -> Self {
        let (a, b) = match range {
            RawRange::Bounds { min, max } => (min, max),
            RawRange::Pair([min, max]) => (min, max),
        };
        NumericRange {
            min: a.min(b),
            max: a.max(b),
        }
    }
}

fn attribute_type(kind: Option<&str>, has_options: bool) -> AttributeType {
    let kind = kind.map(str::trim).unwrap_or_default();
    if kind.eq_ignore_ascii_case("NUMBER") {
        AttributeType::Number
    } else if has_options || kind.eq_ignore_ascii_case("LIST") || kind.eq_ignore_ascii_case("ENUM")
    {
        AttributeType::Enum
    } else {
        AttributeType::String
    }
}

impl FileAttribute {
    fn into_spec(self, locale: &str) -> AttributeSpec {
        let label = self
            .label
            .as_ref()
            .and_then(|l| first_text([l.text(locale), l.get_or_first(locale).map(String::as_str)]))
            .unwrap_or_default();

        let values: Vec<String> = self
            .values
            .as_ref()
            .and_then(|v| v.get_or_first(locale))
            .into_iter()
            .flatten()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        let attribute_type = attribute_type(self.kind.as_deref(), !values.is_empty());
        let enum_options = match attribute_type {
            AttributeType::Enum => values
                .into_iter()
                .map(|v| EnumOption::new(v.clone(), v))
                .collect(),
            _ => Vec::new(),
        };
        let numeric_range = match attribute_type {
            AttributeType::Number => self.range.map(NumericRange::from),
            _ => None,
        };

        AttributeSpec {
            key: self.key.trim().to_string(),
            label,
            attribute_type,
            required: self.mandatory,
            enum_options,
            numeric_range,
        }
    }
}

impl ApiOption {
    fn into_option(self, locale: &str) -> Option<EnumOption> {
        let token = first_text([self.key.as_deref(), self.value.as_deref()])?;
        let label = first_text([
            self.labels.as_ref().and_then(|l| l.text(locale)),
            self.label.as_deref(),
        ])
        .unwrap_or_else(|| token.clone());
        Some(EnumOption::new(token, label))
    }
}

impl ApiField {
    fn into_spec(self, locale: &str) -> AttributeSpec {
        let label = first_text([
            self.labels.as_ref().and_then(|l| l.text(locale)),
            self.label.as_deref(),
            self.name.as_deref(),
        ])
        .unwrap_or_default();

        let enum_options: Vec<EnumOption> = self
            .options
            .into_iter()
            .filter_map(|o| o.into_option(locale))
            .collect();
        let attribute_type = attribute_type(self.kind.as_deref(), !enum_options.is_empty());
        let numeric_range = match attribute_type {
            AttributeType::Number => self.range.map(NumericRange::from),
            _ => None,
        };

        AttributeSpec {
            key: self.key.trim().to_string(),
            label,
            attribute_type,
            required: self.mandatory,
            enum_options: if attribute_type == AttributeType::Enum {
                enum_options
            } else {
                Vec::new()
            },
            numeric_range,
        }
    }
}

/// Keeps schema order, skips blank keys, first occurrence of a key wins.
fn dedup_schema(specs: impl IntoIterator<Item = AttributeSpec>) -> Vec<AttributeSpec> {
    let mut seen = HashSet::new();
    specs
        .into_iter()
        .filter(|spec| {
            if spec.key.is_empty() {
                debug!(event = "schema_entry_skipped", reason = "empty_key");
                return false;
            }
            if !seen.insert(spec.key.clone()) {
                debug!(event = "schema_entry_skipped", reason = "duplicate_key", key = %spec.key);
                return false;
            }
            true
        })
        .collect()
}

pub(crate) fn schema_from_groups(groups: Vec<FileAttributeGroup>, locale: &str) -> Vec<AttributeSpec> {
    dedup_schema(
        groups
            .into_iter()
            .flat_map(|g| g.attributes)
            .map(|a| a.into_spec(locale)),
    )
}

pub(crate) fn schema_from_api(json: &str, locale: &str) -> Result<Vec<AttributeSpec>, serde_json::Error> {
    let fields = match serde_json::from_str::<ApiFieldsPayload>(json)? {
        ApiFieldsPayload::List(fields) => fields,
        ApiFieldsPayload::Fields { fields } => fields,
        ApiFieldsPayload::Embedded { embedded } => embedded.attributes,
    };
    Ok(dedup_schema(fields.into_iter().map(|f| f.into_spec(locale))))
}
