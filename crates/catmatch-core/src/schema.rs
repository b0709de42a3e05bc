//! Attribute schema entries.
//!
//! An attribute schema is the ordered, typed set of fields a leaf category
//! accepts. Keys are unique within one category's schema.

use serde::{Deserialize, Serialize};

/// Value type of an attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    /// Free text.
    #[default]
    String,

    /// Numeric value, optionally bounded by a [`NumericRange`].
    Number,

    /// One of a fixed list of [`EnumOption`]s.
    Enum,
}

/// A permitted value of an ENUM attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumOption {
    /// Value the marketplace expects on the wire.
    pub token: String,

    /// Localized, human readable label.
    pub label: String,
}

impl EnumOption {
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }
}

/// Inclusive numeric bounds of a NUMBER attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

/// One field of a category's attribute schema.
///
/// # Example
///
/// ```
/// use catmatch_core::{AttributeSpec, AttributeType, EnumOption};
///
/// let condition = AttributeSpec::enumeration(
///     "conditie",
///     "Conditie",
///     vec![EnumOption::new("nieuw", "Nieuw"), EnumOption::new("gebruikt", "Gebruikt")],
/// )
/// .required();
///
/// assert_eq!(condition.attribute_type, AttributeType::Enum);
/// assert!(condition.required);
/// assert_eq!(condition.display_label(), "Conditie");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    pub key: String,

    #[serde(default)]
    pub label: String,

    #[serde(rename = "type", default)]
    pub attribute_type: AttributeType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub enum_options: Vec<EnumOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_range: Option<NumericRange>,
}

impl AttributeSpec {
    fn with_type(
        key: impl Into<String>,
        label: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            attribute_type,
            required: false,
            enum_options: Vec::new(),
            numeric_range: None,
        }
    }

    /// Creates an optional STRING attribute.
    pub fn string(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_type(key, label, AttributeType::String)
    }

    /// Creates an optional NUMBER attribute.
    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_type(key, label, AttributeType::Number)
    }

    /// Creates an optional ENUM attribute with the given options.
    pub fn enumeration(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<EnumOption>,
    ) -> Self {
        Self {
            enum_options: options,
            ..Self::with_type(key, label, AttributeType::Enum)
        }
    }

    /// Marks the attribute as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets numeric bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.numeric_range = Some(NumericRange { min, max });
        self
    }

    /// Label used for name matching; falls back to the key when unlabeled.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.key
        } else {
            &self.label
        }
    }

    pub fn is_enum(&self) -> bool {
        self.attribute_type == AttributeType::Enum
    }
}
