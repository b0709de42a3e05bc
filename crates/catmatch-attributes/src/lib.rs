//! Attribute mapping for catmatch.
//!
//! AI-generated attributes are untrusted free text. This crate turns them into
//! a clean subset of a leaf category's schema:
//!
//! 1. [`normalize()`] accepts either payload shape and yields [`AiAttribute`]s
//! 2. [`map_attributes`] fuzzy-matches names onto schema labels and values onto
//!    enum options, dropping everything it cannot place
//! 3. [`missing_required`] lists the required keys still absent
//!
//! Dropped attributes are never errors. They are listed in the
//! [`MappingReport`] returned alongside the mapped attributes.
//!
//! # Example
//!
//! ```
//! use catmatch_attributes::{map_attributes, missing_required};
//! use catmatch_config::MatchingConfig;
//! use catmatch_core::{AttributeSpec, EnumOption, RawAttributes};
//!
//! let schema = vec![
//!     AttributeSpec::enumeration(
//!         "conditie",
//!         "Conditie",
//!         vec![EnumOption::new("nieuw", "Nieuw"), EnumOption::new("beschadigd", "Beschadigd")],
//!     )
//!     .required(),
//!     AttributeSpec::string("merk", "Merk").required(),
//! ];
//! let raw: RawAttributes = serde_json::from_str(r#"{"condition": "Nieuwe", "kleur": "rood"}"#).unwrap();
//!
//! let mapping = map_attributes(&raw, &schema, &MatchingConfig::default());
//! assert_eq!(mapping.attributes.len(), 1);
//! assert_eq!(mapping.attributes[0].value, "nieuw");
//! assert_eq!(missing_required(&mapping.attributes, &schema), vec!["merk"]);
//! ```
//!
//! [`AiAttribute`]: catmatch_core::AiAttribute

pub mod mapper;
pub mod normalize;
pub mod required;

pub use mapper::{
    map_attributes, map_normalized, DropReason, DroppedAttribute, Mapping, MappingReport,
};
pub use normalize::normalize;
pub use required::missing_required;
