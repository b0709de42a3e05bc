//! catmatch Core - Shared types for category and attribute resolution
//!
//! This crate provides the fundamental vocabulary used by every other catmatch crate:
//! - Taxonomy types (nested [`CategoryNode`] trees and their [`FlatCategory`] projection)
//! - Attribute schema entries describing what a leaf category accepts
//! - AI-produced and schema-mapped attribute records
//! - Price model types
//! - The string similarity ratio shared by all fuzzy matching

pub mod attribute;
pub mod error;
pub mod price;
pub mod schema;
pub mod similarity;
pub mod taxonomy;


pub use attribute::{AiAttribute, MappedAttribute, RawAttributes};
pub use error::{CatmatchError, Result};
pub use price::{PriceModel, PriceRange, PricingKind};
pub use schema::{AttributeSpec, AttributeType, EnumOption, NumericRange};
pub use similarity::{ratio, Candidate, Matcher};
pub use taxonomy::{CategoryId, CategoryNode, FlatCategory, ATTRIBUTE_DEPTH, PATH_SEPARATOR};
