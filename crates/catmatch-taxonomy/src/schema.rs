//! Attribute schema resolution.
//!
//! Only depth-2 categories carry a schema. The catalog service addresses a
//! schema by the category together with its depth-1 parent, so resolution
//! first derives a [`SchemaAddress`] and then asks a [`SchemaSource`].

use std::collections::HashMap;
use std::fmt;

use catmatch_core::{AttributeSpec, CatmatchError, CategoryId, FlatCategory, ATTRIBUTE_DEPTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Key under which the catalog service stores a leaf category's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaAddress {
    pub parent_id: CategoryId,
    pub category_id: CategoryId,
}

impl SchemaAddress {
    pub fn new(parent_id: CategoryId, category_id: CategoryId) -> Self {
        Self {
            parent_id,
            category_id,
        }
    }
}

impl fmt::Display for SchemaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent_id, self.category_id)
    }
}

/// Failure reported by a [`SchemaSource`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("schema source failed for {address}: {message}")]
pub struct SourceError {
    pub address: SchemaAddress,
    pub message: String,
}

impl SourceError {
    pub fn new(address: SchemaAddress, message: impl Into<String>) -> Self {
        Self {
            address,
            message: message.into(),
        }
    }
}

/// Why a schema could not be produced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// Id is not part of the taxonomy snapshot.
    #[error("category {0} is not in the taxonomy")]
    UnknownCategory(CategoryId),

    /// Category exists but does not carry attributes.
    ///
    /// This is an expected outcome: callers continue without attributes.
    #[error("category {category_id} ({path}) is at depth {depth} and carries no attributes")]
    NotApplicable {
        category_id: CategoryId,
        path: String,
        depth: usize,
    },

    /// The depth-1 ancestor of a depth-2 category is missing from the snapshot.
    #[error("no parent category found for {category_id} ({path})")]
    ParentNotFound { category_id: CategoryId, path: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl SchemaError {
    /// Whether this is the expected "no attributes for this category" outcome.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, SchemaError::NotApplicable { .. })
    }
}

impl From<SchemaError> for CatmatchError {
    fn from(err: SchemaError) -> Self {
        CatmatchError::Schema(err.to_string())
    }
}

/// Provider of attribute schemas, typically the marketplace catalog service.
///
/// Implementations own their own I/O, timeouts and retries.
pub trait SchemaSource: Send + Sync {
    /// Returns the ordered schema stored at `address`.
    fn fetch(&self, address: SchemaAddress) -> Result<Vec<AttributeSpec>, SourceError>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn fetch(&self, address: SchemaAddress) -> Result<Vec<AttributeSpec>, SourceError> {
        (**self).fetch(address)
    }
}

impl<S: SchemaSource + ?Sized> SchemaSource for std::sync::Arc<S> {
    fn fetch(&self, address: SchemaAddress) -> Result<Vec<AttributeSpec>, SourceError> {
        (**self).fetch(address)
    }
}

/// In-memory schema source.
///
/// An address without a stored schema yields an empty schema.
///
/// # Example
///
/// ```
/// use catmatch_core::AttributeSpec;
/// use catmatch_taxonomy::{SchemaAddress, SchemaSource, StaticSchemaSource};
///
/// let mut source = StaticSchemaSource::new();
/// source.insert(SchemaAddress::new(1, 11), vec![AttributeSpec::string("merk", "Merk")]);
///
/// assert_eq!(source.fetch(SchemaAddress::new(1, 11)).unwrap().len(), 1);
/// assert!(source.fetch(SchemaAddress::new(1, 12)).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSchemaSource {
    schemas: HashMap<SchemaAddress, Vec<AttributeSpec>>,
}

impl StaticSchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a schema, replacing any previous one at the same address.
    pub fn insert(&mut self, address: SchemaAddress, schema: Vec<AttributeSpec>) {
        self.schemas.insert(address, schema);
    }

    pub fn with_schema(mut self, address: SchemaAddress, schema: Vec<AttributeSpec>) -> Self {
        self.insert(address, schema);
        self
    }

    pub fn get(&self, address: SchemaAddress) -> Option<&[AttributeSpec]> {
        self.schemas.get(&address).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaSource for StaticSchemaSource {
    fn fetch(&self, address: SchemaAddress) -> Result<Vec<AttributeSpec>, SourceError> {
        Ok(self.get(address).map(<[_]>::to_vec).unwrap_or_default())
    }
}

impl FromIterator<(SchemaAddress, Vec<AttributeSpec>)> for StaticSchemaSource {
    fn from_iter<I: IntoIterator<Item = (SchemaAddress, Vec<AttributeSpec>)>>(iter: I) -> Self {
        Self {
            schemas: iter.into_iter().collect(),
        }
    }
}

/// Computes the catalog address of a category's schema.
///
/// The parent is the unique depth-1 category whose path is the strict prefix
/// of the category's own path.
pub fn locate_schema(
    category_id: CategoryId,
    taxonomy: &[FlatCategory],
) -> Result<SchemaAddress, SchemaError> {
    let category = taxonomy
        .iter()
        .find(|c| c.id == category_id)
        .ok_or(SchemaError::UnknownCategory(category_id))?;

    if !category.is_attribute_bearing() {
        return Err(SchemaError::NotApplicable {
            category_id,
            path: category.path.clone(),
            depth: category.depth,
        });
    }

    let parent_not_found = || SchemaError::ParentNotFound {
        category_id,
        path: category.path.clone(),
    };
    let parent_path = category.parent_path().ok_or_else(parent_not_found)?;
    let parent = taxonomy
        .iter()
        .find(|c| c.depth == ATTRIBUTE_DEPTH - 1 && c.path == parent_path)
        .ok_or_else(parent_not_found)?;

    Ok(SchemaAddress::new(parent.id, category.id))
}

/// Resolves and fetches the attribute schema of a category.
///
/// # Errors
///
/// [`SchemaError::NotApplicable`] for categories that are not at depth 2,
/// plus the lookup and source failures listed on [`SchemaError`].
pub fn schema_for<S>(
    category_id: CategoryId,
    taxonomy: &[FlatCategory],
    source: &S,
) -> Result<Vec<AttributeSpec>, SchemaError>
where
    S: SchemaSource + ?Sized,
{
    let address = locate_schema(category_id, taxonomy)?;
    let schema = source.fetch(address)?;
    debug!(
        event = "schema_fetched",
        parent_id = address.parent_id,
        category_id = address.category_id,
        attribute_count = schema.len() as u64,
    );
    Ok(schema)
}
