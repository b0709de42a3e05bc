//! Decoding of the marketplace's taxonomy and attribute payloads.
//!
//! Three shapes are understood:
//!
//! - the categories API: a list of `{categoryId, name, labels, _embedded}`
//!   entries, or the same list under `{"_embedded": {"mp:category": [...]}}`
//! - the taxonomy file: `{"children": [{id, label, children, attributeGroups}]}`
//!   whose synthetic root is not itself a category
//! - the attributes API: a list of fields, or the same under `fields` or
//!   `{"_embedded": {"mp:attribute": [...]}}`
//!
//! Labels are read for the requested locale; `nl-NL` and `nl_NL` are the same
//! locale.

mod attributes;
mod categories;
mod localized;

use catmatch_core::{AttributeSpec, CatmatchError, CategoryNode};
use thiserror::Error;
use tracing::debug;

use crate::flatten::FlatTaxonomy;
use crate::schema::StaticSchemaSource;

/// A payload could not be decoded.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid payload: {0}")]
    Invalid(String),
}

impl From<PayloadError> for CatmatchError {
    fn from(err: PayloadError) -> Self {
        CatmatchError::Payload(err.to_string())
    }
}

/// A decoded taxonomy file.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyDocument {
    /// Depth-1 categories in file order.
    pub roots: Vec<CategoryNode>,

    /// Schemas of the depth-2 categories that declare attribute groups.
    pub schemas: StaticSchemaSource,
}

impl TaxonomyDocument {
    /// Flattens and indexes the category tree.
    pub fn taxonomy(&self) -> FlatTaxonomy {
        FlatTaxonomy::from_roots(&self.roots)
    }
}

/// Decodes a categories API response into top-level category trees.
///
/// A category's display name is its label for `locale`, falling back to its
/// `name`.
///
/// ```
/// use catmatch_taxonomy::parse_api_categories;
///
/// let json = r#"[{
///     "categoryId": 1,
///     "name": "Auto-onderdelen",
///     "_embedded": {"mp:category": [
///         {"categoryId": 11, "name": "BMW", "labels": {"nl-NL": "BMW-onderdelen"}}
///     ]}
/// }]"#;
///
/// let roots = parse_api_categories(json, "nl-NL").unwrap();
/// assert_eq!(roots[0].children[0].name, "BMW-onderdelen");
/// ```
pub fn parse_api_categories(json: &str, locale: &str) -> Result<Vec<CategoryNode>, PayloadError> {
    let roots = categories::categories_from_api(json, locale)?;
    debug!(event = "categories_parsed", root_count = roots.len() as u64);
    Ok(roots)
}

/// Decodes a taxonomy file, collecting the attribute schemas it embeds.
pub fn parse_taxonomy_file(json: &str, locale: &str) -> Result<TaxonomyDocument, PayloadError> {
    let (roots, schemas) = categories::taxonomy_from_file(json, locale)?;
    debug!(
        event = "taxonomy_file_parsed",
        root_count = roots.len() as u64,
        schema_count = schemas.len() as u64,
    );
    Ok(TaxonomyDocument { roots, schemas })
}

/// Decodes an attributes API response into an ordered schema.
///
/// Fields with options become ENUM attributes. Fields without a key are
/// skipped and a repeated key keeps its first definition.
pub fn parse_api_fields(json: &str, locale: &str) -> Result<Vec<AttributeSpec>, PayloadError> {
    Ok(attributes::schema_from_api(json, locale)?)
}

#[cfg(test)]
mod tests;
