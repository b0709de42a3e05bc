//! Taxonomy handling for catmatch.
//!
//! - [`flatten`] turns a nested category tree into an ordered [`FlatTaxonomy`]
//! - [`resolver`] maps a suggested path or a candidate id onto one category
//! - [`schema`] locates and fetches a leaf category's attribute schema
//! - [`ingest`] decodes the marketplace's category and attribute payloads
//! - [`catalog`] lists the attribute-bearing categories for pickers
//!
//! # Example
//!
//! ```
//! use catmatch_core::{CategoryNode, Matcher};
//! use catmatch_taxonomy::{resolve_category, FlatTaxonomy};
//!
//! let roots = vec![CategoryNode::new(3, "Fietsen en Brommers")
//!     .with_child(CategoryNode::new(31, "Fietsen"))
//!     .with_child(CategoryNode::new(32, "Brommers"))];
//! let taxonomy = FlatTaxonomy::from_roots(&roots);
//!
//! let hit = resolve_category("Fietsen en Brommers > Fietsen", &taxonomy, &Matcher::new(0.6)).unwrap();
//! assert_eq!(hit.category.id, 31);
//! ```

pub mod catalog;
pub mod flatten;
pub mod ingest;
pub mod resolver;
pub mod schema;

pub use catalog::{leaf_categories, LeafCategory};
pub use flatten::{flatten, FlatTaxonomy};
pub use ingest::{
    parse_api_categories, parse_api_fields, parse_taxonomy_file, PayloadError, TaxonomyDocument,
};
pub use resolver::{
    resolve_candidate_id, resolve_category, simplify_path, ById, CategoryMatch, CategoryQuery,
    CategoryStrategy, FirstMatch, FuzzyPath, MatchStrategy,
};
pub use schema::{
    locate_schema, schema_for, SchemaAddress, SchemaError, SchemaSource, SourceError,
    StaticSchemaSource,
};
