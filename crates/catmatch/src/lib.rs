//! catmatch - Category and Attribute Resolution for marketplace listings
//!
//! Given a taxonomy snapshot, a suggested category and the attributes an LLM
//! produced for an item, the [`Engine`] resolves one category, maps the
//! attributes onto that category's schema, reports missing required
//! attributes and derives a pricing model.
//!
//! # Example
//!
//! ```rust
//! use catmatch::prelude::*;
//!
//! let roots = vec![CategoryNode::new(4, "Watersport en Boten")
//!     .with_child(CategoryNode::new(41, "Kitesurfen"))];
//! let schema = vec![AttributeSpec::string("merk", "Merk").required()];
//!
//! let engine = Engine::builder(FlatTaxonomy::from_roots(&roots))
//!     .with_schema_source(StaticSchemaSource::new().with_schema(SchemaAddress::new(4, 41), schema))
//!     .build()
//!     .unwrap();
//!
//! let request = ResolutionRequest::new()
//!     .with_path("Watersport > Kitesurfen")
//!     .with_attributes(vec![AiAttribute::new("merk", "Flysurfer")])
//!     .with_estimate(450);
//!
//! let resolution = engine.resolve(&request).unwrap();
//! assert_eq!(resolution.category_id(), Some(41));
//! assert!(resolution.is_publishable());
//! ```

mod builder;
mod engine;
mod resolution;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use resolution::{Blocker, Resolution, ResolutionRequest, SchemaStatus};

pub use catmatch_attributes::{DropReason, DroppedAttribute, Mapping, MappingReport};
pub use catmatch_config::EngineConfig;
pub use catmatch_core::{
    AiAttribute, AttributeSpec, AttributeType, CatmatchError, CategoryId, CategoryNode, EnumOption,
    FlatCategory, MappedAttribute, PriceModel, PriceRange, PricingKind, RawAttributes, Result,
};
pub use catmatch_pricing::PricingOutcome;
pub use catmatch_taxonomy::{
    CategoryMatch, CategoryQuery, CategoryStrategy, FlatTaxonomy, LeafCategory, MatchStrategy,
    SchemaAddress, SchemaSource, StaticSchemaSource, TaxonomyDocument,
};

/// Colored console output, installed by [`EngineBuilder::build`].
#[cfg(feature = "console")]
pub use catmatch_console as console;

pub mod prelude {
    pub use super::{Blocker, Engine, EngineBuilder, Resolution, ResolutionRequest, SchemaStatus};
    pub use super::{
        AiAttribute, AttributeSpec, CategoryNode, EngineConfig, EnumOption, FlatTaxonomy,
        PriceRange, PricingKind, RawAttributes, SchemaAddress, StaticSchemaSource,
    };
    pub use super::{CategoryStrategy, MatchStrategy};
}
