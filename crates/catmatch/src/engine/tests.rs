use super::*;
use catmatch_attributes::DropReason;
use catmatch_core::{CatmatchError, PricingKind};
use catmatch_taxonomy::{ById, SchemaAddress, SourceError, StaticSchemaSource};
use catmatch_test::{kitesurf_schema, sports_taxonomy};
use serde_json::json;

use crate::resolution::Blocker;

fn engine_with(config: EngineConfig) -> Engine {
    Engine::builder(FlatTaxonomy::from_roots(&sports_taxonomy()))
        .with_config(config)
        .with_schema_source(
            StaticSchemaSource::new().with_schema(SchemaAddress::new(4, 41), kitesurf_schema()),
        )
        .build()
        .unwrap()
}

fn engine() -> Engine {
    engine_with(EngineConfig::default())
}

fn attributes(value: serde_json::Value) -> catmatch_core::RawAttributes {
    serde_json::from_value(value).unwrap()
}

struct FailingSource;

impl SchemaSource for FailingSource {
    fn fetch(&self, address: SchemaAddress) -> std::result::Result<Vec<AttributeSpec>, SourceError> {
        Err(SourceError::new(address, "catalog unavailable"))
    }
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
}

#[test]
fn test_build_rejects_unknown_fallback() {
    let result = Engine::builder(FlatTaxonomy::from_roots(&sports_taxonomy()))
        .with_config(EngineConfig::default().with_default_category(999))
        .build();

    assert!(matches!(result, Err(CatmatchError::Config(msg)) if msg.contains("999")));
}

#[test]
fn test_build_rejects_invalid_config() {
    let result = Engine::builder(FlatTaxonomy::from_roots(&sports_taxonomy()))
        .with_config(EngineConfig::default().with_bid_ratio(1.5))
        .build();

    assert!(matches!(result, Err(CatmatchError::Config(_))));
}

#[test]
fn test_exact_path_with_complete_attributes() {
    let request = ResolutionRequest::new()
        .with_path("Watersport en Boten > Kitesurfen")
        .with_attributes(attributes(json!({
            "Conditie": "Zo goed als nieuw",
            "Merk": "Flysurfer",
            "kleur": "rood"
        })))
        .with_estimate(450);

    let resolution = engine().resolve(&request).unwrap();

    let hit = resolution.category.as_ref().unwrap();
    assert_eq!(hit.category.id, 41);
    assert_eq!(hit.strategy, MatchStrategy::ExactPath);
    assert_eq!(
        resolution.schema,
        SchemaStatus::Applicable {
            address: SchemaAddress::new(4, 41),
            attribute_count: 4,
        }
    );
    let keys: Vec<&str> = resolution.attributes.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, vec!["conditie", "merk", "kleur"]);
    assert_eq!(resolution.attributes[0].value, "zo-goed-als-nieuw");
    assert!(resolution.missing_required.is_empty());
    assert_eq!(resolution.pricing.model.kind, PricingKind::Fixed);
    assert_eq!(resolution.pricing.model.asking_price, 450);
    assert!(resolution.is_publishable());
}

#[test]
fn test_rejected_enum_value_leaves_required_key_missing() {
    let request = ResolutionRequest::new()
        .with_path("Watersport en Boten > Kitesurfen")
        .with_attributes(attributes(json!({"Conditie": "perfect", "Merk": "North"})))
        .with_estimate(300);

    let resolution = engine().resolve(&request).unwrap();

    assert_eq!(resolution.report.count(DropReason::InvalidEnumValue), 1);
    assert_eq!(resolution.missing_required, vec!["conditie"]);
    assert_eq!(
        resolution.blockers(),
        vec![Blocker::MissingRequired {
            keys: vec!["conditie".to_string()]
        }]
    );
}

#[test]
fn test_candidate_id_takes_precedence_over_path() {
    let request = ResolutionRequest::new()
        .with_path("Watersport en Boten > Kitesurfen")
        .with_candidate(51)
        .with_estimate(200);

    let resolution = engine().resolve(&request).unwrap();

    let hit = resolution.category.as_ref().unwrap();
    assert_eq!(hit.category.id, 51);
    assert_eq!(hit.strategy, MatchStrategy::CandidateId);
    assert_eq!(resolution.pricing.model.kind, PricingKind::Bidding);
    assert_eq!(resolution.pricing.model.minimal_bid, Some(20));
}

#[test]
fn test_unknown_candidate_falls_through_to_path() {
    let request = ResolutionRequest::new()
        .with_path("Antiek en Kunst > Schilderijen")
        .with_candidate(999);

    let resolution = engine().resolve(&request).unwrap();

    assert_eq!(resolution.category_id(), Some(51));
    assert!(!resolution.is_fallback());
}

#[test]
fn test_unmatched_without_fallback() {
    let request = ResolutionRequest::new()
        .with_path("zzzz")
        .with_attributes(attributes(json!({"merk": "Flysurfer"})))
        .with_estimate(10);

    let resolution = engine().resolve(&request).unwrap();

    assert_eq!(resolution.category, None);
    assert_eq!(resolution.schema, SchemaStatus::NoCategory);
    assert!(resolution.attributes.is_empty());
    assert_eq!(resolution.report.count(DropReason::UnknownName), 1);
    assert_eq!(resolution.blockers(), vec![Blocker::NoCategory]);
}

#[test]
fn test_fallback_used_only_after_strategies_fail() {
    let engine = engine_with(EngineConfig::default().with_default_category(61));

    let unmatched = engine
        .resolve(&ResolutionRequest::new().with_path("zzzz"))
        .unwrap();
    let hit = unmatched.category.as_ref().unwrap();
    assert_eq!(hit.category.id, 61);
    assert_eq!(hit.strategy, MatchStrategy::Fallback);
    assert_eq!(hit.score, 0.0);
    assert!(unmatched.is_fallback());
    assert_eq!(
        unmatched.schema,
        SchemaStatus::Applicable {
            address: SchemaAddress::new(6, 61),
            attribute_count: 0,
        }
    );

    let matched = engine
        .resolve(&ResolutionRequest::new().with_path("Antiek en Kunst > Schilderijen"))
        .unwrap();
    assert_eq!(matched.category_id(), Some(51));
    assert!(!matched.is_fallback());
}

#[test]
fn test_depth_one_category_carries_no_attributes() {
    let request = ResolutionRequest::new()
        .with_path("Telecommunicatie")
        .with_attributes(attributes(json!({"merk": "Fairphone"})))
        .with_estimate(400);

    let resolution = engine().resolve(&request).unwrap();

    assert_eq!(resolution.category_id(), Some(6));
    assert_eq!(resolution.schema, SchemaStatus::NotApplicable { depth: 1 });
    assert!(resolution.attributes.is_empty());
    assert_eq!(
        resolution.blockers(),
        vec![Blocker::AttributesNotSupported {
            category_id: 6,
            depth: 1
        }]
    );
}

#[test]
fn test_depth_three_category_carries_no_attributes() {
    let resolution = engine()
        .resolve(&ResolutionRequest::new().with_candidate(421))
        .unwrap();

    assert_eq!(resolution.schema, SchemaStatus::NotApplicable { depth: 3 });
}

#[test]
fn test_missing_estimate_blocks_publication() {
    let request = ResolutionRequest::new()
        .with_path("Watersport en Boten > Kitesurfen")
        .with_attributes(attributes(json!({"Conditie": "Nieuw", "Merk": "Cabrinha"})));

    let resolution = engine().resolve(&request).unwrap();

    assert_eq!(resolution.pricing.model.asking_price, 0);
    assert_eq!(resolution.blockers(), vec![Blocker::MissingPrice]);
}

#[test]
fn test_source_failure_is_an_error() {
    let engine = Engine::builder(FlatTaxonomy::from_roots(&sports_taxonomy()))
        .with_schema_source(FailingSource)
        .build()
        .unwrap();

    let result = engine.resolve(&ResolutionRequest::new().with_candidate(41));

    assert!(matches!(result, Err(CatmatchError::Schema(msg)) if msg.contains("catalog unavailable")));
}

#[test]
fn test_missing_parent_is_an_error() {
    let taxonomy = FlatTaxonomy::from_flat(vec![FlatCategory::new(
        11,
        "Auto-onderdelen > BMW-onderdelen",
        2,
    )]);
    let engine = Engine::builder(taxonomy).build().unwrap();

    let result = engine.resolve(&ResolutionRequest::new().with_candidate(11));

    assert!(matches!(result, Err(CatmatchError::Schema(_))));
}

#[test]
fn test_custom_strategy_replaces_default() {
    let engine = Engine::builder(FlatTaxonomy::from_roots(&sports_taxonomy()))
        .with_strategy(ById)
        .build()
        .unwrap();

    let by_path = engine
        .resolve(&ResolutionRequest::new().with_path("Antiek en Kunst > Schilderijen"))
        .unwrap();
    assert_eq!(by_path.category, None);

    let by_id = engine
        .resolve(&ResolutionRequest::new().with_candidate(51))
        .unwrap();
    assert_eq!(by_id.category_id(), Some(51));
}

#[test]
fn test_pricing_falls_back_to_suggested_path_text() {
    let request = ResolutionRequest::new()
        .with_path("vintage sieraden munten")
        .with_estimate(100);

    let resolution = engine().resolve(&request).unwrap();

    assert_eq!(resolution.category, None);
    assert_eq!(resolution.pricing.model.kind, PricingKind::Bidding);
    assert_eq!(resolution.pricing.bidding_score, 3);
}

#[test]
fn test_batch_preserves_order() {
    let requests = vec![
        ResolutionRequest::new().with_candidate(61),
        ResolutionRequest::new().with_path("zzzz"),
        ResolutionRequest::new().with_candidate(41),
        ResolutionRequest::new().with_candidate(5),
    ];

    let results = engine().resolve_batch(&requests);

    let ids: Vec<Option<i64>> = results
        .iter()
        .map(|r| r.as_ref().unwrap().category_id())
        .collect();
    assert_eq!(ids, vec![Some(61), None, Some(41), Some(5)]);
}

#[test]
fn test_leaf_categories() {
    let leaves = engine().leaf_categories();
    let ids: Vec<i64> = leaves.iter().map(|l| l.id).collect();

    assert_eq!(ids, vec![51, 61, 41, 42]);
}
