//! Full resolutions over fixture taxonomies and payloads.

use catmatch::prelude::*;
use catmatch::{CatmatchError, LeafCategory, MappedAttribute};
use catmatch_taxonomy::{parse_api_categories, parse_api_fields, parse_taxonomy_file};
use catmatch_test::payloads::{API_CATEGORIES, API_FIELDS, TAXONOMY_FILE};
use catmatch_test::bmw_taxonomy;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawAttributes {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_over_specified_bmw_path() {
    let engine = Engine::builder(FlatTaxonomy::from_roots(&bmw_taxonomy()))
        .build()
        .unwrap();

    let request = ResolutionRequest::new()
        .with_path("Auto-onderdelen > BMW > Specifieke onderdelen > Filters")
        .with_estimate(80);
    let resolution = engine.resolve(&request).unwrap();

    let hit = resolution.category.as_ref().unwrap();
    assert_eq!(hit.category.id, 11);
    assert_eq!(hit.strategy, MatchStrategy::FuzzyPath);
    assert!(hit.score >= 0.6);
    assert_eq!(
        resolution.schema,
        SchemaStatus::Applicable {
            address: SchemaAddress::new(1, 11),
            attribute_count: 0,
        }
    );
    assert!(resolution.is_publishable());
}

#[test]
fn test_strict_cutoff_with_configured_fallback() {
    let config = EngineConfig::from_toml_str(
        r#"
        [matching]
        path_cutoff = 0.8

        [fallback]
        default_category_id = 3
        "#,
    )
    .unwrap();
    let engine = Engine::builder(FlatTaxonomy::from_roots(&bmw_taxonomy()))
        .with_config(config)
        .build()
        .unwrap();

    let resolution = engine
        .resolve(
            &ResolutionRequest::new()
                .with_path("Auto-onderdelen > BMW > Specifieke onderdelen > Filters"),
        )
        .unwrap();

    assert_eq!(resolution.category_id(), Some(3));
    assert!(resolution.is_fallback());
    assert_eq!(resolution.schema, SchemaStatus::NotApplicable { depth: 1 });
}

#[test]
fn test_taxonomy_file_document() {
    let document = parse_taxonomy_file(TAXONOMY_FILE, "nl_NL").unwrap();
    let engine = Engine::from_document(document, EngineConfig::default()).unwrap();

    let request = ResolutionRequest::new()
        .with_path("Watersport en Boten > Kitesurfen")
        .with_attributes(raw(json!({
            "Conditie": "Nieuw",
            "Merk": "Flysurfer",
            "Kleur": "Rood",
            "Oppervlakte": "12",
            "Vliegtijd": "3 uur"
        })))
        .with_estimate(350)
        .with_range(400, 300);
    let resolution = engine.resolve(&request).unwrap();

    assert_eq!(resolution.category_id(), Some(41));
    assert_eq!(
        resolution.attributes,
        vec![
            MappedAttribute::new("conditie", "Nieuw"),
            MappedAttribute::new("merk", "Flysurfer"),
            MappedAttribute::new("kleur", "Rood"),
            MappedAttribute::new("oppervlakte", "12"),
        ]
    );
    assert_eq!(resolution.report.dropped.len(), 1);
    assert_eq!(resolution.report.dropped[0].name, "Vliegtijd");
    assert_eq!(resolution.pricing.sanitized_range, Some(PriceRange::new(300, 400)));
    assert!(resolution.is_publishable());

    let leaves: Vec<LeafCategory> = engine.leaf_categories();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[0].display_name, "Watersport en Boten → Kitesurfen");
}

#[test]
fn test_api_payloads() {
    let roots = parse_api_categories(API_CATEGORIES, "nl-NL").unwrap();
    let schema = parse_api_fields(API_FIELDS, "nl-NL").unwrap();
    let engine = Engine::builder(FlatTaxonomy::from_roots(&roots))
        .with_schema_source(StaticSchemaSource::new().with_schema(SchemaAddress::new(1, 11), schema))
        .build()
        .unwrap();

    let request = ResolutionRequest::new()
        .with_candidate(11)
        .with_attributes(vec![
            AiAttribute::new("Conditie", "Nieuw"),
            AiAttribute::new("Merk", "BMW"),
        ])
        .with_estimate(50);
    let resolution = engine.resolve(&request).unwrap();

    assert_eq!(resolution.category_id(), Some(11));
    assert_eq!(
        resolution.attributes,
        vec![
            MappedAttribute::new("condition", "new"),
            MappedAttribute::new("brand", "BMW"),
        ]
    );
    assert!(resolution.missing_required.is_empty());
    assert_eq!(resolution.pricing.model.kind, PricingKind::Fixed);
    assert!(resolution.is_publishable());
}

#[test]
fn test_batch_over_shared_engine() {
    let document = parse_taxonomy_file(TAXONOMY_FILE, "nl-NL").unwrap();
    let engine = Engine::from_document(document, EngineConfig::default()).unwrap();

    let complete = ResolutionRequest::new()
        .with_candidate(41)
        .with_attributes(raw(json!({"Conditie": "Beschadigd", "Merk": "North"})))
        .with_estimate(120);
    let incomplete = ResolutionRequest::new().with_candidate(41).with_estimate(120);
    let unmatched = ResolutionRequest::new().with_path("Huisdieren");

    let requests: Vec<ResolutionRequest> = (0..20)
        .map(|i| match i % 3 {
            0 => complete.clone(),
            1 => incomplete.clone(),
            _ => unmatched.clone(),
        })
        .collect();
    let results = engine.resolve_batch(&requests);

    assert_eq!(results.len(), requests.len());
    for (i, result) in results.iter().enumerate() {
        let resolution = result.as_ref().unwrap();
        match i % 3 {
            0 => assert!(resolution.is_publishable()),
            1 => assert_eq!(
                resolution.blockers(),
                vec![Blocker::MissingRequired {
                    keys: vec!["conditie".to_string(), "merk".to_string()]
                }]
            ),
            _ => assert_eq!(resolution.blockers(), vec![Blocker::NoCategory, Blocker::MissingPrice]),
        }
    }
}

#[test]
fn test_unknown_fallback_is_rejected() {
    let result = Engine::builder(FlatTaxonomy::from_roots(&bmw_taxonomy()))
        .with_config(EngineConfig::default().with_default_category(12))
        .build();

    assert!(matches!(result, Err(CatmatchError::Config(_))));
}
