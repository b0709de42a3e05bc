//! Tests for payload decoding.

use super::*;
use crate::schema::{SchemaAddress, SchemaSource};
use catmatch_core::{AttributeType, EnumOption, NumericRange};
use catmatch_test::payloads::{API_CATEGORIES, API_FIELDS, TAXONOMY_FILE};

#[test]
fn test_api_categories_embedded() {
    let roots = parse_api_categories(API_CATEGORIES, "nl-NL").unwrap();

    assert_eq!(roots.len(), 2);
    // Localized label wins over name.
    assert_eq!(roots[0].name, "Auto-onderdelen");
    assert_eq!(roots[0].children[0].name, "BMW-onderdelen");
    assert_eq!(roots[0].children[1].name, "Audi-onderdelen");
    assert_eq!(roots[1].id, 3);
    assert!(roots[1].children.is_empty());
}

#[test]
fn test_api_categories_other_locale() {
    let roots = parse_api_categories(API_CATEGORIES, "en_GB").unwrap();
    assert_eq!(roots[0].name, "Car parts");
    // No English label: name.
    assert_eq!(roots[0].children[1].name, "Audi");
}

#[test]
fn test_api_categories_plain_list() {
    let json = r#"[{"categoryId": 5, "name": "Antiek en Kunst"}]"#;
    let roots = parse_api_categories(json, "nl-NL").unwrap();
    assert_eq!(roots, vec![CategoryNode::new(5, "Antiek en Kunst")]);
}

#[test]
fn test_api_category_without_name() {
    let json = r#"[{"categoryId": 5}]"#;
    let err = parse_api_categories(json, "nl-NL").unwrap_err();
    assert!(matches!(err, PayloadError::Invalid(msg) if msg.contains('5')));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        parse_api_categories("{not json", "nl-NL"),
        Err(PayloadError::Json(_))
    ));
    let err: CatmatchError = parse_taxonomy_file("[", "nl-NL").unwrap_err().into();
    assert!(matches!(err, CatmatchError::Payload(_)));
}

#[test]
fn test_taxonomy_file_tree() {
    let document = parse_taxonomy_file(TAXONOMY_FILE, "nl-NL").unwrap();

    // The synthetic root is not a category.
    assert_eq!(document.roots.len(), 1);
    assert_eq!(document.roots[0].id, 4);
    assert_eq!(document.roots[0].name, "Watersport en Boten");

    let taxonomy = document.taxonomy();
    let paths: Vec<&str> = taxonomy.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Watersport en Boten",
            "Watersport en Boten > Kitesurfen",
            "Watersport en Boten > Zeilen",
        ]
    );
}

#[test]
fn test_taxonomy_file_schemas() {
    let document = parse_taxonomy_file(TAXONOMY_FILE, "nl-NL").unwrap();
    assert_eq!(document.schemas.len(), 1);

    let schema = document.schemas.fetch(SchemaAddress::new(4, 41)).unwrap();
    let keys: Vec<&str> = schema.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, vec!["conditie", "merk", "kleur", "oppervlakte"]);

    let conditie = &schema[0];
    assert_eq!(conditie.attribute_type, AttributeType::Enum);
    assert!(conditie.required);
    assert_eq!(conditie.enum_options[1], EnumOption::new("Zo goed als nieuw", "Zo goed als nieuw"));

    // First definition of a repeated key wins.
    assert_eq!(schema[1].label, "Merk");
    assert!(schema[1].required);

    // STRING with predefined values is an ENUM.
    assert_eq!(schema[2].attribute_type, AttributeType::Enum);
    assert_eq!(schema[2].enum_options.len(), 2);

    assert_eq!(schema[3].attribute_type, AttributeType::Number);
    assert_eq!(schema[3].numeric_range, Some(NumericRange { min: 1.0, max: 25.0 }));

    assert!(document.schemas.fetch(SchemaAddress::new(4, 42)).unwrap().is_empty());
}

#[test]
fn test_api_fields() {
    let schema = parse_api_fields(API_FIELDS, "nl-NL").unwrap();
    assert_eq!(schema.len(), 3);

    let condition = &schema[0];
    assert_eq!(condition.label, "Conditie");
    assert_eq!(condition.attribute_type, AttributeType::Enum);
    assert!(condition.required);
    // The option without key or value is skipped.
    assert_eq!(
        condition.enum_options,
        vec![EnumOption::new("new", "Nieuw"), EnumOption::new("used", "Gebruikt")]
    );

    assert_eq!(schema[1].label, "Merk");
    assert_eq!(schema[1].attribute_type, AttributeType::String);

    assert_eq!(schema[2].label, "Kilometerstand");
    assert_eq!(schema[2].attribute_type, AttributeType::Number);
    assert_eq!(
        schema[2].numeric_range,
        Some(NumericRange { min: 0.0, max: 999_999.0 })
    );
}

#[test]
fn test_api_fields_shapes() {
    let list = r#"[{"key": "merk", "label": "Merk"}, {"key": "", "label": "Leeg"}, {"key": "merk", "label": "Merk 2"}]"#;
    let schema = parse_api_fields(list, "nl-NL").unwrap();
    assert_eq!(schema.len(), 1);
    assert_eq!(schema[0].label, "Merk");

    let embedded = r#"{"_embedded": {"mp:attribute": [{"key": "kleur", "labels": {"nl_NL": "Kleur"}}]}}"#;
    let schema = parse_api_fields(embedded, "nl-NL").unwrap();
    assert_eq!(schema[0].display_label(), "Kleur");

    let unlabeled = r#"[{"key": "bouwjaar"}]"#;
    let schema = parse_api_fields(unlabeled, "nl-NL").unwrap();
    assert_eq!(schema[0].display_label(), "bouwjaar");
}

#[test]
fn test_reversed_range_is_ordered() {
    let json = r#"[{"key": "lengte", "type": "NUMBER", "range": [12, 3]}]"#;
    let schema = parse_api_fields(json, "nl-NL").unwrap();
    assert_eq!(schema[0].numeric_range, Some(NumericRange { min: 3.0, max: 12.0 }));
}
