//! Raw JSON payloads in the marketplace's formats.

/// Categories API response with embedded children and localized labels.
pub const API_CATEGORIES: &str = r#"{
  "_embedded": {
    "mp:category": [
      {
        "categoryId": 1,
        "name": "Auto onderdelen",
        "labels": { "nl-NL": "Auto-onderdelen", "en-GB": "Car parts" },
        "_embedded": {
          "mp:category": [
            { "categoryId": 11, "name": "BMW-onderdelen" },
            { "categoryId": 12, "name": "Audi", "labels": { "nl-NL": "Audi-onderdelen" } }
          ]
        }
      },
      { "categoryId": 3, "name": "Fietsen en Brommers" }
    ]
  }
}"#;

/// Taxonomy file with one attribute-bearing category.
///
/// Category 41 declares two attribute groups; its `merk` key appears in both
/// and an entry without a key is present.
pub const TAXONOMY_FILE: &str = r#"{
  "id": 0,
  "label": { "nl_NL": "Alle categorieën" },
  "children": [
    {
      "id": 4,
      "label": { "nl_NL": "Watersport en Boten" },
      "children": [
        {
          "id": 41,
          "label": { "nl_NL": "Kitesurfen", "en_GB": "Kitesurfing" },
          "attributeGroups": [
            {
              "label": { "nl_NL": "Algemeen" },
              "attributes": [
                {
                  "key": "conditie",
                  "label": { "nl_NL": "Conditie" },
                  "type": "LIST",
                  "mandatory": true,
                  "values": { "nl_NL": ["Nieuw", "Zo goed als nieuw", "Beschadigd"] }
                },
                { "key": "merk", "label": { "nl_NL": "Merk" }, "type": "STRING", "mandatory": true },
                {
                  "key": "kleur",
                  "label": { "nl_NL": "Kleur" },
                  "type": "STRING",
                  "values": { "nl_NL": ["Rood", "Blauw"] }
                }
              ]
            },
            {
              "label": { "nl_NL": "Specificaties" },
              "attributes": [
                {
                  "key": "oppervlakte",
                  "label": { "nl_NL": "Oppervlakte" },
                  "type": "NUMBER",
                  "range": { "min": 1, "max": 25 }
                },
                { "key": "merk", "label": { "nl_NL": "Merknaam" }, "type": "STRING" },
                { "key": "", "label": { "nl_NL": "Zonder sleutel" } }
              ]
            }
          ],
          "children": []
        },
        { "id": 42, "label": { "nl_NL": "Zeilen" } }
      ]
    }
  ]
}"#;

/// Attributes API response.
pub const API_FIELDS: &str = r#"{
  "fields": [
    {
      "key": "condition",
      "labels": { "nl-NL": "Conditie" },
      "type": "STRING",
      "mandatory": true,
      "options": [
        { "key": "new", "labels": { "nl-NL": "Nieuw" } },
        { "value": "used", "label": "Gebruikt" },
        { "label": "Zonder waarde" }
      ]
    },
    { "key": "brand", "label": "Merk" },
    { "key": "mileage", "name": "Kilometerstand", "type": "NUMBER", "range": [0, 999999] }
  ]
}"#;
