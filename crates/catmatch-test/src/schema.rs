//! Attribute schema fixtures.

use catmatch_core::{AttributeSpec, EnumOption};

/// Schema of the kitesurfing category.
///
/// | key | label | type | required |
/// |---|---|---|---|
/// | `conditie` | Conditie | ENUM (nieuw, zo-goed-als-nieuw, beschadigd) | yes |
/// | `merk` | Merk | STRING | yes |
/// | `kleur` | Kleur | STRING | no |
/// | `oppervlakte` | Oppervlakte | NUMBER 1..25 | no |
pub fn kitesurf_schema() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::enumeration(
            "conditie",
            "Conditie",
            vec![
                EnumOption::new("nieuw", "Nieuw"),
                EnumOption::new("zo-goed-als-nieuw", "Zo goed als nieuw"),
                EnumOption::new("beschadigd", "Beschadigd"),
            ],
        )
        .required(),
        AttributeSpec::string("merk", "Merk").required(),
        AttributeSpec::string("kleur", "Kleur"),
        AttributeSpec::number("oppervlakte", "Oppervlakte").with_range(1.0, 25.0),
    ]
}

/// STRING schema with one optional attribute per `(key, label)` pair.
pub fn labelled_schema(fields: &[(&str, &str)]) -> Vec<AttributeSpec> {
    fields
        .iter()
        .map(|(key, label)| AttributeSpec::string(*key, *label))
        .collect()
}
