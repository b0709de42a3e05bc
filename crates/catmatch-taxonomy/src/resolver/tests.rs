//! Tests for category resolution.

use super::*;
use crate::flatten::FlatTaxonomy;
use catmatch_test::{automotive_taxonomy, bmw_taxonomy};

fn automotive() -> FlatTaxonomy {
    FlatTaxonomy::from_roots(&automotive_taxonomy())
}

fn matcher() -> Matcher {
    Matcher::new(0.6)
}

#[test]
fn test_exact_path() {
    let hit = resolve_category("Auto-onderdelen > BMW-onderdelen", &automotive(), &matcher()).unwrap();
    assert_eq!(hit.category.id, 11);
    assert_eq!(hit.score, 1.0);
    assert_eq!(hit.strategy, MatchStrategy::ExactPath);
}

#[test]
fn test_exact_path_ignores_surrounding_whitespace() {
    let hit = resolve_category("  Auto's > Bedrijfswagens ", &automotive(), &matcher()).unwrap();
    assert_eq!(hit.category.id, 22);
    assert_eq!(hit.strategy, MatchStrategy::ExactPath);
}

#[test]
fn test_over_specified_path_is_simplified() {
    let taxonomy = FlatTaxonomy::from_roots(&bmw_taxonomy());
    let hit = resolve_category(
        "Auto-onderdelen > BMW > Specifieke onderdelen > Filters",
        &taxonomy,
        &matcher(),
    )
    .unwrap();

    assert_eq!(hit.category.id, 11);
    assert_eq!(hit.strategy, MatchStrategy::FuzzyPath);
    // 2 * 20 / 57
    assert!((hit.score - 40.0 / 57.0).abs() < 1e-9);
}

#[test]
fn test_long_path_matches_like_its_simplified_form() {
    let taxonomy = automotive();
    for long in [
        "Auto-onderdelen > BMW > Specifieke onderdelen > Filters",
        "Fietsen en Brommers > Racefietsen > Kinderfietsen",
        "Fietsen en Brommers > Elektrische fietsen > Fietsen",
    ] {
        let short = simplify_path(long);
        assert_eq!(
            resolve_category(long, &taxonomy, &matcher()),
            resolve_category(&short, &taxonomy, &matcher()),
            "{long}"
        );
    }
}

#[test]
fn test_simplified_form_can_hit_exactly() {
    let hit = resolve_category(
        "Fietsen en Brommers > Elektrische fietsen > Fietsen",
        &automotive(),
        &matcher(),
    )
    .unwrap();
    assert_eq!(hit.category.id, 31);
    assert_eq!(hit.strategy, MatchStrategy::ExactPath);
}

#[test]
fn test_deep_exact_path_is_not_simplified() {
    let taxonomy = FlatTaxonomy::from_roots(&catmatch_test::sports_taxonomy());
    let hit = resolve_category("Watersport en Boten > Zeilen > Zeilboten", &taxonomy, &matcher()).unwrap();
    assert_eq!(hit.category.id, 421);
    assert_eq!(hit.strategy, MatchStrategy::ExactPath);
}

#[test]
fn test_same_depth_candidates_scanned_first() {
    // "Auto-onderdelen" alone scores 0.75, above every depth-2 path, but a
    // two-segment query prefers a two-segment category that clears the cutoff.
    let hit = resolve_category("Auto-onderdelen > Filters", &automotive(), &matcher()).unwrap();
    assert_eq!(hit.category.depth, 2);
    assert_eq!(hit.category.id, 12);
}

#[test]
fn test_same_depth_tier_keeps_over_specified_path_off_its_root() {
    let query = "Auto-onderdelen > BMW > Specifieke onderdelen > Filters";
    for taxonomy in [automotive(), FlatTaxonomy::from_roots(&bmw_taxonomy())] {
        let root_score = matcher().score("Auto-onderdelen", &simplify_path(query));
        let hit = resolve_category(query, &taxonomy, &matcher()).unwrap();

        assert_eq!(hit.category.depth, 2);
        assert_eq!(hit.category.segments()[0], "Auto-onderdelen");
        assert!(hit.score < root_score);
    }
}

#[test]
fn test_fuzzy_typo_tolerance() {
    let taxonomy = automotive();
    let cases = [
        ("Fietsen en Brommer", 3),
        ("Auto > Bedrijfswagen", 22),
        ("Autos > Personenautos", 21),
        ("Fietsen > Racefietsen", 31),
    ];
    for (query, expected) in cases {
        let hit = resolve_category(query, &taxonomy, &matcher()).unwrap();
        assert_eq!(hit.category.id, expected, "{query}");
        assert!(hit.score >= 0.6);
    }
}

#[test]
fn test_not_found_is_none() {
    let taxonomy = automotive();
    assert!(resolve_category("Elektronica > Laptops", &taxonomy, &matcher()).is_none());
    assert!(resolve_category("Fietsen", &taxonomy, &matcher()).is_none());
    assert!(resolve_category("", &taxonomy, &matcher()).is_none());
    assert!(resolve_category("   ", &taxonomy, &matcher()).is_none());
    assert!(resolve_category("Fietsen", &[], &matcher()).is_none());
}

#[test]
fn test_cutoff_is_respected() {
    let taxonomy = automotive();
    assert!(resolve_category("Fietsen > Racefietsen", &taxonomy, &Matcher::new(0.7)).is_none());
    assert!(resolve_category("Fietsen > Racefietsen", &taxonomy, &Matcher::new(0.6)).is_some());
}

#[test]
fn test_ties_go_to_first_in_order() {
    let taxonomy = vec![
        FlatCategory::new(100, "Sport > Ballen", 2),
        FlatCategory::new(101, "Sport > Ballen", 2),
    ];
    let hit = resolve_category("Sport > Balen", &taxonomy, &matcher()).unwrap();
    assert_eq!(hit.category.id, 100);
}

#[test]
fn test_simplify_path() {
    assert_eq!(simplify_path("A > B > C > D"), "A > D");
    assert_eq!(simplify_path("A > B"), "A > B");
    assert_eq!(simplify_path(" A>B "), "A > B");
    assert_eq!(simplify_path("A"), "A");
    assert_eq!(simplify_path(""), "");
}

#[test]
fn test_candidate_id() {
    let taxonomy = automotive();
    let hit = resolve_candidate_id(31, &taxonomy).unwrap();
    assert_eq!(hit.category.path, "Fietsen en Brommers > Fietsen");
    assert_eq!(hit.strategy, MatchStrategy::CandidateId);
    assert!(resolve_candidate_id(999, &taxonomy).is_none());
}

#[test]
fn test_strategies_compose_in_order() {
    let taxonomy = automotive();
    let vector_first = FirstMatch::new().then(ById).then(FuzzyPath::new(matcher()));
    let text_first = FirstMatch::new().then(FuzzyPath::new(matcher())).then(ById);

    let query = CategoryQuery::path("Fietsen en Brommers > Fietsen").with_candidate(32);
    assert_eq!(vector_first.resolve(&query, &taxonomy).unwrap().category.id, 32);
    assert_eq!(text_first.resolve(&query, &taxonomy).unwrap().category.id, 31);
}

#[test]
fn test_unknown_candidate_falls_back_to_path() {
    let strategy = FirstMatch::new().then(ById).then(FuzzyPath::new(matcher()));
    let query = CategoryQuery::candidate(999).with_path("Auto > Bedrijfswagen");

    let hit = strategy.resolve(&query, &automotive()).unwrap();
    assert_eq!(hit.category.id, 22);
    assert_eq!(hit.strategy, MatchStrategy::FuzzyPath);
}

#[test]
fn test_empty_query_and_empty_chain() {
    let taxonomy = automotive();
    let strategy = FirstMatch::new().then(ById).then(FuzzyPath::new(matcher()));
    assert!(strategy.resolve(&CategoryQuery::default(), &taxonomy).is_none());

    let empty = FirstMatch::new();
    assert!(empty.is_empty());
    assert!(empty.resolve(&CategoryQuery::candidate(11), &taxonomy).is_none());
}

#[test]
fn test_strategy_names() {
    let chain = FirstMatch::new().then(ById).then(FuzzyPath::new(matcher()));
    assert_eq!(chain.len(), 2);
    assert_eq!(format!("{chain:?}"), r#"["by_id", "fuzzy_path"]"#);
    assert_eq!(MatchStrategy::CandidateId.to_string(), "candidate_id");
}
