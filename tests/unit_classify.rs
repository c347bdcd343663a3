// Unit tests for category classification.
//
// Tests the ordered-table contract: first match in definition order
// wins, results stay inside the category universe, and the NEP
// second stage is an exact lookup of the method category.

use lectern::classify::{classify, nep_class, CategoryMap, MappingSet, TagMap, OTHER};
use lectern::error::AnalysisError;

// ============================================================
// classify — ordered substring scan
// ============================================================

#[test]
fn first_keyword_in_order_wins_over_later_keywords() {
    let map = CategoryMap::new(vec![("lecture", "Lecture"), ("quiz", "Quiz")]).unwrap();
    assert_eq!(classify("Interactive Lecture Quiz", &map), "Lecture");
}

#[test]
fn reordering_the_table_changes_the_winner() {
    let map = CategoryMap::new(vec![("quiz", "Quiz"), ("lecture", "Lecture")]).unwrap();
    assert_eq!(classify("Interactive Lecture Quiz", &map), "Quiz");
}

#[test]
fn prefix_agreement_gives_same_result() {
    // If the first matching keyword is the same in both orders, the
    // result is the same regardless of what follows it.
    let m1 = CategoryMap::new(vec![("case method", "Case Law"), ("quiz", "Quiz")]).unwrap();
    let m2 = CategoryMap::new(vec![
        ("case method", "Case Law"),
        ("lecture", "Lecture"),
        ("quiz", "Quiz"),
    ])
    .unwrap();
    let text = "case method with a closing quiz";
    assert_eq!(classify(text, &m1), classify(text, &m2));
}

#[test]
fn no_keyword_matches_returns_other() {
    let maps = MappingSet::builtin();
    assert_eq!(classify("moot court", &maps.methods), OTHER);
    assert_eq!(classify("", &maps.methods), OTHER);
}

#[test]
fn classification_is_case_and_whitespace_insensitive() {
    let maps = MappingSet::builtin();
    assert_eq!(classify("  GROUP DISCUSSION  ", &maps.methods), "Participative");
}

#[test]
fn keyword_matches_anywhere_in_text() {
    let maps = MappingSet::builtin();
    assert_eq!(
        classify("started with a short quiz on torts", &maps.methods),
        "Quiz"
    );
}

#[test]
fn result_is_always_in_mapping_values_or_other() {
    let maps = MappingSet::builtin();
    let mut universe: Vec<String> = maps
        .methods
        .categories()
        .iter()
        .map(|c| c.to_string())
        .collect();
    universe.push(OTHER.to_string());

    for text in [
        "lecture",
        "field based learning",
        "flipped + peer learning",
        "garbage input ~~~",
        "",
        "problem solving session",
    ] {
        let category = classify(text, &maps.methods);
        assert!(universe.contains(&category), "unexpected category {category}");
    }
}

#[test]
fn builtin_tool_table_classifies_ict_variants() {
    let maps = MappingSet::builtin();
    for text in ["ppt", "interactive board", "lms portal", "audio clip", "tv"] {
        assert_eq!(classify(text, &maps.tools), "ICT", "for {text}");
    }
    assert_eq!(classify("zoom session", &maps.tools), "Online");
    assert_eq!(classify("board & pen", &maps.tools), "Board & Pen");
}

// ============================================================
// nep_class — exact second-stage lookup
// ============================================================

#[test]
fn nep_tags_follow_method_categories() {
    let maps = MappingSet::builtin();
    let cases = [
        ("Experiential", "Student-Centric"),
        ("Participative", "Student-Centric"),
        ("Peer", "Student-Centric"),
        ("Flipped", "Blended"),
        ("Lecture", "Traditional"),
        ("Problem Solving", "Skill-Based"),
        ("Project Based", "Project-Based"),
        ("Case Law", "Legal-Oriented"),
        ("Quiz", "Interactive"),
        ("Industry", "Experiential"),
    ];
    for (category, tag) in cases {
        assert_eq!(nep_class(category, &maps.nep_tags), tag);
    }
}

#[test]
fn unknown_category_tags_as_other() {
    let maps = MappingSet::builtin();
    assert_eq!(nep_class("Other", &maps.nep_tags), OTHER);
    assert_eq!(nep_class("Moot Court", &maps.nep_tags), OTHER);
}

#[test]
fn nep_lookup_is_not_substring_based() {
    let tags = TagMap::new(vec![("Lecture", "Traditional")]).unwrap();
    assert_eq!(nep_class("Lecture Series", &tags), OTHER);
}

// ============================================================
// Table construction — config errors
// ============================================================

#[test]
fn empty_mapping_table_is_rejected() {
    let err = CategoryMap::new(Vec::<(&str, &str)>::new()).unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));

    let err = TagMap::new(Vec::<(&str, &str)>::new()).unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
}

#[test]
fn blank_keywords_are_dropped_from_tables() {
    let map = CategoryMap::new(vec![("  ", "Ghost"), ("quiz", "Quiz")]).unwrap();
    assert_eq!(map.entries().len(), 1);
    assert_eq!(classify("pop quiz", &map), "Quiz");
}
