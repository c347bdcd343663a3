// Keyword-containment classification.
//
// The classifier scans the ordered table and returns the category of
// the first keyword that occurs anywhere in the text. First match in
// definition order wins, not longest match or best match. The table
// order is therefore part of the behavior: authoring "case method"
// before "case" is how a table disambiguates overlapping keywords.

use super::mapping::{CategoryMap, TagMap};
use crate::normalize::norm_text;

/// Sentinel category for text no keyword matched.
pub const OTHER: &str = "Other";

/// Map free text to a category via ordered substring scan.
/// Total over any input: unmatched text classifies as "Other".
pub fn classify(text: &str, mapping: &CategoryMap) -> String {
    let text = norm_text(text);
    for (keyword, category) in mapping.entries() {
        if text.contains(keyword.as_str()) {
            return category.clone();
        }
    }
    OTHER.to_string()
}

/// Second-stage classification: exact lookup of an already-computed
/// method category in the category -> NEP tag table. Categories with
/// no entry (including "Other" itself) tag as "Other".
pub fn nep_class(method_category: &str, tags: &TagMap) -> String {
    tags.get(method_category)
        .unwrap_or(OTHER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::mapping::MappingSet;

    #[test]
    fn test_first_match_in_order_wins() {
        let map = CategoryMap::new(vec![("lecture", "Lecture"), ("quiz", "Quiz")]).unwrap();
        // Both keywords occur; the earlier table entry wins.
        assert_eq!(classify("Interactive Lecture Quiz", &map), "Lecture");
    }

    #[test]
    fn test_order_is_behavior() {
        let map = CategoryMap::new(vec![("quiz", "Quiz"), ("lecture", "Lecture")]).unwrap();
        assert_eq!(classify("Interactive Lecture Quiz", &map), "Quiz");
    }

    #[test]
    fn test_unmatched_text_is_other() {
        let maps = MappingSet::builtin();
        assert_eq!(classify("interpretive dance", &maps.methods), OTHER);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let maps = MappingSet::builtin();
        assert_eq!(classify("  FIELD BASED visit ", &maps.methods), "Experiential");
        assert_eq!(classify("PPT + handouts", &maps.tools), "ICT");
    }

    #[test]
    fn test_result_always_in_category_universe() {
        let maps = MappingSet::builtin();
        let mut universe: Vec<String> =
            maps.methods.categories().iter().map(|c| c.to_string()).collect();
        universe.push(OTHER.to_string());
        for text in ["case method", "socratic seminar", "", "quiz night", "zzz"] {
            assert!(universe.contains(&classify(text, &maps.methods)));
        }
    }

    #[test]
    fn test_nep_second_stage_exact_lookup() {
        let maps = MappingSet::builtin();
        assert_eq!(nep_class("Lecture", &maps.nep_tags), "Traditional");
        assert_eq!(nep_class("Flipped", &maps.nep_tags), "Blended");
        // Exact lookup, not substring: a raw method text is not a category.
        assert_eq!(nep_class("lecture", &maps.nep_tags), OTHER);
        assert_eq!(nep_class(OTHER, &maps.nep_tags), OTHER);
    }
}
