// Text normalization — the canonical form every other stage assumes.
//
// All free-text fields are lowercased and whitespace-trimmed exactly
// once, at ingestion. Normalizing an already-normalized value is a
// no-op, so downstream stages may re-normalize defensively without
// changing results.

/// Canonical form of a free-text field: lowercased and trimmed.
pub fn norm_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonical form of an optional field; absent maps to the given default.
pub fn norm_or<'a>(value: Option<&str>, default: &'a str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => norm_text(v),
        _ => default.to_string(),
    }
}

/// Yes/no flag fields: absent or blank means "no".
/// Returns true only for a normalized "yes".
pub fn norm_flag(value: Option<&str>) -> bool {
    norm_or(value, "no") == "yes"
}

/// Tolerant numeric coercion: values that do not parse as a number
/// become None rather than an error, matching the spreadsheet-export
/// reality of stray text in numeric columns.
pub fn coerce_numeric(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Canonical form of a column header: trimmed, lowercased, internal
/// spaces replaced with underscores ("Course Subtopic" -> "course_subtopic").
pub fn norm_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_text_lowercases_and_trims() {
        assert_eq!(norm_text("  Case Method  "), "case method");
    }

    #[test]
    fn test_norm_text_idempotent() {
        let once = norm_text("  Flipped Classroom ");
        assert_eq!(norm_text(&once), once);
    }

    #[test]
    fn test_norm_or_default_on_absent_or_blank() {
        assert_eq!(norm_or(None, "no"), "no");
        assert_eq!(norm_or(Some("   "), "no"), "no");
        assert_eq!(norm_or(Some(" Yes "), "no"), "yes");
    }

    #[test]
    fn test_norm_flag() {
        assert!(norm_flag(Some("Yes")));
        assert!(!norm_flag(Some("No")));
        assert!(!norm_flag(None));
        assert!(!norm_flag(Some("")));
    }

    #[test]
    fn test_coerce_numeric_tolerant() {
        assert_eq!(coerce_numeric(Some("4")), Some(4.0));
        assert_eq!(coerce_numeric(Some(" 2.5 ")), Some(2.5));
        assert_eq!(coerce_numeric(Some("N/A")), None);
        assert_eq!(coerce_numeric(None), None);
    }

    #[test]
    fn test_norm_header() {
        assert_eq!(norm_header("  Teaching Method Used "), "teaching_method_used");
        assert_eq!(norm_header("Course Subtopic"), "course_subtopic");
    }
}
