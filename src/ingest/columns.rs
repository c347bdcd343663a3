// Column-name handling for spreadsheet exports.
//
// Headers arrive in whatever shape the spreadsheet author left them
// ("Teaching Method Used", trailing spaces, etc). They are normalized
// to snake_case and then passed through the legacy renames the
// institution's exports need. Missing required columns are an explicit
// InvalidInput, not a silent skip.

use crate::error::{AnalysisError, Result};
use crate::normalize::norm_header;

/// The attendance export names its topic column inconsistently across
/// template revisions. Checked in order; first present wins.
pub const TOPIC_ALIASES: [&str; 3] = ["topic_covered", "topics_taught", "unnamed:_3"];

/// Normalize raw headers and apply the legacy renames:
/// `course_` -> `course_code`, `course` -> `course_group`,
/// `course_subtopic` -> `subtopic`.
pub fn normalize_columns<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    headers
        .into_iter()
        .map(|h| {
            let h = norm_header(h.as_ref());
            match h.as_str() {
                "course_" => "course_code".to_string(),
                "course" => "course_group".to_string(),
                "course_subtopic" => "subtopic".to_string(),
                _ => h,
            }
        })
        .collect()
}

/// Index of a column, if present.
pub fn find(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|c| c == name)
}

/// Index of a required column, or InvalidInput naming what is missing.
pub fn require(columns: &[String], name: &str, table: &str) -> Result<usize> {
    find(columns, name).ok_or_else(|| {
        AnalysisError::InvalidInput(format!(
            "{table} table is missing required column '{name}' (found: {})",
            columns.join(", ")
        ))
    })
}

/// Resolve the topic column through its aliases, or InvalidInput when
/// none of them is present.
pub fn require_topic_column(columns: &[String]) -> Result<usize> {
    TOPIC_ALIASES
        .iter()
        .find_map(|alias| find(columns, alias))
        .ok_or_else(|| {
            AnalysisError::InvalidInput(format!(
                "attendance table has no topic column (looked for {})",
                TOPIC_ALIASES.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_and_rename() {
        let cols = normalize_columns(["Faculty Name", " Course ", "Course Subtopic", "Course_"]);
        assert_eq!(cols, ["faculty_name", "course_group", "subtopic", "course_code"]);
    }

    #[test]
    fn test_topic_alias_resolution_order() {
        let cols = normalize_columns(["Topics Taught", "Topic Covered"]);
        // topic_covered is the preferred alias even when listed later.
        assert_eq!(require_topic_column(&cols).unwrap(), 1);
    }

    #[test]
    fn test_missing_topic_column_is_invalid_input() {
        let cols = normalize_columns(["Faculty Name", "Semester"]);
        let err = require_topic_column(&cols).unwrap_err();
        assert!(matches!(err, crate::error::AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_require_names_the_missing_column() {
        let cols = normalize_columns(["Faculty Name"]);
        let err = require(&cols, "semester", "attendance").unwrap_err();
        assert!(err.to_string().contains("semester"));
    }
}
