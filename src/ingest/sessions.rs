// Attendance/teaching-log ingestion.
//
// One SessionRecord per row of the attendance export. All text fields
// come out lowercase and trimmed; credits/marks are coerced tolerantly
// (unparseable -> None); the remedial flag defaults to "no".

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::ingest::columns;
use crate::normalize::{coerce_numeric, norm_flag, norm_text};

/// One class session from the attendance export, normalized.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub faculty_name: String,
    pub semester: String,
    pub course_group: String,
    pub course_code: String,
    pub subtopic: String,
    /// Raw (but normalized) teaching-method text, e.g. "case method + quiz".
    pub teaching_method: String,
    /// Raw (but normalized) teaching-tool text, e.g. "ppt & board".
    pub teaching_tool: String,
    /// Raw (but normalized) topic-covered text, fuzzy-matched later.
    pub topic_covered: String,
    pub remedial: bool,
    pub credits: Option<f64>,
    pub marks: Option<f64>,
}

/// Read session records from any CSV source.
///
/// Header requirements: faculty_name, semester, course_group (or the
/// legacy "course"), teaching_method_used, teaching_tool_used, and a
/// topic column (see columns::TOPIC_ALIASES). course_code, subtopic,
/// remedial_class, credits and marks are optional.
pub fn read_sessions<R: Read>(reader: R) -> Result<Vec<SessionRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let cols = columns::normalize_columns(rdr.headers()?.iter());
    let faculty = columns::require(&cols, "faculty_name", "attendance")?;
    let semester = columns::require(&cols, "semester", "attendance")?;
    let course_group = columns::require(&cols, "course_group", "attendance")?;
    let method = columns::require(&cols, "teaching_method_used", "attendance")?;
    let tool = columns::require(&cols, "teaching_tool_used", "attendance")?;
    let topic = columns::require_topic_column(&cols)?;

    let course_code = columns::find(&cols, "course_code");
    let subtopic = columns::find(&cols, "subtopic");
    let remedial = columns::find(&cols, "remedial_class");
    let credits = columns::find(&cols, "credits");
    let marks = columns::find(&cols, "marks");

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let get = |idx: usize| row.get(idx).unwrap_or("");
        let get_opt = |idx: Option<usize>| idx.map(&get);

        records.push(SessionRecord {
            faculty_name: norm_text(get(faculty)),
            semester: norm_text(get(semester)),
            course_group: norm_text(get(course_group)),
            course_code: norm_text(get_opt(course_code).unwrap_or("")),
            subtopic: norm_text(get_opt(subtopic).unwrap_or("")),
            teaching_method: norm_text(get(method)),
            teaching_tool: norm_text(get(tool)),
            topic_covered: norm_text(get(topic)),
            remedial: norm_flag(get_opt(remedial)),
            credits: coerce_numeric(get_opt(credits)),
            marks: coerce_numeric(get_opt(marks)),
        });
    }

    Ok(records)
}

/// Read session records from a CSV file on disk.
pub fn load_sessions(path: &Path) -> Result<Vec<SessionRecord>> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records = read_sessions(file)?;
    info!(
        path = %path.display(),
        rows = records.len(),
        "Loaded attendance export"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Faculty Name,Semester,Course,Course_,Course Subtopic,Teaching Method Used,Teaching Tool Used,Topic Covered,Remedial Class,Credits,Marks
Dr. Rao,1,BALLB,LAW101,Contracts,Case Method,PPT,Contract Law Basics,No,4,80
 Dr. Iyer ,2,PG,LAW501,Torts, Lecture ,Board & Pen,Tort Law,Yes,not-a-number,
";

    #[test]
    fn test_reads_and_normalizes_rows() {
        let records = read_sessions(CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.faculty_name, "dr. rao");
        assert_eq!(first.course_group, "ballb");
        assert_eq!(first.course_code, "law101");
        assert_eq!(first.teaching_method, "case method");
        assert_eq!(first.topic_covered, "contract law basics");
        assert!(!first.remedial);
        assert_eq!(first.credits, Some(4.0));
        assert_eq!(first.marks, Some(80.0));

        let second = &records[1];
        assert_eq!(second.faculty_name, "dr. iyer");
        assert_eq!(second.teaching_method, "lecture");
        assert!(second.remedial);
        // Tolerant coercion: junk and blank both become None.
        assert_eq!(second.credits, None);
        assert_eq!(second.marks, None);
    }

    #[test]
    fn test_topics_taught_alias_accepted() {
        let csv = "\
Faculty Name,Semester,Course,Teaching Method Used,Teaching Tool Used,Topics Taught
Dr. Rao,1,BALLB,Quiz,LMS,Contract Law
";
        let records = read_sessions(csv.as_bytes()).unwrap();
        assert_eq!(records[0].topic_covered, "contract law");
    }

    #[test]
    fn test_missing_required_column_errors() {
        let csv = "Faculty Name,Semester\nDr. Rao,1\n";
        let err = read_sessions(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_optional_columns_default() {
        let csv = "\
Faculty Name,Semester,Course,Teaching Method Used,Teaching Tool Used,Topic Covered
Dr. Rao,1,BALLB,Quiz,LMS,Contract Law
";
        let records = read_sessions(csv.as_bytes()).unwrap();
        let r = &records[0];
        assert_eq!(r.course_code, "");
        assert!(!r.remedial);
        assert_eq!(r.credits, None);
    }

    #[test]
    fn test_short_rows_tolerated() {
        let csv = "\
Faculty Name,Semester,Course,Teaching Method Used,Teaching Tool Used,Topic Covered,Credits
Dr. Rao,1,BALLB,Quiz,LMS
";
        let records = read_sessions(csv.as_bytes()).unwrap();
        assert_eq!(records[0].topic_covered, "");
        assert_eq!(records[0].credits, None);
    }
}
