// Syllabus checklist ingestion.
//
// One SyllabusEntry per row. The subtopic labels within a course group
// are the canonical coverage universe for that group; subtopics keep
// their display casing (the matcher normalizes for scoring), while
// course_group and status are normalized like every other text field.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::ingest::columns;
use crate::normalize::norm_text;

/// One reference-curriculum row from the syllabus export.
#[derive(Debug, Clone, Serialize)]
pub struct SyllabusEntry {
    pub course_group: String,
    /// Display form, trimmed but not lowercased; this is what matched
    /// topics are reported as.
    pub subtopic: String,
    pub status: String,
}

/// Read syllabus entries from any CSV source.
/// Required columns: course_group (or "course"), subtopic (or
/// "course_subtopic"), status.
pub fn read_syllabus<R: Read>(reader: R) -> Result<Vec<SyllabusEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let cols = columns::normalize_columns(rdr.headers()?.iter());
    let course_group = columns::require(&cols, "course_group", "syllabus")?;
    let subtopic = columns::require(&cols, "subtopic", "syllabus")?;
    let status = columns::require(&cols, "status", "syllabus")?;

    let mut entries = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let get = |idx: usize| row.get(idx).unwrap_or("");
        entries.push(SyllabusEntry {
            course_group: norm_text(get(course_group)),
            subtopic: get(subtopic).trim().to_string(),
            status: norm_text(get(status)),
        });
    }

    Ok(entries)
}

/// Read syllabus entries from a CSV file on disk.
pub fn load_syllabus(path: &Path) -> Result<Vec<SyllabusEntry>> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let entries = read_syllabus(file)?;
    info!(
        path = %path.display(),
        rows = entries.len(),
        "Loaded syllabus checklist"
    );
    Ok(entries)
}
