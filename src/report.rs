// Full-report assembly.
//
// One Report holds every section the terminal renders, in a
// serializable form so the same analysis can be exported as JSON for
// downstream tooling. Building a report is itself a pure reduction
// over the enriched batch.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::{
    aggregate_coverage, category_counts_by_semester, compliance_score, credit_marks_summary,
    method_tool_crosstab, nep_distribution, programme_trends, remedial_breakdown, status_counts,
    topic_counts, top_n, value_counts, ComplianceRow, CoveragePolicy, CoverageRow, CreditMarksRow,
    CrosstabRow, Dimension, GroupKey, GroupedCountRow, ProgrammeTrend, RemedialBreakdown,
    TopicCountRow,
};
use crate::classify::MappingSet;
use crate::enrich::EnrichedRecord;
use crate::ingest::{SessionRecord, SyllabusEntry};

/// Every section of the analysis, computed over one filtered batch.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub sessions_total: usize,
    pub sessions_selected: usize,
    pub syllabus_rows: usize,

    pub status_counts: Vec<(String, usize)>,
    pub coverage_by_course_group: Vec<CoverageRow>,
    pub topics_by_semester: Vec<TopicCountRow>,
    pub topics_by_faculty: Vec<TopicCountRow>,

    pub methods_by_semester: Vec<GroupedCountRow>,
    pub tools_by_semester: Vec<GroupedCountRow>,
    pub remedial: RemedialBreakdown,
    pub method_tool_crosstab: Vec<CrosstabRow>,
    pub credit_marks: Vec<CreditMarksRow>,

    pub nep_distribution: Vec<(String, usize)>,
    pub compliance_by_semester: Vec<ComplianceRow>,

    pub top_methods: Vec<(String, usize)>,
    pub top_tools: Vec<(String, usize)>,
    pub programme_trends: Vec<ProgrammeTrend>,
}

/// Assemble the full report. `base` is the unfiltered session table
/// (the programme-wise section reads it); `selected` is the filtered,
/// enriched batch every other section reads.
pub fn build_report(
    base: &[SessionRecord],
    selected: &[EnrichedRecord],
    syllabus: &[SyllabusEntry],
    maps: &MappingSet,
    policy: CoveragePolicy,
) -> Report {
    let method_counts = value_counts(selected.iter().map(|r| r.method_category.as_str()));
    let tool_counts = value_counts(selected.iter().map(|r| r.tool_category.as_str()));

    Report {
        generated_at: Utc::now(),
        sessions_total: base.len(),
        sessions_selected: selected.len(),
        syllabus_rows: syllabus.len(),

        status_counts: status_counts(syllabus),
        coverage_by_course_group: aggregate_coverage(selected, syllabus, policy),
        topics_by_semester: topic_counts(selected, GroupKey::Semester, policy),
        topics_by_faculty: topic_counts(selected, GroupKey::Faculty, policy),

        methods_by_semester: category_counts_by_semester(selected, Dimension::Method),
        tools_by_semester: category_counts_by_semester(selected, Dimension::Tool),
        remedial: remedial_breakdown(selected),
        method_tool_crosstab: method_tool_crosstab(selected),
        credit_marks: credit_marks_summary(selected),

        nep_distribution: nep_distribution(selected),
        compliance_by_semester: compliance_score(selected, GroupKey::Semester),

        top_methods: top_n(&method_counts, 3),
        top_tools: top_n(&tool_counts, 3),
        programme_trends: programme_trends(base, maps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::matching::{TopicMatcher, DEFAULT_THRESHOLD};

    #[test]
    fn test_report_sections_consistent() {
        let base = vec![SessionRecord {
            faculty_name: "dr. rao".to_string(),
            semester: "1".to_string(),
            course_group: "ballb".to_string(),
            course_code: "law101".to_string(),
            subtopic: "contracts".to_string(),
            teaching_method: "case method".to_string(),
            teaching_tool: "ppt".to_string(),
            topic_covered: "contract law basics".to_string(),
            remedial: false,
            credits: Some(4.0),
            marks: Some(80.0),
        }];
        let syllabus = vec![SyllabusEntry {
            course_group: "ballb".to_string(),
            subtopic: "Contract Law Basics".to_string(),
            status: "covered".to_string(),
        }];
        let maps = MappingSet::builtin();
        let matcher = TopicMatcher::new(["Contract Law Basics"], DEFAULT_THRESHOLD).unwrap();
        let selected = enrich(&base, &maps, &matcher);

        let report = build_report(
            &base,
            &selected,
            &syllabus,
            &maps,
            CoveragePolicy::MatchInclusive,
        );

        assert_eq!(report.sessions_total, 1);
        assert_eq!(report.sessions_selected, 1);
        assert_eq!(report.coverage_by_course_group[0].pct, Some(100.0));
        assert_eq!(report.top_methods[0].0, "Case Law");
        assert_eq!(report.compliance_by_semester[0].pct, 0.0);
        assert_eq!(report.programme_trends[0].programme, "ballb");

        // The report serializes cleanly for machine consumption.
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("coverage_by_course_group"));
    }
}
