// Grouped reductions over enriched records and syllabus entries.
//
// Every function here is a stateless pure reduction: it takes the
// enriched batch (and, for coverage, the syllabus universe) and returns
// a sorted result table. Nothing is cached between calls.

pub mod compliance;
pub mod coverage;
pub mod summary;

pub use compliance::{compliance_score, ComplianceRow, COMPLIANT_CLASSES};
pub use coverage::{aggregate_coverage, topic_counts, CoveragePolicy, CoverageRow, TopicCountRow};
pub use summary::{
    category_counts_by_semester, credit_marks_summary, method_tool_crosstab, nep_distribution,
    programme_trends, remedial_breakdown, status_counts, top_n, value_counts, CreditMarksRow,
    CrosstabRow, Dimension, GroupedCountRow, ProgrammeTrend, RemedialBreakdown, PROGRAMMES,
};

use crate::enrich::EnrichedRecord;

/// Which record field a reduction groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    CourseGroup,
    Semester,
    Faculty,
}

impl GroupKey {
    pub fn of<'a>(&self, record: &'a EnrichedRecord) -> &'a str {
        match self {
            GroupKey::CourseGroup => &record.record.course_group,
            GroupKey::Semester => &record.record.semester,
            GroupKey::Faculty => &record.record.faculty_name,
        }
    }
}

/// Sort group labels numerically when they all parse as numbers
/// (semesters exported as "1", "2", ... "10"), lexically otherwise.
pub(crate) fn sort_group_labels(labels: &mut [String]) {
    let all_numeric = labels.iter().all(|l| l.parse::<f64>().is_ok());
    if all_numeric {
        labels.sort_by(|a, b| {
            let (a, b) = (a.parse::<f64>().unwrap(), b.parse::<f64>().unwrap());
            a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
        });
    } else {
        labels.sort();
    }
}
