// Syllabus coverage reductions.
//
// Coverage joins two distinct counts per course group: subtopics the
// enriched records matched, and subtopics the syllabus defines. The
// join is outer: a group present on only one side still gets a row,
// with the missing count at zero and an undefined percentage when the
// syllabus defines no subtopics for it.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::aggregate::{sort_group_labels, GroupKey};
use crate::enrich::EnrichedRecord;
use crate::ingest::SyllabusEntry;
use crate::matching::NO_MATCH;

/// Whether the "No Match" sentinel counts as a distinct covered topic.
///
/// The institution's existing report counts it (every group with at
/// least one unmatched topic gets +1 "covered"), which likely inflates
/// coverage. MatchInclusive reproduces that; ExcludeNoMatch drops the
/// sentinel from the distinct count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoveragePolicy {
    #[default]
    MatchInclusive,
    ExcludeNoMatch,
}

impl CoveragePolicy {
    fn admits(&self, matched_subtopic: &str) -> bool {
        match self {
            CoveragePolicy::MatchInclusive => true,
            CoveragePolicy::ExcludeNoMatch => matched_subtopic != NO_MATCH,
        }
    }
}

/// One course group's coverage against the syllabus.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageRow {
    pub group: String,
    /// Distinct matched subtopics among the group's records.
    pub covered: usize,
    /// Distinct subtopics the syllabus defines for the group.
    pub total: usize,
    /// covered / total * 100; None when the syllabus defines nothing
    /// for this group (total == 0).
    pub pct: Option<f64>,
}

/// Per-course-group coverage percentage.
pub fn aggregate_coverage(
    records: &[EnrichedRecord],
    syllabus: &[SyllabusEntry],
    policy: CoveragePolicy,
) -> Vec<CoverageRow> {
    let mut covered: BTreeMap<String, HashSet<&str>> = BTreeMap::new();
    for record in records {
        if policy.admits(&record.matched_subtopic) {
            covered
                .entry(record.record.course_group.clone())
                .or_default()
                .insert(record.matched_subtopic.as_str());
        }
    }

    let mut totals: BTreeMap<String, HashSet<&str>> = BTreeMap::new();
    for entry in syllabus {
        totals
            .entry(entry.course_group.clone())
            .or_default()
            .insert(entry.subtopic.as_str());
    }

    // Outer join on the group key.
    let mut groups: Vec<String> = covered.keys().chain(totals.keys()).cloned().collect();
    groups.sort();
    groups.dedup();
    sort_group_labels(&mut groups);

    groups
        .into_iter()
        .map(|group| {
            let covered = covered.get(&group).map_or(0, HashSet::len);
            let total = totals.get(&group).map_or(0, HashSet::len);
            let pct = if total == 0 {
                None
            } else {
                Some(covered as f64 / total as f64 * 100.0)
            };
            CoverageRow {
                group,
                covered,
                total,
                pct,
            }
        })
        .collect()
}

/// One group's raw distinct-topic count (semester and faculty views).
#[derive(Debug, Clone, Serialize)]
pub struct TopicCountRow {
    pub group: String,
    pub covered: usize,
}

/// Distinct matched subtopics per group, without percentage
/// normalization; there is no syllabus total per semester or faculty.
pub fn topic_counts(
    records: &[EnrichedRecord],
    group_by: GroupKey,
    policy: CoveragePolicy,
) -> Vec<TopicCountRow> {
    let mut counts: BTreeMap<String, HashSet<&str>> = BTreeMap::new();
    for record in records {
        if policy.admits(&record.matched_subtopic) {
            counts
                .entry(group_by.of(record).to_string())
                .or_default()
                .insert(record.matched_subtopic.as_str());
        }
    }

    let mut groups: Vec<String> = counts.keys().cloned().collect();
    sort_group_labels(&mut groups);

    groups
        .into_iter()
        .map(|group| {
            let covered = counts.get(&group).map_or(0, HashSet::len);
            TopicCountRow { group, covered }
        })
        .collect()
}
