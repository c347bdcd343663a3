// Report summary reductions: distributions, cross-tabulation, top-N
// and programme-wise trends.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::sort_group_labels;
use crate::classify::{classify, MappingSet};
use crate::enrich::EnrichedRecord;
use crate::ingest::{SessionRecord, SyllabusEntry};

/// Programmes reported in the programme-wise trends section. Matching
/// is case-insensitive substring on course_group, so buckets overlap
/// ("pg diploma" rows also land in "pg" and "diploma").
pub const PROGRAMMES: [&str; 5] = ["ballb", "pg", "pg diploma", "diploma", "certificate"];

/// Which derived category a reduction reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Method,
    Tool,
}

impl Dimension {
    fn of<'a>(&self, record: &'a EnrichedRecord) -> &'a str {
        match self {
            Dimension::Method => &record.method_category,
            Dimension::Tool => &record.tool_category,
        }
    }
}

/// Count of occurrences per value, most frequent first; ties break
/// alphabetically so the table is stable run to run.
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut rows: Vec<(String, usize)> =
        counts.into_iter().map(|(v, c)| (v.to_string(), c)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// The first n rows of a value_counts table.
pub fn top_n(counts: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    counts.iter().take(n).cloned().collect()
}

/// One (semester, category) count for the distribution charts.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedCountRow {
    pub semester: String,
    pub category: String,
    pub count: usize,
}

/// Method- or tool-category counts per semester.
pub fn category_counts_by_semester(
    records: &[EnrichedRecord],
    dimension: Dimension,
) -> Vec<GroupedCountRow> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for record in records {
        let key = (
            record.record.semester.clone(),
            dimension.of(record).to_string(),
        );
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut semesters: Vec<String> = counts.keys().map(|(s, _)| s.clone()).collect();
    semesters.sort();
    semesters.dedup();
    sort_group_labels(&mut semesters);

    let mut rows = Vec::new();
    for semester in &semesters {
        for ((s, category), count) in &counts {
            if s == semester {
                rows.push(GroupedCountRow {
                    semester: s.clone(),
                    category: category.clone(),
                    count: *count,
                });
            }
        }
    }
    rows
}

/// Method and tool category distributions over remedial sessions only.
#[derive(Debug, Clone, Serialize)]
pub struct RemedialBreakdown {
    pub sessions: usize,
    pub methods: Vec<(String, usize)>,
    pub tools: Vec<(String, usize)>,
}

pub fn remedial_breakdown(records: &[EnrichedRecord]) -> RemedialBreakdown {
    let remedial: Vec<&EnrichedRecord> =
        records.iter().filter(|r| r.record.remedial).collect();
    RemedialBreakdown {
        sessions: remedial.len(),
        methods: value_counts(remedial.iter().map(|r| r.method_category.as_str())),
        tools: value_counts(remedial.iter().map(|r| r.tool_category.as_str())),
    }
}

/// One cell of the method x tool cross-tabulation.
#[derive(Debug, Clone, Serialize)]
pub struct CrosstabRow {
    pub method_category: String,
    pub tool_category: String,
    pub count: usize,
}

pub fn method_tool_crosstab(records: &[EnrichedRecord]) -> Vec<CrosstabRow> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for record in records {
        let key = (record.method_category.clone(), record.tool_category.clone());
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((method_category, tool_category), count)| CrosstabRow {
            method_category,
            tool_category,
            count,
        })
        .collect()
}

/// Credits/marks totals and usage count per method category. Missing
/// numeric values contribute nothing to the sums but the session still
/// counts toward usage.
#[derive(Debug, Clone, Serialize)]
pub struct CreditMarksRow {
    pub method_category: String,
    pub credits: f64,
    pub marks: f64,
    pub sessions: usize,
}

pub fn credit_marks_summary(records: &[EnrichedRecord]) -> Vec<CreditMarksRow> {
    let mut rows: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = rows.entry(record.method_category.clone()).or_insert((0.0, 0.0, 0));
        entry.0 += record.record.credits.unwrap_or(0.0);
        entry.1 += record.record.marks.unwrap_or(0.0);
        entry.2 += 1;
    }
    rows.into_iter()
        .map(|(method_category, (credits, marks, sessions))| CreditMarksRow {
            method_category,
            credits,
            marks,
            sessions,
        })
        .collect()
}

/// NEP class distribution over the enriched batch.
pub fn nep_distribution(records: &[EnrichedRecord]) -> Vec<(String, usize)> {
    value_counts(records.iter().map(|r| r.nep_class.as_str()))
}

/// Top methods and tools for one programme.
#[derive(Debug, Clone, Serialize)]
pub struct ProgrammeTrend {
    pub programme: String,
    pub sessions: usize,
    pub top_methods: Vec<(String, usize)>,
    pub top_tools: Vec<(String, usize)>,
}

/// Programme-wise method/tool trends. Reads the *unfiltered* base
/// table: the section is an institution-wide view, independent of the
/// sidebar selection. Programmes with no matching rows are omitted.
pub fn programme_trends(base: &[SessionRecord], maps: &MappingSet) -> Vec<ProgrammeTrend> {
    PROGRAMMES
        .iter()
        .filter_map(|programme| {
            let rows: Vec<&SessionRecord> = base
                .iter()
                .filter(|r| r.course_group.contains(programme))
                .collect();
            if rows.is_empty() {
                return None;
            }
            let methods = value_counts_owned(
                rows.iter().map(|r| classify(&r.teaching_method, &maps.methods)),
            );
            let tools = value_counts_owned(
                rows.iter().map(|r| classify(&r.teaching_tool, &maps.tools)),
            );
            Some(ProgrammeTrend {
                programme: programme.to_string(),
                sessions: rows.len(),
                top_methods: top_n(&methods, 3),
                top_tools: top_n(&tools, 3),
            })
        })
        .collect()
}

/// Syllabus status distribution (covered/pending/etc).
pub fn status_counts(syllabus: &[SyllabusEntry]) -> Vec<(String, usize)> {
    value_counts(syllabus.iter().map(|e| e.status.as_str()))
}

fn value_counts_owned<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut rows: Vec<(String, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
