// NEP compliance scoring.
//
// A record is compliant when its NEP class falls in the fixed
// student-centric set. The score is the compliant fraction per group,
// as a percentage.

use serde::Serialize;

use crate::aggregate::{sort_group_labels, GroupKey};
use crate::enrich::EnrichedRecord;

/// NEP classes that count toward the compliance score.
pub const COMPLIANT_CLASSES: [&str; 2] = ["Student-Centric", "Blended"];

/// One group's compliance percentage.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceRow {
    pub group: String,
    pub compliant: usize,
    pub records: usize,
    pub pct: f64,
}

/// Compliance score per group (the standard report groups by semester).
pub fn compliance_score(records: &[EnrichedRecord], group_by: GroupKey) -> Vec<ComplianceRow> {
    use std::collections::BTreeMap;

    let mut tallies: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for record in records {
        let entry = tallies.entry(group_by.of(record).to_string()).or_insert((0, 0));
        entry.1 += 1;
        if COMPLIANT_CLASSES.contains(&record.nep_class.as_str()) {
            entry.0 += 1;
        }
    }

    let mut groups: Vec<String> = tallies.keys().cloned().collect();
    sort_group_labels(&mut groups);

    groups
        .into_iter()
        .map(|group| {
            let (compliant, total) = tallies[&group];
            ComplianceRow {
                group,
                compliant,
                records: total,
                pct: ratio_pct(compliant, total),
            }
        })
        .collect()
}

/// compliant / total * 100, with the empty group defined as 0.0.
fn ratio_pct(compliant: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    compliant as f64 / total as f64 * 100.0
}
