// Colored terminal output for the analysis report.
//
// This module handles all terminal-specific formatting: section
// headers, aligned tables, compliance coloring. The main.rs display
// flow delegates here; nothing in this module computes statistics.

use colored::Colorize;

use crate::aggregate::{
    ComplianceRow, CoverageRow, CreditMarksRow, CrosstabRow, GroupedCountRow, ProgrammeTrend,
    RemedialBreakdown, TopicCountRow,
};
use crate::output::fmt_pct;
use crate::report::Report;

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

/// Syllabus coverage by course group.
pub fn display_coverage(rows: &[CoverageRow]) {
    section("Syllabus Coverage by Course Group");
    if rows.is_empty() {
        println!("  No course groups in selection.");
        return;
    }
    println!(
        "  {:<24} {:>8} {:>8} {:>9}",
        "Course Group".dimmed(),
        "Covered".dimmed(),
        "Total".dimmed(),
        "Pct".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());
    for row in rows {
        println!(
            "  {:<24} {:>8} {:>8} {:>9}",
            row.group,
            row.covered,
            row.total,
            fmt_pct(row.pct),
        );
    }
}

/// Distinct-topic counts for the semester/faculty views.
pub fn display_topic_counts(title: &str, rows: &[TopicCountRow]) {
    section(title);
    if rows.is_empty() {
        println!("  No records in selection.");
        return;
    }
    for row in rows {
        println!("  {:<32} {:>6}", row.group, row.covered);
    }
}

/// Method/tool category distribution per semester.
pub fn display_distribution(title: &str, rows: &[GroupedCountRow]) {
    section(title);
    if rows.is_empty() {
        println!("  No records in selection.");
        return;
    }
    let mut current = None::<&str>;
    for row in rows {
        if current != Some(row.semester.as_str()) {
            println!("  {}", format!("Semester {}", row.semester).underline());
            current = Some(row.semester.as_str());
        }
        println!("    {:<28} {:>6}", row.category, row.count);
    }
}

/// Remedial-session breakdown.
pub fn display_remedial(breakdown: &RemedialBreakdown) {
    section("Remedial Class Breakdown");
    if breakdown.sessions == 0 {
        println!("  No remedial sessions in selection.");
        return;
    }
    println!("  {} remedial sessions", breakdown.sessions);
    println!("  {}", "Methods".underline());
    for (category, count) in &breakdown.methods {
        println!("    {category:<28} {count:>6}");
    }
    println!("  {}", "Tools".underline());
    for (category, count) in &breakdown.tools {
        println!("    {category:<28} {count:>6}");
    }
}

/// Method x tool cross-tabulation.
pub fn display_crosstab(rows: &[CrosstabRow]) {
    section("Method vs Tool Usage");
    if rows.is_empty() {
        println!("  No records in selection.");
        return;
    }
    println!(
        "  {:<24} {:<20} {:>6}",
        "Method".dimmed(),
        "Tool".dimmed(),
        "Count".dimmed(),
    );
    println!("  {}", "-".repeat(52).dimmed());
    for row in rows {
        println!(
            "  {:<24} {:<20} {:>6}",
            row.method_category, row.tool_category, row.count
        );
    }
}

/// Credits/marks totals per method category.
pub fn display_credit_marks(rows: &[CreditMarksRow]) {
    section("Credit & Marks Summary by Method");
    if rows.is_empty() {
        println!("  No records in selection.");
        return;
    }
    println!(
        "  {:<24} {:>9} {:>9} {:>9}",
        "Method".dimmed(),
        "Credits".dimmed(),
        "Marks".dimmed(),
        "Sessions".dimmed(),
    );
    println!("  {}", "-".repeat(54).dimmed());
    for row in rows {
        println!(
            "  {:<24} {:>9.1} {:>9.1} {:>9}",
            row.method_category, row.credits, row.marks, row.sessions
        );
    }
}

/// Simple value-count listing (NEP distribution, status counts, top-N).
pub fn display_value_counts(title: &str, rows: &[(String, usize)]) {
    section(title);
    if rows.is_empty() {
        println!("  Nothing to report.");
        return;
    }
    for (value, count) in rows {
        println!("  {value:<32} {count:>6}");
    }
}

/// Semester-wise NEP compliance scores, colored by band.
pub fn display_compliance(rows: &[ComplianceRow]) {
    section("NEP Compliance Score by Semester");
    if rows.is_empty() {
        println!("  No records in selection.");
        return;
    }
    for row in rows {
        let pct = format!("{:.1}%", row.pct);
        let colored_pct = if row.pct >= 60.0 {
            pct.green()
        } else if row.pct >= 30.0 {
            pct.yellow()
        } else {
            pct.red()
        };
        println!(
            "  Semester {:<8} {:>8}  ({} of {} sessions)",
            row.group, colored_pct, row.compliant, row.records
        );
    }
}

/// Programme-wise top methods and tools.
pub fn display_programme_trends(trends: &[ProgrammeTrend]) {
    section("Programme-wise Method & Tool Trends");
    if trends.is_empty() {
        println!("  No programme matched any course group.");
        return;
    }
    for trend in trends {
        println!(
            "  {} ({} sessions)",
            trend.programme.to_uppercase().underline(),
            trend.sessions
        );
        println!("    Top methods:");
        for (category, count) in &trend.top_methods {
            println!("      {category:<26} {count:>6}");
        }
        println!("    Top tools:");
        for (category, count) in &trend.top_tools {
            println!("      {category:<26} {count:>6}");
        }
    }
}

/// The full report, every section in reading order.
pub fn display_report(report: &Report) {
    println!(
        "{}",
        format!(
            "Teaching analysis — {} of {} sessions selected, {} syllabus rows",
            report.sessions_selected, report.sessions_total, report.syllabus_rows
        )
        .bold()
    );

    display_value_counts("Syllabus Status Summary", &report.status_counts);
    display_coverage(&report.coverage_by_course_group);
    display_topic_counts("Topics Taught by Semester", &report.topics_by_semester);
    display_topic_counts("Topics Taught by Faculty", &report.topics_by_faculty);
    display_distribution("Teaching Methods by Semester", &report.methods_by_semester);
    display_distribution("Teaching Tools by Semester", &report.tools_by_semester);
    display_remedial(&report.remedial);
    display_crosstab(&report.method_tool_crosstab);
    display_credit_marks(&report.credit_marks);
    display_value_counts("NEP Classification Summary", &report.nep_distribution);
    display_compliance(&report.compliance_by_semester);
    display_value_counts("Top Teaching Methods", &report.top_methods);
    display_value_counts("Top Teaching Tools", &report.top_tools);
    display_programme_trends(&report.programme_trends);
    println!();
}
