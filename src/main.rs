use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use lectern::aggregate::{self, CoveragePolicy, Dimension, GroupKey};
use lectern::classify::MappingSet;
use lectern::config::{validate_threshold, Config};
use lectern::enrich::{enrich_record, EnrichedRecord, Filters};
use lectern::ingest::{load_sessions, load_syllabus, SessionRecord, SyllabusEntry};
use lectern::matching::TopicMatcher;
use lectern::output::terminal;
use lectern::report::build_report;

/// Lectern: teaching-method and syllabus-coverage analytics.
///
/// Reads an attendance/teaching-log CSV and a syllabus checklist CSV
/// and reports categorized method/tool usage, fuzzy-matched syllabus
/// coverage and NEP compliance scores.
#[derive(Parser)]
#[command(name = "lectern", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input files, filters and analysis knobs shared by every command.
#[derive(Args)]
struct InputArgs {
    /// Attendance/teaching-log export (CSV)
    #[arg(long, value_name = "FILE")]
    sessions: PathBuf,

    /// Syllabus checklist export (CSV)
    #[arg(long, value_name = "FILE")]
    syllabus: PathBuf,

    /// Only include these faculty (repeatable)
    #[arg(long)]
    faculty: Vec<String>,

    /// Only include these semesters (repeatable)
    #[arg(long)]
    semester: Vec<String>,

    /// Only include these course groups (repeatable)
    #[arg(long = "course-group")]
    course_group: Vec<String>,

    /// Fuzzy-match threshold, 0-100 (default 80; env LECTERN_MATCH_THRESHOLD)
    #[arg(long)]
    threshold: Option<f64>,

    /// Exclude the "No Match" bucket from distinct coverage counts
    #[arg(long)]
    exclude_no_match: bool,

    /// JSON file overriding the built-in category tables
    #[arg(long, value_name = "FILE")]
    mappings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis report
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Syllabus coverage views
    Coverage {
        #[command(flatten)]
        input: InputArgs,

        /// Which coverage view to render
        #[arg(long, value_enum, default_value = "course-group")]
        view: CoverageView,
    },

    /// Teaching method and tool distributions by semester
    Methods {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Semester-wise NEP compliance scores
    Compliance {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Remedial class breakdown
    Remedial {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Top 3 teaching methods and tools
    Identity {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Validate the two exports (columns, row counts) without analyzing
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CoverageView {
    /// Syllabus status breakdown
    Overall,
    /// Coverage percentage per course group
    CourseGroup,
    /// Distinct topics taught per semester
    Semester,
    /// Distinct topics taught per faculty
    Faculty,
}

/// Everything one command invocation needs, computed once.
struct Analysis {
    base: Vec<SessionRecord>,
    selected: Vec<EnrichedRecord>,
    syllabus: Vec<SyllabusEntry>,
    maps: MappingSet,
    policy: CoveragePolicy,
}

fn prepare(input: &InputArgs) -> Result<Analysis> {
    let config = Config::load()?;

    let maps = match input.mappings.as_ref().or(config.mappings_path.as_ref()) {
        Some(path) => MappingSet::load_with_overrides(path)?,
        None => MappingSet::builtin(),
    };

    let threshold = match input.threshold {
        Some(value) => {
            validate_threshold(value)?;
            value
        }
        None => config.match_threshold,
    };

    let policy = if input.exclude_no_match || config.exclude_no_match {
        CoveragePolicy::ExcludeNoMatch
    } else {
        CoveragePolicy::MatchInclusive
    };

    let base = load_sessions(&input.sessions)?;
    let syllabus = load_syllabus(&input.syllabus)?;
    let matcher = TopicMatcher::new(syllabus.iter().map(|e| e.subtopic.as_str()), threshold)?;

    let filters = Filters::new(&input.faculty, &input.semester, &input.course_group);
    let rows = filters.apply(&base);
    info!(
        selected = rows.len(),
        total = base.len(),
        candidates = matcher.candidate_count(),
        "Applied filters"
    );

    // The fuzzy pass is O(rows x candidates); show progress on big exports.
    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Matching [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );
    let selected: Vec<EnrichedRecord> = rows
        .iter()
        .map(|record| {
            let enriched = enrich_record(record, &maps, &matcher);
            pb.inc(1);
            enriched
        })
        .collect();
    pb.finish_and_clear();

    Ok(Analysis {
        base,
        selected,
        syllabus,
        maps,
        policy,
    })
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lectern=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { input, json } => {
            let analysis = prepare(&input)?;
            let report = build_report(
                &analysis.base,
                &analysis.selected,
                &analysis.syllabus,
                &analysis.maps,
                analysis.policy,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Coverage { input, view } => {
            let analysis = prepare(&input)?;
            match view {
                CoverageView::Overall => terminal::display_value_counts(
                    "Syllabus Status Summary",
                    &aggregate::status_counts(&analysis.syllabus),
                ),
                CoverageView::CourseGroup => terminal::display_coverage(&aggregate::aggregate_coverage(
                    &analysis.selected,
                    &analysis.syllabus,
                    analysis.policy,
                )),
                CoverageView::Semester => terminal::display_topic_counts(
                    "Topics Taught by Semester",
                    &aggregate::topic_counts(&analysis.selected, GroupKey::Semester, analysis.policy),
                ),
                CoverageView::Faculty => terminal::display_topic_counts(
                    "Topics Taught by Faculty",
                    &aggregate::topic_counts(&analysis.selected, GroupKey::Faculty, analysis.policy),
                ),
            }
        }

        Commands::Methods { input } => {
            let analysis = prepare(&input)?;
            terminal::display_distribution(
                "Teaching Methods by Semester",
                &aggregate::category_counts_by_semester(&analysis.selected, Dimension::Method),
            );
            terminal::display_distribution(
                "Teaching Tools by Semester",
                &aggregate::category_counts_by_semester(&analysis.selected, Dimension::Tool),
            );
        }

        Commands::Compliance { input } => {
            let analysis = prepare(&input)?;
            terminal::display_compliance(&aggregate::compliance_score(
                &analysis.selected,
                GroupKey::Semester,
            ));
        }

        Commands::Remedial { input } => {
            let analysis = prepare(&input)?;
            terminal::display_remedial(&aggregate::remedial_breakdown(&analysis.selected));
        }

        Commands::Identity { input } => {
            let analysis = prepare(&input)?;
            let methods = aggregate::value_counts(
                analysis.selected.iter().map(|r| r.method_category.as_str()),
            );
            let tools = aggregate::value_counts(
                analysis.selected.iter().map(|r| r.tool_category.as_str()),
            );
            terminal::display_value_counts("Top Teaching Methods", &aggregate::top_n(&methods, 3));
            terminal::display_value_counts("Top Teaching Tools", &aggregate::top_n(&tools, 3));
        }

        Commands::Check { input } => {
            let analysis = prepare(&input)?;
            println!("Attendance rows: {}", analysis.base.len());
            println!("Selected rows:   {}", analysis.selected.len());
            println!("Syllabus rows:   {}", analysis.syllabus.len());
            println!(
                "Method keywords: {}, tool keywords: {}",
                analysis.maps.methods.entries().len(),
                analysis.maps.tools.entries().len()
            );
            println!("Both exports parsed cleanly.");
        }
    }

    Ok(())
}
