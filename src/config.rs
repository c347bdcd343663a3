use std::env;
use std::path::PathBuf;

use crate::error::{AnalysisError, Result};
use crate::matching::DEFAULT_THRESHOLD;

/// Central configuration loaded from environment variables.
///
/// Everything has a working default; env vars adjust the analysis
/// knobs and CLI flags override both. The .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// Fuzzy-match acceptance threshold, 0-100 (LECTERN_MATCH_THRESHOLD).
    /// A topic must score strictly above this to count as matched.
    pub match_threshold: f64,
    /// Drop the "No Match" sentinel from distinct coverage counts
    /// (LECTERN_EXCLUDE_NO_MATCH). Off by default: the legacy report
    /// counts the sentinel as a covered topic.
    pub exclude_no_match: bool,
    /// Optional JSON file overriding the built-in category tables
    /// (LECTERN_MAPPINGS).
    pub mappings_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let match_threshold = match env::var("LECTERN_MATCH_THRESHOLD") {
            Ok(raw) => {
                let value: f64 = raw.parse().map_err(|_| {
                    AnalysisError::Config(format!(
                        "LECTERN_MATCH_THRESHOLD is not a number: {raw:?}"
                    ))
                })?;
                validate_threshold(value)?;
                value
            }
            Err(_) => DEFAULT_THRESHOLD,
        };

        let exclude_no_match = matches!(
            env::var("LECTERN_EXCLUDE_NO_MATCH").as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Ok(Self {
            match_threshold,
            exclude_no_match,
            mappings_path: env::var("LECTERN_MAPPINGS").ok().map(PathBuf::from),
        })
    }
}

/// Thresholds live on the 0-100 similarity scale.
pub fn validate_threshold(value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(AnalysisError::Config(format!(
            "match threshold must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}
