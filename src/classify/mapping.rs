// Category mapping tables — configuration data, not logic.
//
// A CategoryMap is an *ordered* list of keyword -> category pairs; the
// order is part of the contract, because classification returns the
// first keyword that occurs in the text (see classifier.rs). The
// built-in tables below reproduce the institutional taxonomy; a JSON
// override file can replace any of the three tables while preserving
// its authored order (arrays of pairs, not objects).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::normalize::norm_text;

/// An ordered keyword -> category table for substring classification.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    entries: Vec<(String, String)>,
}

impl CategoryMap {
    /// Build a table from ordered (keyword, category) pairs. Keywords
    /// are normalized; categories keep their display casing.
    ///
    /// An empty table would classify everything as "Other", so it is
    /// rejected as a configuration error.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (norm_text(k.as_ref()), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(AnalysisError::Config(
                "category mapping table has no entries".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    /// The (keyword, category) pairs in definition order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// All category names this table can produce (excluding "Other").
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for (_, category) in &self.entries {
            if !seen.contains(&category.as_str()) {
                seen.push(category.as_str());
            }
        }
        seen
    }
}

/// An exact category -> tag lookup (second-stage classification).
/// Order does not affect lookups; it is kept for stable iteration.
#[derive(Debug, Clone)]
pub struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        if entries.is_empty() {
            return Err(AnalysisError::Config(
                "tag mapping table has no entries".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    /// Exact lookup of a category's tag, if one is defined.
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| v.as_str())
    }
}

/// The three tables one analysis run needs: teaching-method keywords,
/// teaching-tool keywords, and the method-category -> NEP tag lookup.
#[derive(Debug, Clone)]
pub struct MappingSet {
    pub methods: CategoryMap,
    pub tools: CategoryMap,
    pub nep_tags: TagMap,
}

impl MappingSet {
    /// The built-in institutional taxonomy.
    pub fn builtin() -> Self {
        // new() cannot fail on these non-empty literal tables.
        Self {
            methods: CategoryMap::new(default_method_table()).unwrap(),
            tools: CategoryMap::new(default_tool_table()).unwrap(),
            nep_tags: TagMap::new(default_nep_table()).unwrap(),
        }
    }

    /// Load the built-in tables with overrides from a JSON file.
    /// Each section is optional; a present-but-empty section is a
    /// configuration error rather than a silent fallback.
    pub fn load_with_overrides(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let overrides: MappingOverrides = serde_json::from_str(&raw)
            .map_err(|e| AnalysisError::Config(format!("invalid mappings file: {e}")))?;

        let builtin = Self::builtin();
        let methods = match overrides.methods {
            Some(pairs) => CategoryMap::new(pairs)?,
            None => builtin.methods,
        };
        let tools = match overrides.tools {
            Some(pairs) => CategoryMap::new(pairs)?,
            None => builtin.tools,
        };
        let nep_tags = match overrides.nep_tags {
            Some(pairs) => TagMap::new(pairs)?,
            None => builtin.nep_tags,
        };

        info!(
            path = %path.display(),
            method_keywords = methods.entries().len(),
            tool_keywords = tools.entries().len(),
            "Loaded mapping overrides"
        );

        Ok(Self {
            methods,
            tools,
            nep_tags,
        })
    }
}

/// On-disk shape of the overrides file: ordered arrays of pairs.
#[derive(Debug, Deserialize)]
struct MappingOverrides {
    methods: Option<Vec<(String, String)>>,
    tools: Option<Vec<(String, String)>>,
    nep_tags: Option<Vec<(String, String)>>,
}

fn default_method_table() -> Vec<(&'static str, &'static str)> {
    vec![
        ("field based", "Experiential"),
        ("seminar", "Participative"),
        ("group discussion", "Participative"),
        ("peer learning", "Peer"),
        ("case method", "Case Law"),
        ("problem solving", "Problem Solving"),
        ("quiz", "Quiz"),
        ("lecture", "Lecture"),
        ("project", "Project Based"),
        ("flipped", "Flipped"),
        ("industry", "Industry"),
    ]
}

fn default_tool_table() -> Vec<(&'static str, &'static str)> {
    vec![
        ("board & pen", "Board & Pen"),
        ("extempore", "Speech"),
        ("interactive board", "ICT"),
        ("ppt", "ICT"),
        ("lms", "ICT"),
        ("audio", "ICT"),
        ("av", "ICT"),
        ("tv", "ICT"),
        ("zoom", "Online"),
        ("g class", "Online"),
        ("hybrid", "Hybrid"),
    ]
}

fn default_nep_table() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Experiential", "Student-Centric"),
        ("Participative", "Student-Centric"),
        ("Peer", "Student-Centric"),
        ("Flipped", "Blended"),
        ("Lecture", "Traditional"),
        ("Problem Solving", "Skill-Based"),
        ("Project Based", "Project-Based"),
        ("Case Law", "Legal-Oriented"),
        ("Quiz", "Interactive"),
        ("Industry", "Experiential"),
    ]
}
