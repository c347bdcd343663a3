// Best-candidate topic matching.
//
// A TopicMatcher holds the candidate subtopics (normalized for scoring,
// original form for reporting) and returns the highest-scoring
// candidate for a topic string, or "No Match" below the threshold.
// Ties on the maximum score go to the first candidate encountered.

use crate::error::{AnalysisError, Result};
use crate::matching::partial::partial_ratio;
use crate::normalize::norm_text;

/// A topic must score strictly above this to count as matched.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Sentinel for topics no candidate matched well enough.
pub const NO_MATCH: &str = "No Match";

#[derive(Debug)]
struct Candidate {
    original: String,
    normalized: String,
}

/// Matches free-text topics against a fixed candidate list.
#[derive(Debug)]
pub struct TopicMatcher {
    candidates: Vec<Candidate>,
    threshold: f64,
}

impl TopicMatcher {
    /// Build a matcher over the candidate subtopics. Candidates need
    /// not be unique or sorted; their original form is what
    /// `match_topic` returns. An empty candidate list is invalid
    /// input: there is nothing to match against.
    pub fn new<I, S>(candidates: I, threshold: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| Candidate {
                original: c.as_ref().trim().to_string(),
                normalized: norm_text(c.as_ref()),
            })
            .collect();
        if candidates.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "empty candidate set: no syllabus subtopics to match against".to_string(),
            ));
        }
        Ok(Self {
            candidates,
            threshold,
        })
    }

    /// Match a topic string against the candidates. Returns the best
    /// candidate's original form when its score exceeds the threshold,
    /// otherwise the "No Match" sentinel. Pure: the same input always
    /// yields the same output.
    pub fn match_topic(&self, topic: &str) -> String {
        let topic = norm_text(topic);

        // First-encountered maximum wins: strictly-greater comparison
        // while scanning pins the tie-break.
        let mut best_score = f64::NEG_INFINITY;
        let mut best = &self.candidates[0];
        for candidate in &self.candidates {
            let score = partial_ratio(&topic, &candidate.normalized);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
        }

        if best_score > self.threshold {
            best.original.clone()
        } else {
            NO_MATCH.to_string()
        }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}
