// Fuzzy topic matching — partial similarity scoring and best-candidate
// selection against the syllabus subtopic universe.

pub mod matcher;
pub mod partial;

pub use matcher::{TopicMatcher, DEFAULT_THRESHOLD, NO_MATCH};
pub use partial::partial_ratio;
