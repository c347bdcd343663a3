// CSV ingestion — turns the two spreadsheet exports into typed,
// normalized record tables. Everything downstream assumes the
// normalization applied here and never re-parses.

pub mod columns;
pub mod sessions;
pub mod syllabus;

pub use sessions::{load_sessions, read_sessions, SessionRecord};
pub use syllabus::{load_syllabus, read_syllabus, SyllabusEntry};
