// Category classification — ordered keyword tables and the classifier
// that scans them.

pub mod classifier;
pub mod mapping;

pub use classifier::{classify, nep_class, OTHER};
pub use mapping::{CategoryMap, MappingSet, TagMap};
