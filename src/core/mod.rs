// Core algorithm exports
pub mod explain;
pub mod recommender;
pub mod scoring;
pub mod units;

pub use explain::explain_match;
pub use recommender::{Recommender, DEFAULT_LIMIT};
pub use scoring::{mentor_relevance, student_relevance};
pub use units::{compare_units, jaccard_percentage, normalize_units, shared_units};
