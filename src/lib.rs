//! Mates Match - mentor and student recommendations for MonashMates
//!
//! This library provides the compatibility scorer used to suggest mentors to
//! students and students to mentors, ranked by shared units.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, DEFAULT_LIMIT, compare_units, explain_match};
pub use crate::models::{Profile, Role, UnitSet, ScoredCandidate, ComparisonResult, RecommendationWeights};
