// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Role, UnitSet, ScoredCandidate, ComparisonResult, RecommendationWeights};
pub use requests::{RankRequest, ExplainRequest, CompareUnitsRequest};
pub use responses::{RankResponse, ExplainResponse, HealthResponse, ErrorResponse};
