use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCandidate;

/// Response for the ranking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub recommendations: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Response for the explain endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub reason: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub directory_configured: bool,
    pub cached_pools: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
