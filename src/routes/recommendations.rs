use actix_web::{web, HttpResponse, Responder, http::StatusCode};
use validator::Validate;
use crate::config::Settings;
use crate::core::Recommender;
use crate::models::{
    Profile, Role, RankRequest, ExplainRequest, CompareUnitsRequest,
    RankResponse, ExplainResponse, HealthResponse, ErrorResponse,
};
use crate::services::{normalize_profile, CacheManager, ProfileDirectory};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub directory: Option<Arc<ProfileDirectory>>,
    pub cache: CacheManager,
    pub settings: Arc<Settings>,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations/mentors", web::post().to(recommend_mentors))
        .route("/recommendations/students", web::post().to(recommend_students))
        .route("/match/explain", web::post().to(explain))
        .route("/units/compare", web::post().to(compare_units))
        .route("/cache/invalidate", web::post().to(invalidate_cache));
}

fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        directory_configured: state.directory.is_some(),
        cached_pools: state.cache.stats().entries,
        timestamp: chrono::Utc::now(),
    })
}

/// Rank mentors for a student
///
/// POST /api/v1/recommendations/mentors
///
/// Request body:
/// ```json
/// {
///   "requester": { "id": "s1", "role": "student", "units": ["FIT2004"] },
///   "candidates": [ ... ],
///   "limit": 5
/// }
/// ```
async fn recommend_mentors(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    rank(&state, req.into_inner(), Role::Mentor).await
}

/// Rank students for a mentor
///
/// POST /api/v1/recommendations/students
async fn recommend_students(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    rank(&state, req.into_inner(), Role::Student).await
}

async fn rank(state: &AppState, req: RankRequest, pool_role: Role) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for {} ranking request: {:?}", pool_role, errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let limit = state.settings.effective_limit(req.limit);
    let requester = normalize_profile(req.requester);

    if requester.role == pool_role {
        tracing::debug!(
            "Requester {} is a {} asking for {} candidates",
            requester.id,
            requester.role,
            pool_role
        );
    }

    // Directory pools are normalized on load; inline ones get the same treatment
    let pool = match req.candidates {
        Some(inline) => Arc::new(inline.into_iter().map(normalize_profile).collect::<Vec<_>>()),
        None => match load_pool(state, pool_role).await {
            Ok(pool) => pool,
            Err(response) => return response,
        },
    };

    // Drop the requester's own profile; a same-id profile of the other role stays
    let candidates: Vec<Profile> = pool
        .iter()
        .filter(|candidate| !is_same_profile(&requester, candidate))
        .cloned()
        .collect();

    let recommendations = match pool_role {
        Role::Mentor => state
            .recommender
            .rank_mentors_for_student(&requester, &candidates, limit),
        Role::Student => state
            .recommender
            .rank_students_for_mentor(&requester, &candidates, limit),
    };

    tracing::info!(
        "Returning {} {} recommendations for {} (from {} candidates)",
        recommendations.len(),
        pool_role,
        requester.id,
        candidates.len()
    );

    HttpResponse::Ok().json(RankResponse {
        recommendations,
        total_candidates: candidates.len(),
    })
}

fn is_same_profile(requester: &Profile, candidate: &Profile) -> bool {
    candidate.id == requester.id && candidate.role == requester.role
}

async fn load_pool(state: &AppState, role: Role) -> Result<Arc<Vec<Profile>>, HttpResponse> {
    let Some(directory) = state.directory.clone() else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "No profile directory",
            "Provide candidates in the request or configure a profile directory",
        ));
    };

    state
        .cache
        .get_or_fetch(role, || async move { directory.list_profiles(role).await })
        .await
        .map_err(|e| {
            tracing::error!("Failed to load {} pool: {}", role, e);
            error_response(StatusCode::BAD_GATEWAY, "Failed to load candidates", e.to_string())
        })
}

/// Explain a single match
///
/// POST /api/v1/match/explain
async fn explain(
    state: web::Data<AppState>,
    req: web::Json<ExplainRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let requester = normalize_profile(req.requester);
    let candidate = normalize_profile(req.candidate);
    let reason = state.recommender.explain_match(&requester, &candidate);

    HttpResponse::Ok().json(ExplainResponse { reason })
}

/// Compare two unit sets
///
/// POST /api/v1/units/compare
///
/// Request body:
/// ```json
/// { "unitsA": ["FIT2004", "FIT2014"], "unitsB": ["FIT2004", "FIT3171"] }
/// ```
async fn compare_units(
    state: web::Data<AppState>,
    req: web::Json<CompareUnitsRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(state.recommender.compare_units(&req.units_a, &req.units_b))
}

/// Drop cached candidate pools so the next request refetches them
///
/// POST /api/v1/cache/invalidate
async fn invalidate_cache(state: web::Data<AppState>) -> impl Responder {
    state.cache.invalidate_all().await;
    tracing::info!("Candidate pool cache invalidated");

    HttpResponse::Ok().json(state.cache.stats())
}
