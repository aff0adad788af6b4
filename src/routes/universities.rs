use actix_web::{web, HttpResponse, Responder};

use crate::core::{compute_stats, list_countries, Recommender};
use crate::models::{
    CountriesResponse, HealthResponse, RecommendRequest, RecommendResponse, StatsResponse,
    UniversitiesResponse, UniversityQuery,
};
use crate::routes::error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    /// Number of recommendations returned per request
    pub max_results: usize,
}

/// Configure all university-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/universities", web::get().to(get_universities))
        .route("/recommend", web::post().to(recommend))
        .route("/countries", web::get().to(get_countries))
        .route("/stats", web::get().to(get_stats));
}

/// API information endpoint
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "University Recommendation API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/": "API information",
            "/health": "Service health",
            "/api/universities": "Get all universities (supports filtering)",
            "/api/recommend": "Get personalized recommendations (POST)",
            "/api/countries": "Get list of all countries",
            "/api/stats": "Get dataset statistics",
        }
    }))
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        universities_loaded: state.recommender.store().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Fallback for unknown paths
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// List universities endpoint
///
/// GET /api/universities?country=&max_tuition=&min_rank=&max_rank=
async fn get_universities(
    state: web::Data<AppState>,
    query: web::Query<UniversityQuery>,
) -> impl Responder {
    let universities = state.recommender.list_universities(&query);

    HttpResponse::Ok().json(UniversitiesResponse {
        success: true,
        count: universities.len(),
        universities,
    })
}

/// Recommendation endpoint
///
/// POST /api/recommend
///
/// Request body:
/// ```json
/// {
///   "gpa": 3.5,
///   "budget": 40000,
///   "test_score": 1400,
///   "ielts_score": 7.0,
///   "preferred_countries": ["United States", "United Kingdom"],
///   "preferred_sectors": ["Engineering", "Computer Science"]
/// }
/// ```
///
/// An empty body (`{}`) is rejected with "Request body must be JSON".
async fn recommend(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, ApiError> {
    let profile = RecommendRequest::from_payload(body.into_inner())
        .and_then(RecommendRequest::into_profile)
        .map_err(|e| {
            tracing::info!("Rejected recommendation request: {}", e);
            e
        })?;

    let mut recommendations = state.recommender.recommend(&profile);
    let total_matches = recommendations.len();
    recommendations.truncate(state.max_results);

    tracing::info!(
        "Returning {} recommendations (from {} matches)",
        recommendations.len(),
        total_matches
    );

    Ok(HttpResponse::Ok().json(RecommendResponse {
        success: true,
        count: recommendations.len(),
        total_matches,
        user_profile: profile,
        recommendations,
    }))
}

/// Country listing endpoint
///
/// GET /api/countries
async fn get_countries(state: web::Data<AppState>) -> impl Responder {
    let countries = list_countries(state.recommender.all_universities());

    HttpResponse::Ok().json(CountriesResponse {
        success: true,
        count: countries.len(),
        countries,
    })
}

/// Dataset statistics endpoint
///
/// GET /api/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats: compute_stats(state.recommender.all_universities()),
    })
}
