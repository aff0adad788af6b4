use serde::{Deserialize, Serialize};
use crate::models::domain::{DatasetStats, ScoredUniversity, UniversityRecord, UserProfile};

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub count: usize,
    pub total_matches: usize,
    pub user_profile: UserProfile,
    pub recommendations: Vec<ScoredUniversity>,
}

/// Response for the university listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversitiesResponse {
    pub success: bool,
    pub count: usize,
    pub universities: Vec<UniversityRecord>,
}

/// Response for the country listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub success: bool,
    pub count: usize,
    pub countries: Vec<String>,
}

/// Response for the dataset statistics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub stats: DatasetStats,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub universities_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub status_code: u16,
}
