// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DatasetStats, FieldRange, ScoredUniversity, ScoringWeights, UniversityQuery, UniversityRecord,
    UserProfile, LISTING_DEFAULT_RANK, SCORING_DEFAULT_RANK,
};
pub use requests::{RecommendRequest, RequestError};
pub use responses::{
    CountriesResponse, ErrorResponse, HealthResponse, RecommendResponse, StatsResponse,
    UniversitiesResponse,
};
