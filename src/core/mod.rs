// Core algorithm exports
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod stats;
pub mod store;

pub use filters::{
    filter_by_budget, filter_by_country, filter_by_gpa, filter_by_ielts, filter_by_sectors,
    filter_by_test_score, matches_listing_query, DEFAULT_TEST_TOLERANCE,
    RECOMMENDATION_TEST_TOLERANCE,
};
pub use recommender::Recommender;
pub use scoring::calculate_match_score;
pub use stats::{compute_stats, list_countries};
pub use store::UniversityStore;
