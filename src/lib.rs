//! UniRec - university recommendation service
//!
//! This library provides the filter-then-rank pipeline that recommends
//! universities for a student profile, along with the HTTP layer serving it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Recommender, UniversityStore};
pub use crate::models::{ScoredUniversity, ScoringWeights, UniversityRecord, UserProfile};
pub use crate::services::{load_store, DatasetError};
