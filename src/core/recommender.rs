use crate::core::{
    filters::{
        filter_by_budget, filter_by_country, filter_by_gpa, filter_by_ielts, filter_by_sectors,
        filter_by_test_score, matches_listing_query, RECOMMENDATION_TEST_TOLERANCE,
    },
    scoring::calculate_match_score,
    store::UniversityStore,
};
use crate::models::{ScoredUniversity, ScoringWeights, UniversityQuery, UniversityRecord, UserProfile};

/// Main recommendation orchestrator - implements the filter-then-rank pipeline
///
/// # Pipeline Stages
/// 1. Hard requirements: GPA, budget, test score, IELTS
/// 2. Optional preferences: countries, sectors
/// 3. Scoring
/// 4. Ranking (descending score, ties keep dataset order)
#[derive(Debug, Clone)]
pub struct Recommender {
    store: UniversityStore,
    weights: ScoringWeights,
    test_tolerance: i64,
}

impl Recommender {
    pub fn new(store: UniversityStore, weights: ScoringWeights, test_tolerance: i64) -> Self {
        Self {
            store,
            weights,
            test_tolerance,
        }
    }

    pub fn with_defaults(store: UniversityStore) -> Self {
        Self::new(store, ScoringWeights::default(), RECOMMENDATION_TEST_TOLERANCE)
    }

    /// Every university in the dataset, in dataset order
    pub fn all_universities(&self) -> &[UniversityRecord] {
        self.store.records()
    }

    pub fn store(&self) -> &UniversityStore {
        &self.store
    }

    /// Raw listing with the query's AND-combined constraints applied
    pub fn list_universities(&self, query: &UniversityQuery) -> Vec<UniversityRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| matches_listing_query(record, query))
            .cloned()
            .collect()
    }

    /// Recommend universities for a validated profile
    ///
    /// Returns every surviving university, best match first. Truncating to a
    /// top N is left to the caller.
    pub fn recommend(&self, profile: &UserProfile) -> Vec<ScoredUniversity> {
        let total = self.store.len();

        // Stage 1: Hard requirements, always applied in this order
        let candidates: Vec<&UniversityRecord> = self.store.records().iter().collect();
        let candidates = filter_by_gpa(candidates, profile.gpa);
        let candidates = filter_by_budget(candidates, profile.budget);
        let candidates = filter_by_test_score(candidates, profile.test_score, self.test_tolerance);
        let mut candidates = filter_by_ielts(candidates, profile.ielts_score);

        tracing::debug!(
            "{} of {} universities meet hard requirements",
            candidates.len(),
            total
        );

        // Stage 2: Optional preferences
        if !profile.preferred_countries.is_empty() {
            candidates = filter_by_country(candidates, &profile.preferred_countries);
        }
        if !profile.preferred_sectors.is_empty() {
            candidates = filter_by_sectors(candidates, &profile.preferred_sectors);
        }

        // Stage 3: Score copies of the survivors
        let mut ranked: Vec<ScoredUniversity> = candidates
            .into_iter()
            .map(|record| ScoredUniversity {
                match_score: calculate_match_score(record, profile, &self.weights),
                university: record.clone(),
            })
            .collect();

        // Stage 4: Sort by score (descending); sort_by is stable so ties keep dataset order
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!("{} universities ranked", ranked.len());

        ranked
    }
}
