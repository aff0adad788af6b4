use crate::models::{ScoringWeights, UniversityRecord, UserProfile};

/// Upper bound on the GPA ratio, so over-qualification earns at most 110%
pub const GPA_RATIO_CAP: f64 = 1.1;

/// Test score distance over which proximity decays linearly to zero
pub const TEST_SCORE_WINDOW: f64 = 200.0;

/// Rank at or beyond which the rank component is zero
pub const RANK_HORIZON: f64 = 100.0;

/// Calculate a match score for a university given a student profile
///
/// Scoring formula (default weights):
/// score = (
///     gpa_ratio * 30 +             # min(gpa / gpa_competitive, 1.1)
///     affordability * 25 +         # 1 - tuition / budget
///     test_proximity * 20 +        # 1 - |score - benchmark| / 200
///     rank_score * 25              # 1 - world_rank / 100
/// )
///
/// Components with a non-positive denominator contribute 0. The result is
/// rounded to 2 decimals and may reach 103 through the GPA cap.
pub fn calculate_match_score(
    record: &UniversityRecord,
    profile: &UserProfile,
    weights: &ScoringWeights,
) -> f64 {
    let gpa_score = calculate_gpa_score(profile.gpa, record.competitive_gpa());
    let affordability_score = calculate_affordability_score(record.tuition(), profile.budget);
    let test_score = calculate_test_proximity(profile.test_score, record.benchmark());
    let rank_score = calculate_rank_score(record.rank_for_scoring());

    let total_score = gpa_score * weights.gpa
        + affordability_score * weights.affordability
        + test_score * weights.test_score
        + rank_score * weights.world_rank;

    round_to_cents(total_score)
}

/// GPA ratio against the competitive GPA (0-1.1)
#[inline]
fn calculate_gpa_score(gpa: f64, gpa_competitive: f64) -> f64 {
    if gpa_competitive <= 0.0 {
        return 0.0;
    }
    (gpa / gpa_competitive).min(GPA_RATIO_CAP)
}

/// Share of the budget left after tuition (0-1)
/// Zero when over budget or when the budget is not positive
#[inline]
fn calculate_affordability_score(tuition: f64, budget: f64) -> f64 {
    if budget <= 0.0 || tuition > budget {
        return 0.0;
    }
    1.0 - tuition / budget
}

/// Linear proximity of the test score to the benchmark (0-1)
#[inline]
fn calculate_test_proximity(test_score: i64, benchmark: i64) -> f64 {
    if benchmark <= 0 {
        return 0.0;
    }
    let diff = (test_score - benchmark).abs() as f64;
    (1.0 - diff / TEST_SCORE_WINDOW).max(0.0)
}

/// Rank score (0-1), better ranks score higher
#[inline]
fn calculate_rank_score(world_rank: i64) -> f64 {
    (1.0 - world_rank as f64 / RANK_HORIZON).max(0.0)
}

/// Round to 2 decimals, halves to even
#[inline]
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn create_test_record() -> UniversityRecord {
        UniversityRecord {
            name: "Test University".to_string(),
            country: "Canada".to_string(),
            gpa_min: Some(3.0),
            gpa_competitive: Some(3.6),
            tuition_usd: Some(30000.0),
            test_benchmark: Some(1380),
            ielts_min: Some(6.5),
            world_rank: Some(40),
            top_sectors: Some("Engineering".to_string()),
            extra: Map::new(),
        }
    }

    fn create_test_profile() -> UserProfile {
        UserProfile {
            gpa: 3.5,
            budget: 40000.0,
            test_score: 1400,
            ielts_score: 7.0,
            preferred_countries: vec![],
            preferred_sectors: vec![],
        }
    }

    #[test]
    fn test_calculate_match_score() {
        let record = create_test_record();
        let profile = create_test_profile();
        let weights = ScoringWeights::default();

        // 29.1667 + 6.25 + 18.0 + 15.0
        let score = calculate_match_score(&record, &profile, &weights);
        assert_eq!(score, 68.42);
    }

    #[test]
    fn test_half_cent_rounds_to_even() {
        let mut record = create_test_record();
        record.gpa_competitive = Some(4.0);
        record.tuition_usd = Some(20000.0);
        record.test_benchmark = Some(1400);
        record.world_rank = Some(50);
        let mut profile = create_test_profile();
        profile.gpa = 3.75;

        // 28.125 + 12.5 + 20.0 + 12.5 = 73.125
        let score = calculate_match_score(&record, &profile, &ScoringWeights::default());
        assert_eq!(score, 73.12);

        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(68.416_666), 68.42);
    }

    #[test]
    fn test_gpa_score_capped() {
        assert_eq!(calculate_gpa_score(4.0, 2.0), GPA_RATIO_CAP);
        assert_eq!(calculate_gpa_score(3.0, 3.0), 1.0);
        assert_eq!(calculate_gpa_score(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_affordability_score() {
        assert_eq!(calculate_affordability_score(0.0, 40000.0), 1.0);
        assert_eq!(calculate_affordability_score(30000.0, 40000.0), 0.25);

        // Exactly at budget = zero
        assert_eq!(calculate_affordability_score(40000.0, 40000.0), 0.0);

        // Over budget or no budget = zero
        assert_eq!(calculate_affordability_score(50000.0, 40000.0), 0.0);
        assert_eq!(calculate_affordability_score(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_test_proximity() {
        assert_eq!(calculate_test_proximity(1400, 1400), 1.0);
        assert_eq!(calculate_test_proximity(1300, 1400), 0.5);
        assert_eq!(calculate_test_proximity(1500, 1400), 0.5);

        // Beyond the window = floored at zero
        assert_eq!(calculate_test_proximity(1000, 1400), 0.0);

        // Missing benchmark = zero
        assert_eq!(calculate_test_proximity(1400, 0), 0.0);
    }

    #[test]
    fn test_rank_score() {
        assert!((calculate_rank_score(1) - 0.99).abs() < 1e-9);
        assert_eq!(calculate_rank_score(100), 0.0);
        assert_eq!(calculate_rank_score(250), 0.0);
    }

    #[test]
    fn test_missing_fields_score_zero() {
        let record = UniversityRecord {
            name: "Bare".to_string(),
            country: String::new(),
            gpa_min: None,
            gpa_competitive: None,
            tuition_usd: None,
            test_benchmark: None,
            ielts_min: None,
            world_rank: None,
            top_sectors: None,
            extra: Map::new(),
        };
        let mut profile = create_test_profile();
        profile.budget = 0.0;

        let score = calculate_match_score(&record, &profile, &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_maximum_score_exceeds_100_via_gpa_cap() {
        let mut record = create_test_record();
        record.gpa_competitive = Some(2.0);
        record.tuition_usd = Some(0.0);
        record.test_benchmark = Some(1400);
        record.world_rank = Some(0);
        let mut profile = create_test_profile();
        profile.gpa = 4.0;

        let score = calculate_match_score(&record, &profile, &ScoringWeights::default());
        assert_eq!(score, 103.0);
    }
}
