use crate::models::{UniversityQuery, UniversityRecord};

/// Test score tolerance for general-purpose filtering
pub const DEFAULT_TEST_TOLERANCE: i64 = 50;

/// More lenient tolerance used by the recommendation pipeline
pub const RECOMMENDATION_TEST_TOLERANCE: i64 = 100;

/// Check if the student's GPA meets the university minimum
#[inline]
pub fn meets_gpa(record: &UniversityRecord, gpa: f64) -> bool {
    gpa >= record.min_gpa()
}

/// Check if tuition fits within the budget (inclusive)
#[inline]
pub fn within_budget(record: &UniversityRecord, budget: f64) -> bool {
    record.tuition() <= budget
}

/// Check the test score against the university benchmark
///
/// Passes when the score is within `tolerance` of the benchmark, or at or
/// above it. Scores above the benchmark are never excluded, however far off.
#[inline]
pub fn meets_test_score(record: &UniversityRecord, test_score: i64, tolerance: i64) -> bool {
    let benchmark = record.benchmark();
    (benchmark - test_score).abs() <= tolerance || test_score >= benchmark
}

/// Check if the IELTS score meets the university minimum
#[inline]
pub fn meets_ielts(record: &UniversityRecord, ielts_score: f64) -> bool {
    ielts_score >= record.min_ielts()
}

/// Check country membership; an empty allow-list accepts everything
#[inline]
pub fn in_countries(record: &UniversityRecord, countries: &[String]) -> bool {
    countries.is_empty() || countries.iter().any(|c| *c == record.country)
}

/// Check if any sector keyword appears in the university's top sectors
///
/// Matching is a case-insensitive substring test. An empty keyword list
/// accepts everything.
pub fn matches_sectors(record: &UniversityRecord, sectors: &[String]) -> bool {
    if sectors.is_empty() {
        return true;
    }

    let top_sectors = record.sectors().to_lowercase();
    sectors
        .iter()
        .any(|sector| top_sectors.contains(&sector.to_lowercase()))
}

/// Check a record against the listing query constraints
///
/// These apply to raw listings only: no tolerance, no scoring.
pub fn matches_listing_query(record: &UniversityRecord, query: &UniversityQuery) -> bool {
    if let Some(country) = query.country.as_deref().filter(|c| !c.is_empty()) {
        if record.country != country {
            return false;
        }
    }

    if let Some(max_tuition) = query.max_tuition {
        if record.tuition() > max_tuition {
            return false;
        }
    }

    if let Some(min_rank) = query.min_rank {
        if record.rank_for_listing() < min_rank {
            return false;
        }
    }

    if let Some(max_rank) = query.max_rank {
        if record.rank_for_listing() > max_rank {
            return false;
        }
    }

    true
}

/// Keep records whose GPA minimum is met
pub fn filter_by_gpa(records: Vec<&UniversityRecord>, gpa: f64) -> Vec<&UniversityRecord> {
    records.into_iter().filter(|r| meets_gpa(r, gpa)).collect()
}

/// Keep records whose tuition fits the budget
pub fn filter_by_budget(records: Vec<&UniversityRecord>, budget: f64) -> Vec<&UniversityRecord> {
    records.into_iter().filter(|r| within_budget(r, budget)).collect()
}

/// Keep records whose test benchmark is compatible with the score
pub fn filter_by_test_score(
    records: Vec<&UniversityRecord>,
    test_score: i64,
    tolerance: i64,
) -> Vec<&UniversityRecord> {
    records
        .into_iter()
        .filter(|r| meets_test_score(r, test_score, tolerance))
        .collect()
}

/// Keep records whose IELTS minimum is met
pub fn filter_by_ielts(records: Vec<&UniversityRecord>, ielts_score: f64) -> Vec<&UniversityRecord> {
    records.into_iter().filter(|r| meets_ielts(r, ielts_score)).collect()
}

/// Keep records located in one of the given countries
pub fn filter_by_country<'a>(
    records: Vec<&'a UniversityRecord>,
    countries: &[String],
) -> Vec<&'a UniversityRecord> {
    if countries.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| in_countries(r, countries)).collect()
}

/// Keep records strong in at least one of the given sectors
pub fn filter_by_sectors<'a>(
    records: Vec<&'a UniversityRecord>,
    sectors: &[String],
) -> Vec<&'a UniversityRecord> {
    if sectors.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| matches_sectors(r, sectors)).collect()
}
