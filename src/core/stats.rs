use std::collections::BTreeSet;

use crate::core::scoring::round_to_cents;
use crate::models::{DatasetStats, FieldRange, UniversityRecord};

/// Sorted distinct non-empty country names
pub fn list_countries(records: &[UniversityRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.country.is_empty())
        .map(|r| r.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Compute per-field statistics over the dataset
///
/// Missing values count as 0, mirroring the record accessors.
pub fn compute_stats(records: &[UniversityRecord]) -> DatasetStats {
    DatasetStats {
        total_universities: records.len(),
        countries_count: list_countries(records).len(),
        tuition_range: field_range(records.iter().map(|r| r.tuition())),
        gpa_min_range: field_range(records.iter().map(|r| r.min_gpa())),
        gpa_competitive_range: field_range(records.iter().map(|r| r.competitive_gpa())),
        test_score_range: field_range(records.iter().map(|r| r.benchmark() as f64)),
        ielts_range: field_range(records.iter().map(|r| r.min_ielts())),
    }
}

/// Min, max and 2-decimal mean; all zero for an empty input
fn field_range(values: impl Iterator<Item = f64>) -> FieldRange {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values {
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    if count == 0 {
        return FieldRange::default();
    }

    FieldRange {
        min,
        max,
        average: round_to_cents(sum / count as f64),
    }
}
