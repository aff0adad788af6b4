// Integration tests for the recommendation pipeline

use serde_json::Map;
use std::path::Path;
use uni_recommender::core::{Recommender, UniversityStore};
use uni_recommender::models::{UniversityRecord, UserProfile};
use uni_recommender::services::load_store;

fn create_university(
    name: &str,
    country: &str,
    gpa_min: f64,
    tuition: f64,
    world_rank: i64,
    sectors: &str,
) -> UniversityRecord {
    UniversityRecord {
        name: name.to_string(),
        country: country.to_string(),
        gpa_min: Some(gpa_min),
        gpa_competitive: Some(3.6),
        tuition_usd: Some(tuition),
        test_benchmark: Some(1380),
        ielts_min: Some(6.5),
        world_rank: Some(world_rank),
        top_sectors: Some(sectors.to_string()),
        extra: Map::new(),
    }
}

fn create_store() -> UniversityStore {
    UniversityStore::new(vec![
        create_university("Alpha", "Canada", 3.0, 30000.0, 40, "Engineering, Business"),
        create_university("Beta", "Germany", 3.0, 3000.0, 60, "Engineering, Physics"),
        create_university("Gamma", "Canada", 3.8, 20000.0, 10, "Medicine"),
        create_university("Delta", "Japan", 2.5, 45000.0, 20, "Computer Science"),
        create_university("Epsilon", "Japan", 2.8, 10000.0, 90, "Arts"),
    ])
}

fn create_profile() -> UserProfile {
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
fn test_integration_end_to_end_recommendation() {
    let recommender = Recommender::with_defaults(create_store());
    let profile = create_profile();

    let result = recommender.recommend(&profile);
    let names: Vec<&str> = result.iter().map(|r| r.university.name.as_str()).collect();

    // Gamma needs a higher GPA, Delta is over budget. Alpha and Epsilon tie
    // on score and keep dataset order.
    assert_eq!(names, vec!["Beta", "Alpha", "Epsilon"]);
    assert_eq!(result[0].match_score, 80.29);
    assert_eq!(result[1].match_score, 68.42);
    assert_eq!(result[2].match_score, 68.42);

    for r in &result {
        assert!(r.university.tuition() <= profile.budget);
        assert!(profile.gpa >= r.university.min_gpa());
    }
}

#[test]
fn test_recommend_is_deterministic() {
    let recommender = Recommender::with_defaults(create_store());
    let profile = create_profile();

    assert_eq!(recommender.recommend(&profile), recommender.recommend(&profile));
}

#[test]
fn test_empty_preferences_do_not_reduce_results() {
    let recommender = Recommender::with_defaults(create_store());
    let base = recommender.recommend(&create_profile());

    let mut profile = create_profile();
    profile.preferred_countries = vec![];
    profile.preferred_sectors = vec![];

    assert_eq!(recommender.recommend(&profile).len(), base.len());
}

#[test]
fn test_budget_and_gpa_never_violated_across_profiles() {
    let recommender = Recommender::with_defaults(create_store());

    for gpa in [2.0, 2.8, 3.0, 3.5, 4.0] {
        for budget in [0.0, 3000.0, 10000.0, 30000.0, 100000.0] {
            let profile = UserProfile {
                gpa,
                budget,
                ..create_profile()
            };
            for r in recommender.recommend(&profile) {
                assert!(r.university.tuition() <= budget);
                assert!(gpa >= r.university.min_gpa());
            }
        }
    }
}

#[test]
fn test_bundled_dataset_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/universities.json");
    let store = load_store(path).unwrap();

    assert!(!store.is_empty());

    let recommender = Recommender::with_defaults(store);
    let result = recommender.recommend(&create_profile());
    assert!(!result.is_empty());
}
