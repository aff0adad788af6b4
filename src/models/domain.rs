use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// World rank assumed for scoring when a record has none (contributes 0)
pub const SCORING_DEFAULT_RANK: i64 = 100;

/// World rank assumed by the listing range filters when a record has none
pub const LISTING_DEFAULT_RANK: i64 = 999;

/// University record as stored in the dataset
///
/// Numeric admission fields are optional in the source data. Read them
/// through the accessor methods, which apply the documented defaults.
/// Any fields not modelled here are kept in `extra` and serialized back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa_competitive: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuition_usd: Option<f64>,
    #[serde(
        default,
        deserialize_with = "integral_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub test_benchmark: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ielts_min: Option<f64>,
    #[serde(
        default,
        deserialize_with = "integral_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub world_rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_sectors: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accept an integer written either as `1380` or `1380.0`
fn integral_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => Ok(Some(f as i64)),
        _ => Err(de::Error::custom(format!("expected an integer, found {}", number))),
    }
}

impl UniversityRecord {
    /// Minimum admissible GPA, defaulting to 0
    pub fn min_gpa(&self) -> f64 {
        self.gpa_min.unwrap_or(0.0)
    }

    /// Competitive GPA, defaulting to 0 (disables the GPA score component)
    pub fn competitive_gpa(&self) -> f64 {
        self.gpa_competitive.unwrap_or(0.0)
    }

    /// Annual tuition in USD, defaulting to 0
    pub fn tuition(&self) -> f64 {
        self.tuition_usd.unwrap_or(0.0)
    }

    /// Standardized test benchmark, defaulting to 0
    pub fn benchmark(&self) -> i64 {
        self.test_benchmark.unwrap_or(0)
    }

    /// Minimum IELTS band, defaulting to 0
    pub fn min_ielts(&self) -> f64 {
        self.ielts_min.unwrap_or(0.0)
    }

    /// World rank used by scoring, defaulting to [`SCORING_DEFAULT_RANK`]
    pub fn rank_for_scoring(&self) -> i64 {
        self.world_rank.unwrap_or(SCORING_DEFAULT_RANK)
    }

    /// World rank used by listing queries, defaulting to [`LISTING_DEFAULT_RANK`]
    pub fn rank_for_listing(&self) -> i64 {
        self.world_rank.unwrap_or(LISTING_DEFAULT_RANK)
    }

    /// Subject keywords, empty when absent
    pub fn sectors(&self) -> &str {
        self.top_sectors.as_deref().unwrap_or("")
    }
}

/// Student profile driving a single recommendation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gpa: f64,
    pub budget: f64,
    pub test_score: i64,
    pub ielts_score: f64,
    #[serde(default)]
    pub preferred_countries: Vec<String>,
    #[serde(default)]
    pub preferred_sectors: Vec<String>,
}

/// A university annotated with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredUniversity {
    #[serde(flatten)]
    pub university: UniversityRecord,
    pub match_score: f64,
}

/// Optional filters for raw dataset listing, AND-combined
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniversityQuery {
    pub country: Option<String>,
    pub max_tuition: Option<f64>,
    pub min_rank: Option<i64>,
    pub max_rank: Option<i64>,
}

/// Scoring weights for the four match score components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub gpa: f64,
    pub affordability: f64,
    pub test_score: f64,
    pub world_rank: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gpa: 30.0,
            affordability: 25.0,
            test_score: 20.0,
            world_rank: 25.0,
        }
    }
}

/// Minimum, maximum and mean of one numeric dataset field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Summary statistics over the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_universities: usize,
    pub countries_count: usize,
    pub tuition_range: FieldRange,
    pub gpa_min_range: FieldRange,
    pub gpa_competitive_range: FieldRange,
    pub test_score_range: FieldRange,
    pub ielts_range: FieldRange,
}
