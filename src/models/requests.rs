use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::domain::UserProfile;

/// Required profile fields, in the order they are checked and reported
const REQUIRED_FIELDS: [&str; 4] = ["gpa", "budget", "test_score", "ielts_score"];

/// Errors raised while turning a request payload into a profile
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request body must be JSON")]
    EmptyBody,

    #[error("Invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    /// Message of the first field failing validation
    #[error("{0}")]
    Invalid(String),
}

impl From<ValidationErrors> for RequestError {
    fn from(errors: ValidationErrors) -> Self {
        RequestError::Invalid(first_validation_message(&errors))
    }
}

/// Message of the first invalid required field, in declaration order
fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    REQUIRED_FIELDS
        .iter()
        .filter_map(|field| {
            field_errors
                .iter()
                .find(|(name, _)| name.to_string() == *field)
                .map(|(_, errs)| *errs)
        })
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Request to compute recommendations
///
/// Required fields are optional here so that a missing field can be
/// reported by name instead of as a JSON parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(min = 0.0, max = 4.0, message = "GPA must be a number between 0 and 4.0"))]
    pub gpa: Option<f64>,
    #[validate(range(min = 0.0, message = "Budget must be a positive number"))]
    pub budget: Option<f64>,
    #[validate(range(
        min = 400,
        max = 1600,
        message = "Test score must be an integer between 400 and 1600"
    ))]
    pub test_score: Option<i64>,
    #[validate(range(min = 0.0, max = 9.0, message = "IELTS score must be a number between 0 and 9"))]
    pub ielts_score: Option<f64>,
    #[serde(default)]
    pub preferred_countries: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_sectors: Option<Vec<String>>,
}

impl RecommendRequest {
    /// Parse a request from a JSON body
    ///
    /// An empty body (`{}`, `[]`, `null`, `0`, `""`, `false`) is rejected as
    /// not being a usable JSON payload before any field is inspected.
    pub fn from_payload(payload: Value) -> Result<Self, RequestError> {
        if is_empty_payload(&payload) {
            return Err(RequestError::EmptyBody);
        }
        Ok(serde_json::from_value(payload)?)
    }

    /// Names of required fields absent from the payload, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.gpa.is_some(),
            self.budget.is_some(),
            self.test_score.is_some(),
            self.ielts_score.is_some(),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(field, _)| *field)
            .collect()
    }

    /// Check presence and ranges, then build the profile
    pub fn into_profile(self) -> Result<UserProfile, RequestError> {
        let (Some(gpa), Some(budget), Some(test_score), Some(ielts_score)) =
            (self.gpa, self.budget, self.test_score, self.ielts_score)
        else {
            return Err(RequestError::MissingFields(self.missing_fields().join(", ")));
        };

        self.validate()?;

        Ok(UserProfile {
            gpa,
            budget,
            test_score,
            ielts_score,
            preferred_countries: self.preferred_countries.unwrap_or_default(),
            preferred_sectors: self.preferred_sectors.unwrap_or_default(),
        })
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
