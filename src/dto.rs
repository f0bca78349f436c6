//! # moodlog — Request/Response DTOs
//!
//! API contract types for the JSON surface.
//!
//! Conventions:
//! - `*Request` / `*Query` → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Validation is expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::mood_entry::MoodEntry;
use crate::models::symptom::{self, SymptomCategory};
use crate::services::classify::MoodBucket;
use crate::services::strategies::StrategyPlan;

// ============================================================================
// Common
// ============================================================================

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn validate_symptom_ids(symptoms: &[String]) -> Result<(), ValidationError> {
    match symptoms.iter().find(|id| !symptom::is_known(id)) {
        None => Ok(()),
        Some(unknown) => {
            let mut err = ValidationError::new("unknown_symptom");
            err.message = Some(format!("Unknown symptom: {}", unknown).into());
            Err(err)
        }
    }
}

/// Splits a comma-separated symptom list, dropping blanks and repeats
/// (first occurrence kept).
pub fn split_symptoms(raw: Option<&str>) -> Vec<String> {
    let mut symptoms: Vec<String> = Vec::new();
    for id in raw.unwrap_or_default().split(',').map(str::trim) {
        if !id.is_empty() && !symptoms.iter().any(|s| s == id) {
            symptoms.push(id.to_string());
        }
    }
    symptoms
}

// ============================================================================
// Mood
// ============================================================================

/// GET /api/mood/preview
#[derive(Debug, Deserialize, Validate)]
pub struct MoodPreviewQuery {
    #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
    pub rating: i32,
}

#[derive(Debug, Serialize)]
pub struct MoodPreviewResponse {
    pub rating: u8,
    pub bucket: MoodBucket,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

impl From<u8> for MoodPreviewResponse {
    fn from(rating: u8) -> Self {
        let bucket = MoodBucket::from_rating(rating);
        Self {
            rating,
            bucket,
            label: bucket.label(),
            emoji: bucket.emoji(),
            color: bucket.color(),
        }
    }
}

// ============================================================================
// Symptoms
// ============================================================================

/// GET /api/symptoms
#[derive(Debug, Serialize)]
pub struct SymptomVocabularyResponse {
    pub categories: &'static [SymptomCategory],
}

// ============================================================================
// Entries
// ============================================================================

/// POST /api/entries
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEntryRequest {
    #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
    pub rating: i32,

    /// Symptom ids from the vocabulary. Default: none
    #[serde(default)]
    #[validate(custom = "validate_symptom_ids")]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub entry: MoodEntry,
    pub total_entries: usize,
    /// Top symptom ids across the updated history
    pub top_symptoms: Vec<String>,
    pub strategies: StrategyPlan,
}

/// GET /api/entries
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Return the full list instead of the preview. Default: false
    #[serde(default)]
    pub show_all: bool,
}

// ============================================================================
// Strategies
// ============================================================================

/// GET /api/strategies
#[derive(Debug, Deserialize, Validate)]
pub struct StrategiesQuery {
    #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
    pub rating: i32,

    /// Comma-separated symptom ids
    pub symptoms: Option<String>,
}
