use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::dto::{CreateEntryRequest, CreateEntryResponse, HistoryQuery, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::models::mood_entry::MoodEntry;
use crate::services::aggregate::{top_symptoms, HistorySummary, SummaryOptions};
use crate::services::strategies::StrategyPlan;
use crate::AppState;

pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateEntryRequest>,
) -> AppResult<(StatusCode, Json<CreateEntryResponse>)> {
    body.validate()?;

    let rating = u8::try_from(body.rating)
        .map_err(|_| AppError::Validation("Rating must be between 0 and 10".into()))?;
    let entry = MoodEntry::new(rating, body.symptoms, Utc::now());

    let history = match state.store.append(entry.clone()).await {
        Ok(history) => history,
        Err(e) => {
            tracing::error!(error = %e, rating, "Error saving mood entry");
            return Err(e);
        }
    };

    tracing::debug!(rating, entries = history.len(), "Mood entry recorded");

    let strategies = StrategyPlan::build(entry.rating, &entry.symptoms);

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            entry,
            total_entries: history.len(),
            top_symptoms: top_symptoms(&history, state.config.top_symptoms_limit),
            strategies,
        }),
    ))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistorySummary>> {
    let entries = match state.store.load().await {
        Ok(entries) => entries,
        // Storage unavailable reads as no history. Malformed data still fails.
        Err(AppError::Storage(e)) => {
            tracing::warn!(error = %e, "Error loading mood history, treating as empty");
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let summary = HistorySummary::build(
        &entries,
        SummaryOptions {
            preview_len: state.config.history_preview_len,
            top_k: state.config.top_symptoms_limit,
            show_all: query.show_all,
        },
    );

    Ok(Json(summary))
}

pub async fn clear_history(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    if let Err(e) = state.store.clear().await {
        tracing::error!(error = %e, "Error clearing mood history");
        return Err(e);
    }

    tracing::info!("Mood history cleared");

    Ok(Json(MessageResponse {
        message: "Mood history cleared".into(),
    }))
}
