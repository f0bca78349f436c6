use axum::{extract::Query, Json};
use validator::Validate;

use crate::dto::{
    split_symptoms, MoodPreviewQuery, MoodPreviewResponse, StrategiesQuery,
    SymptomVocabularyResponse,
};
use crate::error::{AppError, AppResult};
use crate::models::symptom::VOCABULARY;
use crate::services::strategies::StrategyPlan;

fn to_rating(raw: i32) -> AppResult<u8> {
    u8::try_from(raw).map_err(|_| AppError::Validation("Rating must be between 0 and 10".into()))
}

/// Emoji and color for the rating input as the user moves it.
pub async fn preview(Query(query): Query<MoodPreviewQuery>) -> AppResult<Json<MoodPreviewResponse>> {
    query.validate()?;
    Ok(Json(to_rating(query.rating)?.into()))
}

pub async fn list_symptoms() -> Json<SymptomVocabularyResponse> {
    Json(SymptomVocabularyResponse {
        categories: VOCABULARY,
    })
}

pub async fn get_strategies(Query(query): Query<StrategiesQuery>) -> AppResult<Json<StrategyPlan>> {
    query.validate()?;
    let rating = to_rating(query.rating)?;
    let symptoms = split_symptoms(query.symptoms.as_deref());
    Ok(Json(StrategyPlan::build(rating, &symptoms)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_support::test_app;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let (app, _) = test_app().await;
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_preview() {
        let (status, body) = get("/api/mood/preview?rating=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bucket"], "sad");
        assert_eq!(body["emoji"], "😢");

        let (status, _) = get("/api/mood/preview?rating=42").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_symptoms() {
        let (status, body) = get("/api/symptoms").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][0]["name"], "Emotional");
        assert_eq!(body["categories"][2]["symptoms"][0]["id"], "work");
    }

    #[tokio::test]
    async fn test_strategies() {
        let (status, body) = get("/api/strategies?rating=4&symptoms=headache,fatigue,insomnia").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Take Care of Yourself");
        assert_eq!(body["symptom_strategies"].as_array().unwrap().len(), 2);
        assert_eq!(body["symptom_strategies"][0]["label"], "Headache");
    }

    #[tokio::test]
    async fn test_strategies_collapse_repeated_symptoms() {
        let (status, body) = get("/api/strategies?rating=5&symptoms=work,work,social").await;
        assert_eq!(status, StatusCode::OK);
        let symptoms: Vec<&str> = body["symptom_strategies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["symptom"].as_str().unwrap())
            .collect();
        assert_eq!(symptoms, vec!["work", "social"]);
    }
}
