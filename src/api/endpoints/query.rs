//! Health query endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::completion::AnswerGenerate;
use crate::pipeline::reference::ReferenceLookup;

/// Upper bound on query length, matching the chat input limit.
pub const MAX_QUERY_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct HealthQueryRequest {
    pub query: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Accepted for API compatibility; audio handling is out of scope.
    #[serde(default)]
    pub is_voice_input: bool,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_language() -> String {
    "hindi".to_string()
}

fn default_country() -> String {
    "india".to_string()
}

#[derive(Debug, Serialize)]
pub struct HealthQueryResponse {
    pub response: String,
    pub confidence: f64,
    pub sources: Vec<&'static str>,
    pub timestamp: String,
}

/// `POST /process-health-query` — answer a health question.
///
/// Validation failures reject the request before any collaborator is
/// invoked; everything past validation produces a 200 envelope because
/// the processor degrades collaborator failures internally.
pub async fn process<R, G>(
    State(ctx): State<ApiContext<R, G>>,
    Json(req): Json<HealthQueryRequest>,
) -> Result<Json<HealthQueryResponse>, ApiError>
where
    R: ReferenceLookup + 'static,
    G: AnswerGenerate + 'static,
{
    let query = req.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query cannot be empty".into()));
    }
    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Query too long (max {MAX_QUERY_CHARS} chars)"
        )));
    }

    tracing::info!(
        query_chars = query.chars().count(),
        language = %req.language,
        "Processing health query"
    );

    let answer = ctx.processor.process(query, &req.language).await;

    Ok(Json(HealthQueryResponse {
        confidence: answer.confidence(),
        sources: answer.sources(),
        response: answer.text,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_fill_missing_fields() {
        let req: HealthQueryRequest =
            serde_json::from_str(r#"{"query": "I have a fever"}"#).unwrap();
        assert_eq!(req.language, "hindi");
        assert_eq!(req.country, "india");
        assert!(!req.is_voice_input);
    }

    #[test]
    fn request_accepts_all_fields() {
        let req: HealthQueryRequest = serde_json::from_str(
            r#"{"query": "बुखार", "language": "hindi", "is_voice_input": true, "country": "india"}"#,
        )
        .unwrap();
        assert_eq!(req.query, "बुखार");
        assert!(req.is_voice_input);
    }
}
