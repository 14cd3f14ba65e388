//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::{
    api::types::{AnalyzeRequest, RecognizeRequest, RecognizeResponse, TermDto},
    pipeline::report::DocumentReport,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn internal(err: anyhow::Error) -> (StatusCode, String) {
    warn!(error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_terms(State(state): State<AppState>) -> Json<Vec<TermDto>> {
    let terms = state
        .analyzer
        .engine()
        .definitions()
        .iter()
        .map(|(term, definition)| TermDto {
            term: term.clone(),
            definition: definition.clone(),
        })
        .collect();
    Json(terms)
}

pub async fn recognize(
    State(state): State<AppState>,
    Json(request): Json<RecognizeRequest>,
) -> ApiResult<RecognizeResponse> {
    let found = state
        .analyzer
        .recognize(&request.text)
        .await
        .map_err(internal)?;
    Ok(Json(RecognizeResponse {
        terms: found.to_records(),
    }))
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<DocumentReport> {
    let report = state
        .analyzer
        .analyze(request.source, &request.text, request.limit)
        .await
        .map_err(internal)?;
    Ok(Json(report))
}
