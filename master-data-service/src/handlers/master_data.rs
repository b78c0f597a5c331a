use crate::dtos::{ErrorResponse, MessageResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

pub const MASTER_COLLECTION: &str = "master";

/// `GET /fetch-master-data`: every document of `master`, or 404 when the
/// collection is empty. Failures carry the full error object.
#[utoipa::path(
    get,
    path = "/fetch-master-data",
    responses(
        (status = 200, description = "JSON array of every master document, in store order"),
        (status = 404, description = "The master collection is empty", body = MessageResponse),
        (status = 500, description = "The read failed; `error` is the error object", body = ErrorResponse)
    ),
    tag = "Master Data"
)]
pub async fn fetch_master_data(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let documents = state
        .store
        .find_all(MASTER_COLLECTION)
        .await
        .map_err(|e| AppError::query_failure("Error fetching master data", e.detail()))?;

    if documents.is_empty() {
        return Err(AppError::not_found("No Master Data Found"));
    }

    Ok(Json(documents))
}
