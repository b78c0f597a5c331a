use crate::dtos::{ErrorResponse, MessageResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

pub const HCP_COLLECTION: &str = "hcp";
pub const REFERAL_COLLECTION: &str = "referal";

// An empty collection is a 200 with `[]`, and failures only expose the
// error text.
async fn fetch_all(
    state: &AppState,
    collection: &str,
    failure: &str,
) -> Result<Json<Vec<Value>>, AppError> {
    let documents = state
        .store
        .find_all(collection)
        .await
        .map_err(|e| AppError::query_failure(failure, e.message()))?;

    Ok(Json(documents))
}

/// `GET /fetch-data`
#[utoipa::path(
    get,
    path = "/fetch-data",
    responses(
        (status = 200, description = "JSON array of every hcp document, `[]` when empty"),
        (status = 500, description = "The read failed; `error` is the error text", body = ErrorResponse)
    ),
    tag = "HCP Data"
)]
pub async fn fetch_hcp_data(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    fetch_all(&state, HCP_COLLECTION, "Error fetching HCP data").await
}

/// `GET /fetch-referal-data`
#[utoipa::path(
    get,
    path = "/fetch-referal-data",
    responses(
        (status = 200, description = "JSON array of every referal document, `[]` when empty"),
        (status = 500, description = "The read failed; `error` is the error text", body = ErrorResponse)
    ),
    tag = "HCP Data"
)]
pub async fn fetch_referal_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, AppError> {
    fetch_all(&state, REFERAL_COLLECTION, "Error fetching referal data").await
}

/// `GET /test`: liveness acknowledgement, independent of the store.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "The API is up", body = MessageResponse)
    ),
    tag = "Observability"
)]
pub async fn api_test() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "API is working!".to_string(),
    })
}
