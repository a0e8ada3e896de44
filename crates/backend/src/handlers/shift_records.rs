use axum::{
    extract::{Json, Path},
    http::StatusCode,
};
use contracts::records::{ShiftRecord, ShiftRecordDraft, Summary};
use serde_json::json;

use crate::domain::shift_records::{service, StoreError};
use crate::system::auth::extractor::CurrentAccount;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn store_error_response(err: StoreError) -> ErrorResponse {
    match err {
        StoreError::DuplicateDate(date) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": format!("A record for {} already exists", date) })),
        ),
        StoreError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Record not found" })),
        ),
        StoreError::Validation(fields) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Validation failed", "fields": fields })),
        ),
        StoreError::Database(e) => {
            tracing::error!("Record store failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Storage operation failed" })),
            )
        }
    }
}

fn account_id(claims: &contracts::auth::TokenClaims) -> Result<uuid::Uuid, ErrorResponse> {
    uuid::Uuid::parse_str(&claims.sub).map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid account id in token" })),
        )
    })
}

/// GET /api/records
pub async fn list(
    CurrentAccount(claims): CurrentAccount,
) -> Result<Json<Vec<ShiftRecord>>, ErrorResponse> {
    let account = account_id(&claims)?;
    service::list(account)
        .await
        .map(Json)
        .map_err(store_error_response)
}

/// POST /api/records
pub async fn create(
    CurrentAccount(claims): CurrentAccount,
    Json(draft): Json<ShiftRecordDraft>,
) -> Result<(StatusCode, Json<ShiftRecord>), ErrorResponse> {
    let account = account_id(&claims)?;
    service::insert(account, draft)
        .await
        .map(|record| (StatusCode::CREATED, Json(record)))
        .map_err(store_error_response)
}

/// DELETE /api/records/:id
pub async fn delete(
    CurrentAccount(claims): CurrentAccount,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let account = account_id(&claims)?;
    let record_id = uuid::Uuid::parse_str(&id).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid record id" })),
        )
    })?;

    service::delete(account, record_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(store_error_response)
}

/// GET /api/records/summary
pub async fn summary(
    CurrentAccount(claims): CurrentAccount,
) -> Result<Json<Summary>, ErrorResponse> {
    let account = account_id(&claims)?;
    service::summary(account)
        .await
        .map(Json)
        .map_err(store_error_response)
}
