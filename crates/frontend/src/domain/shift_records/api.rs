use contracts::records::{FieldError, ShiftRecord, ShiftRecordDraft, Summary};
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

/// How an insert can fail, split so the form can keep field messages inline
/// and show everything else as a banner.
#[derive(Debug, Clone)]
pub enum SaveError {
    Fields(Vec<FieldError>),
    Message(String),
}

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch all records of the signed-in account, date descending
pub async fn fetch_records() -> Result<Vec<ShiftRecord>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/records", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch records: {}", response.status()));
    }

    response
        .json::<Vec<ShiftRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new record from a validated draft
pub async fn create_record(draft: &ShiftRecordDraft) -> Result<ShiftRecord, SaveError> {
    let auth_header = get_auth_header()
        .ok_or_else(|| SaveError::Message("Not authenticated".to_string()))?;

    let response = Request::post(&format!("{}/api/records", api_base()))
        .header("Authorization", &auth_header)
        .json(draft)
        .map_err(|e| SaveError::Message(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SaveError::Message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        if let Ok(body) = response.json::<serde_json::Value>().await {
            // Server-side re-validation mirrors the client rules
            if let Some(fields) = body.get("fields") {
                if let Ok(fields) = serde_json::from_value::<Vec<FieldError>>(fields.clone()) {
                    return Err(SaveError::Fields(fields));
                }
            }
            if let Some(message) = body.get("error").and_then(|v| v.as_str()) {
                return Err(SaveError::Message(message.to_string()));
            }
        }
        return Err(SaveError::Message(format!("Save failed: {}", status)));
    }

    response
        .json::<ShiftRecord>()
        .await
        .map_err(|e| SaveError::Message(format!("Failed to parse response: {}", e)))
}

/// Delete a record by id
pub async fn delete_record(id: Uuid) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&format!("{}/api/records/{}", api_base(), id))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete record: {}", response.status()));
    }

    Ok(())
}

/// Fetch the account-wide summary
pub async fn fetch_summary() -> Result<Summary, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/records/summary", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch summary: {}", response.status()));
    }

    response
        .json::<Summary>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
