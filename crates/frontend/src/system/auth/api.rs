use contracts::auth::{
    AccountInfo, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(match response.status() {
            401 => "Wrong username or password".to_string(),
            status => format!("Login failed: {}", status),
        });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new account
pub async fn register(username: String, password: String) -> Result<(), String> {
    let request = RegisterRequest { username, password };

    let response = Request::post(&format!("{}/api/auth/register", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // The backend reports the reason (taken username, weak password)
        if let Ok(body) = response.json::<serde_json::Value>().await {
            if let Some(message) = body.get("error").and_then(|v| v.as_str()) {
                return Err(message.to_string());
            }
        }
        return Err(format!("Sign-up failed: {}", response.status()));
    }

    Ok(())
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/auth/refresh", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/auth/logout", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Get current account info
pub async fn get_current_account(access_token: &str) -> Result<AccountInfo, String> {
    let response = Request::get(&format!("{}/api/auth/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current account failed: {}", response.status()));
    }

    response
        .json::<AccountInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
