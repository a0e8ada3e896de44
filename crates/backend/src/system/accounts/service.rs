use anyhow::Result;
use chrono::Utc;

use super::{repository, Account};
use crate::system::auth::password;

/// Sign up a new account
pub async fn register(username: &str, plain_password: &str) -> Result<Account> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    password::validate_password_strength(plain_password)?;
    let password_hash = password::hash_password(plain_password)?;

    let now = Utc::now().to_rfc3339();
    let account = Account {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&account, &password_hash).await?;

    Ok(account)
}

/// Get account by ID
pub async fn get_by_id(id: &str) -> Result<Option<Account>> {
    repository::get_by_id(id).await
}

/// Verify account credentials (for login)
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<Account>> {
    let account = match repository::get_by_username(username).await? {
        Some(a) => a,
        None => return Ok(None),
    };

    let password_hash = repository::get_password_hash(&account.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !crate::system::auth::password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(&account.id).await;

    Ok(Some(account))
}
