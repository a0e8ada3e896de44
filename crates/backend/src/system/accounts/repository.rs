use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::Account;

fn account_from_row(row: &sea_orm::QueryResult) -> Result<Account> {
    Ok(Account {
        id: row.try_get("", "id")?,
        username: row.try_get("", "username")?,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
    })
}

/// Create account with password hash
pub async fn create_with_password(account: &Account, password_hash: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO accounts (id, username, password_hash, created_at, updated_at, last_login_at)
         VALUES (?, ?, ?, ?, ?, ?)",
        [
            account.id.clone().into(),
            account.username.clone().into(),
            password_hash.to_string().into(),
            account.created_at.clone().into(),
            account.updated_at.clone().into(),
            account.last_login_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert account")?;

    Ok(())
}

/// Get account by ID
pub async fn get_by_id(id: &str) -> Result<Option<Account>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, created_at, updated_at, last_login_at
             FROM accounts WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(account_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Get account by username
pub async fn get_by_username(username: &str) -> Result<Option<Account>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, created_at, updated_at, last_login_at
             FROM accounts WHERE username = ?",
            [username.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(account_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Get password hash for account
pub async fn get_password_hash(account_id: &str) -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM accounts WHERE id = ?",
            [account_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let hash: String = row.try_get("", "password_hash")?;
            Ok(Some(hash))
        }
        None => Ok(None),
    }
}

/// Update last login timestamp
pub async fn update_last_login(id: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let now = chrono::Utc::now().to_rfc3339();
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE accounts SET last_login_at = ? WHERE id = ?",
        [now.into(), id.to_string().into()],
    ))
    .await
    .context("Failed to update last login")?;

    Ok(())
}
