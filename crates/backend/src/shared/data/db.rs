use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Statements run on every startup. All of them are idempotent, so a fresh
/// database and an already-migrated one go through the same path.
const SCHEMA_BOOTSTRAP: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sys_settings (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        description TEXT,
        created_at TEXT,
        updated_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id TEXT PRIMARY KEY NOT NULL,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        last_login_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
        id TEXT PRIMARY KEY NOT NULL,
        account_id TEXT NOT NULL,
        token_hash TEXT NOT NULL,
        expires_at TEXT NOT NULL,
        created_at TEXT NOT NULL,
        revoked_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shift_records (
        id TEXT PRIMARY KEY NOT NULL,
        account_id TEXT NOT NULL,
        date TEXT NOT NULL,
        morning_cash INTEGER NOT NULL DEFAULT 0,
        evening_cash INTEGER NOT NULL DEFAULT 0,
        total_orders INTEGER NOT NULL DEFAULT 0,
        cash_orders INTEGER NOT NULL DEFAULT 0,
        online_tips INTEGER NOT NULL DEFAULT 0,
        cash_earnings INTEGER NOT NULL DEFAULT 0,
        online_earnings INTEGER NOT NULL DEFAULT 0,
        bonus_earnings INTEGER NOT NULL DEFAULT 0,
        total_earnings INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
    "#,
    // One record per account and calendar day; concurrent inserts for the
    // same day race on this index and the loser gets a unique violation.
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_shift_records_account_date
        ON shift_records (account_id, date);
    "#,
];

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/ledger.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    for sql in SCHEMA_BOOTSTRAP {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    tracing::info!("Database schema verified at {}", absolute_path.display());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
