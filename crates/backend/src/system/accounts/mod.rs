pub mod repository;
pub mod service;

/// An account row as the backend sees it. The frontend only ever receives
/// [`contracts::auth::AccountInfo`]; the hash never leaves this crate.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}
