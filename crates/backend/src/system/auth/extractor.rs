use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::auth::TokenClaims;

/// Extractor for getting the authenticated account from the JWT claims
/// Usage in handlers: `async fn handler(CurrentAccount(claims): CurrentAccount) -> Response`
pub struct CurrentAccount(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Extract TokenClaims from request extensions (set by middleware)
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentAccount)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
