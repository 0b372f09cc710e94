//! `AuthUser` extractor: verifies the bearer token and yields the caller.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use clubhub_core::error::AppError;
use clubhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller of a mutating route.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Unauthenticated."))?;

        let claims = state.jwt_decoder.verify(token)?;
        Ok(AuthUser(RequestContext::new(claims.identity())))
    }
}
