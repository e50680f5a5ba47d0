// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Principal of a request that must carry a valid bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Principal of a request where the bearer token is optional. A token that is
/// present but invalid is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user_id(&self) -> Option<i64> {
        self.0.as_ref().map(|user| i64::from(user.id))
    }
}

async fn resolve<S>(parts: &mut Parts, state: &S) -> Result<Option<AuthenticatedUser>, HttpError>
where
    S: Send + Sync,
{
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    app_state
        .services
        .authenticate(header.token())
        .await
        .map(Some)
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await.map(Self)
    }
}
