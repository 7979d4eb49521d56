//! Bearer Auth Middleware
//!
//! Resolves `Authorization: Bearer <token>` to a `CurrentUser` stored in
//! request extensions. Protected handlers extract it; anything else is
//! rejected with the uniform authentication error.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};

use crate::application::IdentifyCallerUseCase;
use crate::domain::entity::User;
use crate::domain::repository::DogrunRepository;
use crate::error::DogrunError;
use crate::presentation::handlers::DogrunAppState;

/// Authenticated caller, inserted by `require_bearer_auth`
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = DogrunError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(DogrunError::Authentication)
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer_auth<R>(
    State(state): State<DogrunAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, DogrunError>
where
    R: DogrunRepository,
{
    let token = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or(DogrunError::Authentication)?;

    let use_case = IdentifyCallerUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(token.token()).await?;

    tracing::debug!(user_id = %user.user_id, "Caller authenticated");

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
