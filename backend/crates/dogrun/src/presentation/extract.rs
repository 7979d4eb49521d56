//! Request extractors whose rejections are `DogrunError`s
//!
//! Bodies and query strings go through `WithRejection` and the `From`
//! impls in `crate::error`. Entity ids in the path use [`ResourceId`]: a
//! segment that is not a valid id cannot name an existing entity, so it is
//! reported as that entity being missing.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use kernel::id::{DogId, NoticeId, PostId};
use serde::de::DeserializeOwned;

use crate::error::DogrunError;

/// Id types addressed by a single path segment
pub trait PathResource: DeserializeOwned + Send {
    /// Resource name used in the not-found error
    const RESOURCE: &'static str;
}

impl PathResource for DogId {
    const RESOURCE: &'static str = "Dog";
}

impl PathResource for PostId {
    const RESOURCE: &'static str = "Post";
}

impl PathResource for NoticeId {
    const RESOURCE: &'static str = "Notice";
}

/// Entity id taken from the request path
#[derive(Debug, Clone, Copy)]
pub struct ResourceId<T>(pub T);

impl<S, T> FromRequestParts<S> for ResourceId<T>
where
    S: Send + Sync,
    T: PathResource,
{
    type Rejection = DogrunError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!(
                    resource = T::RESOURCE,
                    reason = %rejection.body_text(),
                    "Unparsable id in path"
                );
                Err(DogrunError::NotFound(T::RESOURCE))
            }
        }
    }
}
