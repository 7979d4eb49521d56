//! Dogrun Router

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::DogrunConfig;
use crate::domain::repository::DogrunRepository;
use crate::infra::postgres::PgDogrunRepository;
use crate::presentation::handlers::{self, DogrunAppState};
use crate::presentation::middleware::require_bearer_auth;

/// Create the Dogrun router with PostgreSQL repository
pub fn dogrun_router(repo: PgDogrunRepository, config: DogrunConfig) -> Router {
    dogrun_router_generic(repo, config)
}

/// Create a generic Dogrun router for any repository implementation
pub fn dogrun_router_generic<R>(repo: R, config: DogrunConfig) -> Router
where
    R: DogrunRepository,
{
    // One extra byte lets the upload policy report oversize bodies itself
    let photo_limit = config.upload_policy.max_bytes().saturating_add(1);

    let state = DogrunAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/users/me", get(handlers::get_me))
        .route("/users/profile", put(handlers::update_profile::<R>))
        .route(
            "/dogs",
            get(handlers::list_dogs::<R>).post(handlers::add_dog::<R>),
        )
        .route(
            "/dogs/{dog_id}",
            put(handlers::update_dog::<R>).delete(handlers::delete_dog::<R>),
        )
        .route(
            "/dogs/{dog_id}/photo",
            post(handlers::upload_dog_photo::<R>).layer(DefaultBodyLimit::max(photo_limit)),
        )
        .route("/posts", post(handlers::create_post::<R>))
        .route("/posts/{post_id}/comments", post(handlers::add_comment::<R>))
        .route("/entry/pass", post(handlers::issue_entry_pass::<R>))
        .route_layer(from_fn_with_state(state.clone(), require_bearer_auth::<R>));

    let public = Router::new()
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>))
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{post_id}/like", post(handlers::like_post::<R>))
        .route("/events", get(handlers::list_events::<R>))
        .route("/calendar/{year}/{month}", get(handlers::calendar::<R>))
        .route("/notices", get(handlers::list_notices::<R>))
        .route("/notices/{notice_id}/read", put(handlers::mark_notice_read::<R>))
        .route("/tags", get(handlers::list_tags::<R>))
        .route("/entry/scan", post(handlers::scan_entry_pass::<R>));

    public.merge(protected).with_state(state)
}
