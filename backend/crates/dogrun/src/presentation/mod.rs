//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::ResourceId;
pub use handlers::DogrunAppState;
pub use middleware::{CurrentUser, require_bearer_auth};
pub use router::{dogrun_router, dogrun_router_generic};
