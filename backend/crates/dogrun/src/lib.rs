//! Dog Park Community Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! ## Access Model
//! - A bearer token (HS256, subject = email) is the only way a request gains an identity
//! - Dogs are visible and mutable only through their owner; foreign dogs read as missing
//! - Registration writes the user and their first dog in one transaction

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DogrunConfig;
pub use error::{DogrunError, DogrunResult};
pub use infra::memory::InMemoryDogrunRepository;
pub use infra::postgres::PgDogrunRepository;
pub use presentation::router::{dogrun_router, dogrun_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::entry_pass::EntryPass;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryDogrunRepository as MemoryStore;
    pub use crate::infra::postgres::PgDogrunRepository as DogrunStore;
}
