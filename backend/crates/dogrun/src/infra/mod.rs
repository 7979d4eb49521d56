//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryDogrunRepository;
pub use postgres::PgDogrunRepository;
