//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Comment, Dog, Event, Notice, Post, Tag, User};
pub use repository::{
    DogRepository, DogrunRepository, EventRepository, NoticeRepository, PostRepository,
    TagRepository, UserRepository,
};
