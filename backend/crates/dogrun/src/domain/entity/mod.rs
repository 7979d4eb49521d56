//! Entity Module

pub mod comment;
pub mod dog;
pub mod event;
pub mod notice;
pub mod post;
pub mod tag;
pub mod user;

pub use comment::Comment;
pub use dog::{Dog, DogProfile};
pub use event::Event;
pub use notice::Notice;
pub use post::{Post, PostFilter, PostSummary};
pub use tag::Tag;
pub use user::{User, UserProfile};
