//! Shared Kernel
//!
//! Vocabulary every dog park crate agrees on:
//! - [`error`]: the problem-document error returned over HTTP
//! - [`id`]: typed UUID identifiers for each entity
//! - [`validation`]: field rules for signup, dogs and posts

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod validation;
