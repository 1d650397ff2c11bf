//! Repository implementations for collection access
//!
//! Patterns shared by both repositories:
//! - borrow the injected `Database` handle, no owned state
//! - list operations resolve brand references with a single `$in` query
//!   instead of one lookup per row
//! - absence is `NotFound { resource, id }`, never a silent default

pub mod applications;
pub mod brands;

use thiserror::Error;

pub use applications::ApplicationRepo;
pub use brands::BrandRepo;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
