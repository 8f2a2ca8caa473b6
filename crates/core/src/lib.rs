//! `catalog-core` — shared building blocks for the item catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use id::{ItemId, ItemIdParseError};
pub use validation::{FieldError, ValidationErrors};
