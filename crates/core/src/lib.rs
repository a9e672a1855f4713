//! `gilded-rose-core` — shared domain building blocks.
//!
//! Pure domain primitives only; no IO lives here.

pub mod error;

pub use error::{DomainError, DomainResult};
