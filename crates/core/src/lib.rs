//! `stockdesk-core`: domain building blocks shared by the dashboard crates.
//!
//! This crate contains **pure domain** primitives (no UI or IO concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
