//! `stockdesk-dashboard`
//!
//! **Responsibility:** browser front-end of the inventory dashboard.
//!
//! This crate provides:
//! - Shell configuration (page title, description, language)
//! - The Leptos dashboard frame and the "create product" dialog (WASM only)
//!
//! Product state and validation live in `stockdesk-products`; persistence is
//! the job of whoever handles the dialog's `on_create`.

pub mod config;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::{ConfigError, ShellConfig};
