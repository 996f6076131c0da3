//! # sprout-core
//!
//! Core types shared across the Sprout crates.
//!
//! This crate provides:
//! - `SproutError` enum for unified error handling
//! - `SproutResult` alias used throughout the workspace

pub mod error;

// Re-export commonly used types
pub use error::{SproutError, SproutResult};
