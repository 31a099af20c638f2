//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod image;
pub mod validation;
