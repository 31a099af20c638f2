//! Application Layer
//!
//! The public builders and updaters, the context they are built against,
//! and the factory conformance probe.

pub mod conformance;
pub mod context;
pub mod facades;

pub use conformance::{probe, ConformanceReport};
pub use context::ApiContext;
