//! # Domain Layer
//!
//! The domain layer holds the platform model and the delegate contracts.
//! It is independent of any transport or concrete delegate implementation.
//!
//! ## Structure
//!
//! - **entities**: Snapshots of platform objects (Server, Channel, Role, etc.)
//! - **value_objects**: Immutable value types (Snowflake, Permissions, Embed, etc.)
//! - **delegates**: The factory contract and one trait per delegate kind
//! - **rest**: Rendered requests and the transport seam
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or application layers
//! - Delegate traits define implementation contracts
//! - Entities are read-only construction context

pub mod delegates;
pub mod entities;
pub mod rest;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
