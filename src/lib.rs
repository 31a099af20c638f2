//! # Chat Client Library
//!
//! The delegate layer of a Discord-compatible chat client:
//! - Fluent builders and updaters for messages, channels, servers, roles,
//!   commands, components and more
//! - A pluggable delegate factory producing the objects that hold builder
//!   state and render REST requests
//! - A transport seam the rendered requests are executed through
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, value objects, delegate contracts and the factory trait
//! - **Application Layer**: Public facades, the API context and the conformance probe
//! - **Infrastructure Layer**: REST delegates, the REST factory and transports
//!
//! ## Module Structure
//!
//! ```text
//! chat_client/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, delegate traits
//! +-- application/    Facades, context, conformance probe
//! +-- infrastructure/ REST delegates and transports
//! +-- shared/         Errors, validation, image payloads
//! ```

// Configuration module
pub mod config;

// Domain layer - entities and delegate contracts
pub mod domain;

// Application layer - facades
pub mod application;

// Infrastructure layer - REST implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Context wiring
pub mod startup;

// Logging setup
pub mod telemetry;
