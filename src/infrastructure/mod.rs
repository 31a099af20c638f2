//! Infrastructure Layer
//!
//! Concrete implementations of the domain seams:
//! - REST delegates and the factory producing them
//! - Transports executing rendered requests

pub mod delegates;
pub mod transport;
