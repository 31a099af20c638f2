//! Transports shipped with the crate.

mod logging;

pub use logging::LoggingTransport;
