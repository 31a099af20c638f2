//! Error handling delegates.

use crate::domain::rest::{RestRequest, RestResponse};
use crate::shared::error::{ClientError, ErrorKind};

/// Extra predicate an error must pass to be logged.
pub type ExceptionFilter = Box<dyn Fn(&ClientError) -> bool + Send + Sync>;

/// Logs errors from fire-and-forget operations.
pub trait ExceptionLoggerDelegate: Send + Sync {
    /// Never log errors of this kind.
    fn ignore_kind(&mut self, kind: ErrorKind);
    fn set_filter(&mut self, filter: ExceptionFilter);

    /// Log the error unless it is ignored. Returns whether it was logged.
    fn log(&self, error: &ClientError) -> bool;
}

/// Turns unsuccessful responses into typed errors.
pub trait ExceptionValidatorDelegate: Send + Sync {
    fn validate(&self, request: &RestRequest, response: &RestResponse) -> Result<(), ClientError>;
}
