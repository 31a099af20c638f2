//! Error logging and response validation delegates.

use std::collections::HashSet;

use crate::domain::delegates::{ExceptionFilter, ExceptionLoggerDelegate, ExceptionValidatorDelegate};
use crate::domain::rest::{RestRequest, RestResponse};
use crate::shared::error::{ClientError, ErrorKind};

#[derive(Default)]
pub struct RestExceptionLoggerDelegate {
    ignored: HashSet<ErrorKind>,
    filter: Option<ExceptionFilter>,
}

impl RestExceptionLoggerDelegate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExceptionLoggerDelegate for RestExceptionLoggerDelegate {
    fn ignore_kind(&mut self, kind: ErrorKind) {
        self.ignored.insert(kind);
    }

    fn set_filter(&mut self, filter: ExceptionFilter) {
        self.filter = Some(filter);
    }

    fn log(&self, error: &ClientError) -> bool {
        let kind = error.kind();
        if self.ignored.contains(&kind) {
            return false;
        }
        if let Some(filter) = &self.filter {
            if !filter(error) {
                return false;
            }
        }
        tracing::error!(kind = %kind, error = %error, "Unhandled client error");
        true
    }
}

/// Error codes the platform uses for missing access.
const MISSING_ACCESS: i64 = 50001;
const MISSING_PERMISSIONS: i64 = 50013;

pub struct RestExceptionValidatorDelegate {
    missing_permission_codes: Vec<i64>,
}

impl RestExceptionValidatorDelegate {
    pub fn new() -> Self {
        Self {
            missing_permission_codes: vec![MISSING_ACCESS, MISSING_PERMISSIONS],
        }
    }
}

impl Default for RestExceptionValidatorDelegate {
    fn default() -> Self {
        Self::new()
    }
}

fn body_message(response: &RestResponse) -> String {
    response
        .body
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("")
        .to_string()
}

impl ExceptionValidatorDelegate for RestExceptionValidatorDelegate {
    fn validate(&self, request: &RestRequest, response: &RestResponse) -> Result<(), ClientError> {
        if response.is_success() {
            return Ok(());
        }

        let code = response.body.get("code").and_then(|c| c.as_i64()).unwrap_or(0);
        let message = body_message(response);
        let target = format!("{} {}", request.method, request.route);

        tracing::debug!(
            status = response.status,
            code,
            route = %target,
            "Request failed"
        );

        if self.missing_permission_codes.contains(&code) {
            return Err(ClientError::MissingPermissions(target));
        }

        Err(match response.status {
            400 => ClientError::BadRequest { code, message },
            401 => ClientError::Unauthorized(target),
            403 => ClientError::MissingPermissions(target),
            404 => ClientError::NotFound(target),
            429 => ClientError::RateLimited {
                retry_after: response
                    .body
                    .get("retry_after")
                    .and_then(|r| r.as_f64())
                    .unwrap_or(0.0),
                global: response
                    .body
                    .get("global")
                    .and_then(|g| g.as_bool())
                    .unwrap_or(false),
            },
            status if status >= 500 => ClientError::ServerError(status),
            _ => ClientError::BadRequest { code, message },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use test_case::test_case;

    fn validate(status: u16, body: serde_json::Value) -> Result<(), ClientError> {
        let request = RestRequest::post("/channels/1/messages");
        RestExceptionValidatorDelegate::new().validate(&request, &RestResponse::new(status, body))
    }

    #[test_case(200, json!({}) => None ; "success")]
    #[test_case(204, json!(null) => None ; "no content")]
    #[test_case(400, json!({ "code": 50035, "message": "Invalid Form Body" }) => Some(ErrorKind::BadRequest) ; "bad request")]
    #[test_case(401, json!({}) => Some(ErrorKind::Unauthorized) ; "unauthorized")]
    #[test_case(403, json!({}) => Some(ErrorKind::MissingPermissions) ; "forbidden")]
    #[test_case(400, json!({ "code": 50013 }) => Some(ErrorKind::MissingPermissions) ; "permission code")]
    #[test_case(404, json!({}) => Some(ErrorKind::NotFound) ; "not found")]
    #[test_case(429, json!({ "retry_after": 1.5 }) => Some(ErrorKind::RateLimited) ; "rate limited")]
    #[test_case(502, json!({}) => Some(ErrorKind::ServerError) ; "bad gateway")]
    fn test_status_mapping(status: u16, body: serde_json::Value) -> Option<ErrorKind> {
        validate(status, body).err().map(|e| e.kind())
    }

    #[test]
    fn test_bad_request_keeps_code_and_message() {
        let err = validate(400, json!({ "code": 50035, "message": "Invalid Form Body" })).unwrap_err();
        assert!(matches!(
            err,
            ClientError::BadRequest { code: 50035, ref message } if message == "Invalid Form Body"
        ));
    }

    #[test]
    fn test_rate_limit_reads_body() {
        let err = validate(429, json!({ "retry_after": 2.25, "global": true })).unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited { retry_after, global: true } if retry_after == 2.25
        ));
    }

    #[test]
    fn test_logger_skips_ignored_kinds() {
        let mut logger = RestExceptionLoggerDelegate::new();
        logger.ignore_kind(ErrorKind::NotFound);

        assert!(!logger.log(&ClientError::NotFound("x".into())));
        assert!(logger.log(&ClientError::ServerError(500)));
    }

    #[test]
    fn test_logger_applies_filter() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();

        let mut logger = RestExceptionLoggerDelegate::new();
        logger.set_filter(Box::new(move |e| {
            seen.fetch_add(1, Ordering::SeqCst);
            !matches!(e, ClientError::Transport(_))
        }));

        assert!(!logger.log(&ClientError::Transport("reset".into())));
        assert!(logger.log(&ClientError::ServerError(503)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
