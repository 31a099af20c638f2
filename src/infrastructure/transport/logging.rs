//! In-process transport that logs requests instead of sending them.
//!
//! Useful for dry runs and for wiring checks: every request is logged with a
//! correlation id and acknowledged with `200 {}`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::rest::{RestRequest, RestResponse, Transport};
use crate::shared::error::ClientError;

#[derive(Debug, Clone)]
pub struct LoggingTransport {
    base_url: String,
}

impl LoggingTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL the request would be sent to.
    pub fn url_for(&self, request: &RestRequest) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            request.path_and_query()
        )
    }
}

#[async_trait]
impl Transport for LoggingTransport {
    async fn execute(&self, request: RestRequest) -> Result<RestResponse, ClientError> {
        let request_id = Uuid::new_v4();
        tracing::info!(
            request_id = %request_id,
            method = %request.method,
            url = %self.url_for(&request),
            files = request.files.len(),
            authorized = request.authorized,
            reason = request.audit_log_reason.as_deref().unwrap_or(""),
            "Dispatching request"
        );
        if let Some(body) = &request.body {
            tracing::debug!(request_id = %request_id, body = %body, "Request body");
        }

        Ok(RestResponse::new(200, serde_json::json!({})))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base_and_route() {
        let transport = LoggingTransport::new("https://chat.example/api/v10/");
        let request = RestRequest::post("/webhooks/1/abc").with_query("wait", true);
        assert_eq!(
            transport.url_for(&request),
            "https://chat.example/api/v10/webhooks/1/abc?wait=true"
        );
    }

    #[tokio::test]
    async fn test_execute_acknowledges() {
        let transport = LoggingTransport::new("https://chat.example/api/v10");
        let response = transport
            .execute(RestRequest::post("/guilds"))
            .await
            .unwrap();
        assert!(response.is_success());
    }
}
