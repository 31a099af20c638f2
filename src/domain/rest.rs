//! REST request model and transport contract.
//!
//! Delegates render their accumulated state into a [`RestRequest`]; the
//! [`Transport`] executes it. The delegate layer never talks to the
//! network itself.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::shared::error::{ClientError, DelegateError};

/// HTTP method of a REST request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file uploaded alongside a request (multipart).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub description: Option<String>,
    pub spoiler: bool,
}

impl FileAttachment {
    /// Create a new attachment.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            description: None,
            spoiler: false,
        }
    }

    /// File name as uploaded; spoilers get the `SPOILER_` prefix.
    pub fn upload_name(&self) -> String {
        if self.spoiler && !self.file_name.starts_with("SPOILER_") {
            format!("SPOILER_{}", self.file_name)
        } else {
            self.file_name.clone()
        }
    }
}

/// A fully rendered REST request.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: RestMethod,
    /// Route relative to the versioned API base, e.g. `/channels/1/messages`
    pub route: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub files: Vec<FileAttachment>,
    /// Value of the `X-Audit-Log-Reason` header
    pub audit_log_reason: Option<String>,
    /// Interaction and webhook-token routes must not send the bot token
    pub authorized: bool,
}

impl RestRequest {
    /// Create a request without body.
    pub fn new(method: RestMethod, route: impl Into<String>) -> Self {
        Self {
            method,
            route: route.into(),
            query: Vec::new(),
            body: None,
            files: Vec::new(),
            audit_log_reason: None,
            authorized: true,
        }
    }

    pub fn post(route: impl Into<String>) -> Self {
        Self::new(RestMethod::Post, route)
    }

    pub fn patch(route: impl Into<String>) -> Self {
        Self::new(RestMethod::Patch, route)
    }

    /// Attach a JSON body.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, DelegateError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach files to upload.
    pub fn with_files(mut self, files: Vec<FileAttachment>) -> Self {
        self.files = files;
        self
    }

    /// Set the audit log reason.
    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.audit_log_reason = reason;
        self
    }

    /// Do not send the session's authorization header.
    pub fn unauthorized(mut self) -> Self {
        self.authorized = false;
        self
    }

    /// Route including the query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.route.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.route, query)
    }
}

/// Response of an executed request.
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl RestResponse {
    /// Create a response.
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes rendered requests.
///
/// Implementations own the wire protocol, authentication headers and rate
/// limiting; none of that belongs to the delegate layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response.
    async fn execute(&self, request: RestRequest) -> Result<RestResponse, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_query() {
        let request = RestRequest::post("/webhooks/1/abc").with_query("wait", true);
        assert_eq!(request.path_and_query(), "/webhooks/1/abc?wait=true");
        assert_eq!(RestRequest::post("/guilds").path_and_query(), "/guilds");
    }

    #[test]
    fn test_spoiler_upload_name() {
        let mut file = FileAttachment::new("cat.png", vec![1]);
        assert_eq!(file.upload_name(), "cat.png");
        file.spoiler = true;
        assert_eq!(file.upload_name(), "SPOILER_cat.png");
    }

    #[test]
    fn test_with_json_sets_body() {
        let request = RestRequest::patch("/users/@me")
            .with_json(&serde_json::json!({ "username": "bot" }))
            .unwrap();
        assert_eq!(request.method, RestMethod::Patch);
        assert_eq!(request.body, Some(serde_json::json!({ "username": "bot" })));
        assert!(request.authorized);
    }
}
