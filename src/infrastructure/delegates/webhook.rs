//! Webhook REST delegates.

use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use super::common::{require, with_changes, with_payload};
use crate::domain::delegates::{WebhookBuilderDelegate, WebhookUpdaterDelegate};
use crate::domain::entities::{ServerTextChannel, Webhook};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::Snowflake;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

#[derive(Debug, Default, Serialize, Validate)]
struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 80, message = "must be 1-80 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<Option<ImageData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    channel_id: Option<Snowflake>,
}

/// Names the platform reserves for itself.
fn check_webhook_name(name: &Option<String>) -> Result<(), DelegateError> {
    match name {
        Some(name) if name.to_lowercase().contains("clyde") => Err(DelegateError::Validation(
            "name: must not contain \"clyde\"".into(),
        )),
        _ => Ok(()),
    }
}

pub struct RestWebhookBuilderDelegate {
    channel: Arc<ServerTextChannel>,
    payload: WebhookPayload,
    reason: Option<String>,
}

impl RestWebhookBuilderDelegate {
    pub fn new(channel: Arc<ServerTextChannel>) -> Self {
        Self {
            channel,
            payload: WebhookPayload::default(),
            reason: None,
        }
    }
}

impl WebhookBuilderDelegate for RestWebhookBuilderDelegate {
    fn channel(&self) -> &ServerTextChannel {
        &self.channel
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_avatar(&mut self, avatar: ImageData) {
        self.payload.avatar = Some(Some(avatar));
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        check_webhook_name(&self.payload.name)?;

        let request = RestRequest::post(format!("/channels/{}/webhooks", self.channel.id()))
            .with_reason(self.reason.clone());
        with_payload(request, &self.payload)
    }
}

pub struct RestWebhookUpdaterDelegate {
    webhook: Arc<Webhook>,
    patch: WebhookPayload,
    reason: Option<String>,
}

impl RestWebhookUpdaterDelegate {
    pub fn new(webhook: Arc<Webhook>) -> Self {
        Self {
            webhook,
            patch: WebhookPayload::default(),
            reason: None,
        }
    }
}

impl WebhookUpdaterDelegate for RestWebhookUpdaterDelegate {
    fn webhook(&self) -> &Webhook {
        &self.webhook
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn set_avatar(&mut self, avatar: Option<ImageData>) {
        self.patch.avatar = Some(avatar);
    }

    fn set_channel(&mut self, channel_id: Snowflake) {
        self.patch.channel_id = Some(channel_id);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        check_webhook_name(&self.patch.name)?;
        let request = RestRequest::patch(format!("/webhooks/{}", self.webhook.id))
            .with_reason(self.reason.clone());
        with_changes(request, &self.patch)
    }
}
