//! Webhook delegates.

use crate::domain::entities::{ServerTextChannel, Webhook};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::Snowflake;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

pub trait WebhookBuilderDelegate: Send {
    fn channel(&self) -> &ServerTextChannel;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_avatar(&mut self, avatar: ImageData);

    /// `POST /channels/{channel}/webhooks`
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait WebhookUpdaterDelegate: Send {
    fn webhook(&self) -> &Webhook;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_avatar(&mut self, avatar: Option<ImageData>);

    /// Move the webhook to another text channel of the same server.
    fn set_channel(&mut self, channel_id: Snowflake);

    /// `PATCH /webhooks/{webhook}`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}
