//! Webhook builder and updater.

use std::sync::Arc;

use crate::application::context::ApiContext;
use crate::domain::delegates::{DelegateFactoryExt, WebhookBuilderDelegate, WebhookUpdaterDelegate};
use crate::domain::entities::{ServerTextChannel, Webhook};
use crate::domain::rest::RestResponse;
use crate::domain::value_objects::Snowflake;
use crate::shared::error::{ClientError, DelegateError};
use crate::shared::image::ImageData;

pub struct WebhookBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn WebhookBuilderDelegate>,
}

impl<'a> WebhookBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, channel: Arc<ServerTextChannel>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_webhook_builder_delegate(channel)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        avatar(avatar: ImageData) => set_avatar(avatar);
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(channel_id = %self.delegate.channel().id(), "Creating webhook");
        self.ctx.execute(request).await
    }
}

pub struct WebhookUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn WebhookUpdaterDelegate>,
}

impl<'a> WebhookUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, webhook: Arc<Webhook>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_webhook_updater_delegate(webhook)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        avatar(avatar: ImageData) => set_avatar(Some(avatar));
        remove_avatar() => set_avatar(None);
        channel(channel_id: Snowflake) => set_channel(channel_id);
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        tracing::debug!(webhook_id = %self.delegate.webhook().id, "Updating webhook");
        self.ctx.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::entities::{Channel, ChannelType};
    use crate::domain::rest::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_webhook_create_posts_to_channel() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.route == "/channels/3/webhooks" && r.body == Some(json!({ "name": "CI" })))
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({ "id": "11" }))));

        let ctx = context(transport);
        let channel = ServerTextChannel::try_from(Channel {
            id: Snowflake::new(3),
            server_id: Some(Snowflake::new(100)),
            channel_type: ChannelType::Text,
            ..Default::default()
        })
        .unwrap();

        WebhookBuilder::new(&ctx, Arc::new(channel))
            .unwrap()
            .name("CI")
            .create()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_webhook_update_remove_avatar() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.route == "/webhooks/11" && r.body == Some(json!({ "avatar": null })))
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({}))));

        let ctx = context(transport);
        let webhook = Arc::new(Webhook {
            id: Snowflake::new(11),
            ..Default::default()
        });

        WebhookUpdater::new(&ctx, webhook)
            .unwrap()
            .remove_avatar()
            .update()
            .await
            .unwrap();
    }
}
