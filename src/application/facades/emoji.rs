//! Custom emoji builder and updater.

use std::sync::Arc;

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    CustomEmojiBuilderDelegate, CustomEmojiUpdaterDelegate, DelegateFactoryExt,
};
use crate::domain::entities::{KnownCustomEmoji, Server};
use crate::domain::rest::RestResponse;
use crate::domain::value_objects::Snowflake;
use crate::shared::error::{ClientError, DelegateError};
use crate::shared::image::ImageData;

pub struct CustomEmojiBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn CustomEmojiBuilderDelegate>,
}

impl<'a> CustomEmojiBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_custom_emoji_builder_delegate(server)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        image(image: ImageData) => set_image(image);
        /// Restrict usage to members with this role.
        whitelist_role(role_id: Snowflake) => add_role_to_whitelist(role_id);
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(server_id = %self.delegate.server().id, "Creating custom emoji");
        self.ctx.execute(request).await
    }
}

pub struct CustomEmojiUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn CustomEmojiUpdaterDelegate>,
}

impl<'a> CustomEmojiUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, emoji: Arc<KnownCustomEmoji>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_custom_emoji_updater_delegate(emoji)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        whitelist_role(role_id: Snowflake) => add_role_to_whitelist(role_id);
        unwhitelist_role(role_id: Snowflake) => remove_role_from_whitelist(role_id);
        clear_whitelist() => remove_all_roles_from_whitelist();
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        tracing::debug!(emoji_id = %self.delegate.emoji().id, "Updating custom emoji");
        self.ctx.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::rest::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_emoji_create_requires_image() {
        let ctx = context(MockTransport::new());
        let err = CustomEmojiBuilder::new(&ctx, Arc::new(Server::default()))
            .unwrap()
            .name("wave")
            .create()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Delegate(DelegateError::MissingField("image"))
        ));
    }

    #[tokio::test]
    async fn test_emoji_update_keeps_existing_whitelist() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                r.route == "/guilds/100/emojis/5"
                    && r.body == Some(json!({ "roles": ["7", "8"] }))
            })
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({}))));

        let ctx = context(transport);
        let emoji = Arc::new(KnownCustomEmoji {
            id: Snowflake::new(5),
            server_id: Snowflake::new(100),
            name: "wave".into(),
            whitelisted_roles: vec![Snowflake::new(7)],
            ..Default::default()
        });

        CustomEmojiUpdater::new(&ctx, emoji)
            .unwrap()
            .whitelist_role(Snowflake::new(8))
            .update()
            .await
            .unwrap();
    }
}
