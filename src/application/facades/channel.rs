//! Channel and thread builders and updaters.

use std::sync::Arc;

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    AutoArchiveDuration, ChannelCategoryBuilderDelegate, DelegateFactoryExt,
    RegularServerChannelBuilderDelegate, RegularServerChannelUpdaterDelegate,
    ServerChannelBuilderDelegate, ServerChannelUpdaterDelegate, ServerForumChannelBuilderDelegate,
    ServerForumChannelUpdaterDelegate, ServerTextChannelBuilderDelegate,
    ServerTextChannelUpdaterDelegate, ServerThreadChannelUpdaterDelegate,
    ServerVoiceChannelBuilderDelegate, ServerVoiceChannelUpdaterDelegate, ThreadBuilderDelegate,
    ThreadOrigin,
};
use crate::domain::entities::{
    ChannelCategory, Message, RegularServerChannel, Server, ServerChannel, ServerForumChannel,
    ServerTextChannel, ServerThreadChannel, ServerVoiceChannel,
};
use crate::domain::rest::RestResponse;
use crate::domain::value_objects::{OverwriteTarget, PermissionOverwrite, Permissions};
use crate::shared::error::{ClientError, DelegateError};

/// Declares a facade struct over a boxed delegate.
macro_rules! channel_facade {
    ($(#[$meta:meta])* $name:ident, $delegate:ident) => {
        $(#[$meta])*
        pub struct $name<'a> {
            ctx: &'a ApiContext,
            delegate: Box<dyn $delegate>,
        }
    };
}

/// Setters every server channel builder or updater has.
macro_rules! server_channel_base {
    () => {
        forward! {
            name(name: impl Into<String>) => set_name(name.into());
            audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        }
    };
}

/// Setters of non-thread channels.
macro_rules! regular_channel_base {
    () => {
        server_channel_base!();

        forward! {
            raw_position(position: i32) => set_raw_position(position);
            permission_overwrite(overwrite: PermissionOverwrite) => add_permission_overwrite(overwrite);
            remove_permission_overwrite(target: OverwriteTarget) => remove_permission_overwrite(target);
        }

        /// Overwrite the permissions of a single role or member.
        pub fn permissions_for(self, target: OverwriteTarget, permissions: Permissions) -> Self {
            self.permission_overwrite(PermissionOverwrite { target, permissions })
        }
    };
}

/// `create()` for builders scoped to a server.
macro_rules! create_in_server {
    ($label:literal) => {
        pub async fn create(self) -> Result<RestResponse, ClientError> {
            let request = self.delegate.create_request()?;
            tracing::debug!(server_id = %self.delegate.server().id, channel = $label, "Creating channel");
            self.ctx.execute(request).await
        }
    };
}

/// `update()` for every channel updater.
macro_rules! update_channel {
    () => {
        pub async fn update(self) -> Result<RestResponse, ClientError> {
            let request = self.delegate.update_request()?;
            tracing::debug!(channel_id = %self.delegate.channel().id, "Updating channel");
            self.ctx.execute(request).await
        }
    };
}

// Builders

channel_facade!(ChannelCategoryBuilder, ChannelCategoryBuilderDelegate);

impl<'a> ChannelCategoryBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_channel_category_builder_delegate(server)?,
        })
    }

    regular_channel_base!();
    create_in_server!("channel category");
}

channel_facade!(ServerTextChannelBuilder, ServerTextChannelBuilderDelegate);

impl<'a> ServerTextChannelBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_text_channel_builder_delegate(server)?,
        })
    }

    regular_channel_base!();

    forward! {
        category(category: Option<&ChannelCategory>) => set_category(category);
        topic(topic: impl Into<String>) => set_topic(topic.into());
        slowmode_delay(seconds: u32) => set_slowmode_delay(seconds);
        nsfw(nsfw: bool) => set_nsfw(nsfw);
    }

    create_in_server!("text channel");
}

channel_facade!(ServerForumChannelBuilder, ServerForumChannelBuilderDelegate);

impl<'a> ServerForumChannelBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_forum_channel_builder_delegate(server)?,
        })
    }

    regular_channel_base!();

    forward! {
        category(category: Option<&ChannelCategory>) => set_category(category);
        topic(topic: impl Into<String>) => set_topic(topic.into());
        nsfw(nsfw: bool) => set_nsfw(nsfw);
    }

    create_in_server!("forum channel");
}

channel_facade!(ServerVoiceChannelBuilder, ServerVoiceChannelBuilderDelegate);

impl<'a> ServerVoiceChannelBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_voice_channel_builder_delegate(server)?,
        })
    }

    regular_channel_base!();

    forward! {
        category(category: Option<&ChannelCategory>) => set_category(category);
        bitrate(bitrate: u32) => set_bitrate(bitrate);
        user_limit(user_limit: u32) => set_user_limit(user_limit);
    }

    create_in_server!("voice channel");
}

channel_facade!(
    /// Starts a thread in a text channel or on a message.
    ThreadBuilder,
    ThreadBuilderDelegate
);

impl<'a> ThreadBuilder<'a> {
    pub fn from_channel(
        ctx: &'a ApiContext,
        channel: Arc<ServerTextChannel>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_thread_builder_delegate_from_channel(channel)?,
        })
    }

    pub fn from_message(ctx: &'a ApiContext, message: Arc<Message>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_thread_builder_delegate_from_message(message)?,
        })
    }

    server_channel_base!();

    forward! {
        auto_archive_duration(duration: AutoArchiveDuration) => set_auto_archive_duration(duration);
        private(private: bool) => set_private(private);
        invitable(invitable: bool) => set_invitable(invitable);
        slowmode_delay(seconds: u32) => set_slowmode_delay(seconds);
    }

    pub fn origin(&self) -> &ThreadOrigin {
        self.delegate.origin()
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(channel_id = %self.delegate.origin().channel_id(), "Creating thread");
        self.ctx.execute(request).await
    }
}

// Updaters

channel_facade!(ServerChannelUpdater, ServerChannelUpdaterDelegate);

impl<'a> ServerChannelUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, channel: Arc<ServerChannel>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_channel_updater_delegate(channel)?,
        })
    }

    server_channel_base!();
    update_channel!();
}

channel_facade!(RegularServerChannelUpdater, RegularServerChannelUpdaterDelegate);

impl<'a> RegularServerChannelUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        channel: Arc<RegularServerChannel>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx
                .factory()
                .create_regular_server_channel_updater_delegate(channel)?,
        })
    }

    regular_channel_base!();
    update_channel!();
}

channel_facade!(ServerTextChannelUpdater, ServerTextChannelUpdaterDelegate);

impl<'a> ServerTextChannelUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        channel: Arc<ServerTextChannel>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_text_channel_updater_delegate(channel)?,
        })
    }

    regular_channel_base!();

    forward! {
        topic(topic: impl Into<String>) => set_topic(Some(topic.into()));
        remove_topic() => set_topic(None);
        nsfw(nsfw: bool) => set_nsfw(nsfw);
        slowmode_delay(seconds: u32) => set_slowmode_delay(seconds);
        category(category: Option<&ChannelCategory>) => set_category(category);
    }

    update_channel!();
}

channel_facade!(ServerForumChannelUpdater, ServerForumChannelUpdaterDelegate);

impl<'a> ServerForumChannelUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        channel: Arc<ServerForumChannel>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_forum_channel_updater_delegate(channel)?,
        })
    }

    regular_channel_base!();

    forward! {
        topic(topic: impl Into<String>) => set_topic(Some(topic.into()));
        remove_topic() => set_topic(None);
        nsfw(nsfw: bool) => set_nsfw(nsfw);
        category(category: Option<&ChannelCategory>) => set_category(category);
    }

    update_channel!();
}

channel_facade!(ServerVoiceChannelUpdater, ServerVoiceChannelUpdaterDelegate);

impl<'a> ServerVoiceChannelUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        channel: Arc<ServerVoiceChannel>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_voice_channel_updater_delegate(channel)?,
        })
    }

    regular_channel_base!();

    forward! {
        bitrate(bitrate: u32) => set_bitrate(bitrate);
        user_limit(user_limit: u32) => set_user_limit(Some(user_limit));
        unlimited_users() => set_user_limit(None);
        category(category: Option<&ChannelCategory>) => set_category(category);
    }

    update_channel!();
}

channel_facade!(ServerThreadChannelUpdater, ServerThreadChannelUpdaterDelegate);

impl<'a> ServerThreadChannelUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        thread: Arc<ServerThreadChannel>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_thread_channel_updater_delegate(thread)?,
        })
    }

    server_channel_base!();

    forward! {
        archived(archived: bool) => set_archived(archived);
        locked(locked: bool) => set_locked(locked);
        auto_archive_duration(duration: AutoArchiveDuration) => set_auto_archive_duration(duration);
        invitable(invitable: bool) => set_invitable(invitable);
        slowmode_delay(seconds: u32) => set_slowmode_delay(seconds);
    }

    update_channel!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::entities::{Channel, ChannelType};
    use crate::domain::rest::{MockTransport, RestMethod};
    use crate::domain::value_objects::{PermissionType, Snowflake};
    use serde_json::json;

    fn channel(id: i64, channel_type: ChannelType) -> Channel {
        Channel {
            id: Snowflake::new(id),
            server_id: Some(Snowflake::new(100)),
            name: "general".into(),
            channel_type,
            ..Default::default()
        }
    }

    fn ok_transport(route: &'static str, method: RestMethod) -> MockTransport {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(move |r| r.route == route && r.method == method)
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({}))));
        transport
    }

    #[tokio::test]
    async fn test_text_channel_create_in_category() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| {
                let body = r.body.as_ref().unwrap();
                r.route == "/guilds/100/channels"
                    && body["type"] == 0
                    && body["parent_id"] == "5"
                    && body["permission_overwrites"][0]["id"] == "9"
            })
            .times(1)
            .returning(|_| Ok(RestResponse::new(201, json!({ "id": "6" }))));

        let ctx = context(transport);
        let server = Arc::new(Server {
            id: Snowflake::new(100),
            ..Default::default()
        });
        let category = ChannelCategory::try_from(channel(5, ChannelType::Category)).unwrap();

        ServerTextChannelBuilder::new(&ctx, server)
            .unwrap()
            .name("rules")
            .category(Some(&category))
            .permissions_for(
                OverwriteTarget::Role(Snowflake::new(9)),
                Permissions::allowing(&[PermissionType::ViewChannel]),
            )
            .create()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_builder_without_name_never_reaches_transport() {
        let ctx = context(MockTransport::new());
        let err = ChannelCategoryBuilder::new(&ctx, Arc::new(Server::default()))
            .unwrap()
            .create()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Delegate(DelegateError::MissingField("name"))
        ));
    }

    #[tokio::test]
    async fn test_thread_from_message_route() {
        let ctx = context(ok_transport(
            "/channels/7/messages/8/threads",
            RestMethod::Post,
        ));
        let message = Arc::new(Message {
            id: Snowflake::new(8),
            channel_id: Snowflake::new(7),
            ..Default::default()
        });

        let builder = ThreadBuilder::from_message(&ctx, message)
            .unwrap()
            .name("discussion");
        assert!(matches!(builder.origin(), ThreadOrigin::Message(_)));
        builder.create().await.unwrap();
    }

    #[tokio::test]
    async fn test_voice_updater_patches_channel() {
        let ctx = context(ok_transport("/channels/3", RestMethod::Patch));
        let voice = ServerVoiceChannel::try_from(channel(3, ChannelType::Voice)).unwrap();

        ServerVoiceChannelUpdater::new(&ctx, Arc::new(voice))
            .unwrap()
            .unlimited_users()
            .update()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let ctx = context(MockTransport::new());
        let thread = ServerThreadChannel::try_from(channel(4, ChannelType::PublicThread)).unwrap();

        let err = ServerThreadChannelUpdater::new(&ctx, Arc::new(thread))
            .unwrap()
            .update()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Delegate(DelegateError::NothingToUpdate)
        ));
    }
}
