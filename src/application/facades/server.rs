//! Servers, invites, stickers and scheduled events.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::context::ApiContext;
use crate::domain::delegates::{
    DelegateFactoryExt, InviteBuilderDelegate, ScheduledEventBuilderDelegate,
    ScheduledEventUpdaterDelegate, ServerBuilderDelegate, ServerUpdaterDelegate,
    StickerBuilderDelegate, StickerUpdaterDelegate,
};
use crate::domain::entities::{
    DefaultMessageNotificationLevel, ExplicitContentFilterLevel, ScheduledEvent,
    ScheduledEventEntityType, ScheduledEventStatus, Server, ServerChannel, VerificationLevel,
};
use crate::domain::rest::{FileAttachment, RestResponse};
use crate::domain::value_objects::Snowflake;
use crate::shared::error::{ClientError, DelegateError};
use crate::shared::image::ImageData;

/// Creates a server owned by the session's user.
pub struct ServerBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn ServerBuilderDelegate>,
}

impl<'a> ServerBuilder<'a> {
    pub fn new(ctx: &'a ApiContext) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx
                .factory()
                .create_server_builder_delegate(Arc::clone(ctx.session()))?,
        })
    }

    forward! {
        name(name: impl Into<String>) => set_name(name.into());
        icon(icon: ImageData) => set_icon(icon);
        verification_level(level: VerificationLevel) => set_verification_level(level);
        default_message_notification_level(level: DefaultMessageNotificationLevel)
            => set_default_message_notification_level(level);
        explicit_content_filter_level(level: ExplicitContentFilterLevel)
            => set_explicit_content_filter_level(level);
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::info!(user_id = %self.delegate.session().user_id, "Creating server");
        self.ctx.execute(request).await
    }
}

pub struct ServerUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn ServerUpdaterDelegate>,
}

impl<'a> ServerUpdater<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_server_updater_delegate(server)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        description(description: impl Into<String>) => set_description(Some(description.into()));
        remove_description() => set_description(None);
        icon(icon: ImageData) => set_icon(Some(icon));
        remove_icon() => set_icon(None);
        verification_level(level: VerificationLevel) => set_verification_level(level);
        default_message_notification_level(level: DefaultMessageNotificationLevel)
            => set_default_message_notification_level(level);
        explicit_content_filter_level(level: ExplicitContentFilterLevel)
            => set_explicit_content_filter_level(level);
        afk_channel(channel_id: Option<Snowflake>) => set_afk_channel(channel_id);
        afk_timeout(seconds: u32) => set_afk_timeout(seconds);
        system_channel(channel_id: Option<Snowflake>) => set_system_channel(channel_id);
        owner(user_id: Snowflake) => set_owner(user_id);
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        tracing::debug!(server_id = %self.delegate.server().id, "Updating server");
        self.ctx.execute(request).await
    }
}

pub struct InviteBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn InviteBuilderDelegate>,
}

impl<'a> InviteBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, channel: Arc<ServerChannel>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_invite_builder_delegate(channel)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        max_age(seconds: u32) => set_max_age(seconds);
        max_uses(uses: u32) => set_max_uses(uses);
        temporary(temporary: bool) => set_temporary(temporary);
        never_reuse(unique: bool) => set_never_reuse(unique);
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(channel_id = %self.delegate.channel().id(), "Creating invite");
        self.ctx.execute(request).await
    }
}

pub struct StickerBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn StickerBuilderDelegate>,
}

impl<'a> StickerBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_sticker_builder_delegate(server)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        description(description: impl Into<String>) => set_description(description.into());
        tags(tags: impl Into<String>) => set_tags(tags.into());
        file(file: FileAttachment) => set_file(file);
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(server_id = %self.delegate.server().id, "Creating sticker");
        self.ctx.execute(request).await
    }
}

pub struct StickerUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn StickerUpdaterDelegate>,
}

impl<'a> StickerUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        server: Arc<Server>,
        sticker_id: Snowflake,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx
                .factory()
                .create_sticker_updater_delegate(server, sticker_id)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        description(description: impl Into<String>) => set_description(Some(description.into()));
        remove_description() => set_description(None);
        tags(tags: impl Into<String>) => set_tags(tags.into());
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        tracing::debug!(sticker_id = %self.delegate.sticker_id(), "Updating sticker");
        self.ctx.execute(request).await
    }
}

pub struct ScheduledEventBuilder<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn ScheduledEventBuilderDelegate>,
}

impl<'a> ScheduledEventBuilder<'a> {
    pub fn new(ctx: &'a ApiContext, server: Arc<Server>) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx.factory().create_scheduled_event_builder_delegate(server)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        description(description: impl Into<String>) => set_description(description.into());
        start_time(start: DateTime<Utc>) => set_scheduled_start_time(start);
        end_time(end: DateTime<Utc>) => set_scheduled_end_time(end);
        entity_type(entity_type: ScheduledEventEntityType) => set_entity_type(entity_type);
        channel(channel_id: Snowflake) => set_channel(channel_id);
        location(location: impl Into<String>) => set_location(location.into());
        image(image: ImageData) => set_image(image);
    }

    pub async fn create(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.create_request()?;
        tracing::debug!(server_id = %self.delegate.server().id, "Creating scheduled event");
        self.ctx.execute(request).await
    }
}

pub struct ScheduledEventUpdater<'a> {
    ctx: &'a ApiContext,
    delegate: Box<dyn ScheduledEventUpdaterDelegate>,
}

impl<'a> ScheduledEventUpdater<'a> {
    pub fn new(
        ctx: &'a ApiContext,
        server: Arc<Server>,
        event: Arc<ScheduledEvent>,
    ) -> Result<Self, DelegateError> {
        Ok(Self {
            ctx,
            delegate: ctx
                .factory()
                .create_scheduled_event_updater_delegate(server, event)?,
        })
    }

    forward! {
        audit_log_reason(reason: impl Into<String>) => set_audit_log_reason(reason.into());
        name(name: impl Into<String>) => set_name(name.into());
        description(description: impl Into<String>) => set_description(Some(description.into()));
        remove_description() => set_description(None);
        start_time(start: DateTime<Utc>) => set_scheduled_start_time(start);
        end_time(end: DateTime<Utc>) => set_scheduled_end_time(end);
        entity_type(entity_type: ScheduledEventEntityType) => set_entity_type(entity_type);
        channel(channel_id: Snowflake) => set_channel(Some(channel_id));
        location(location: impl Into<String>) => set_location(location.into());
        image(image: ImageData) => set_image(image);
        status(status: ScheduledEventStatus) => set_status(status);
    }

    pub async fn update(self) -> Result<RestResponse, ClientError> {
        let request = self.delegate.update_request()?;
        tracing::debug!(
            server_id = %self.delegate.server().id,
            event_id = %self.delegate.event().id,
            "Updating scheduled event"
        );
        self.ctx.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::context::testing::context;
    use crate::domain::rest::MockTransport;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn server() -> Arc<Server> {
        Arc::new(Server {
            id: Snowflake::new(100),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_server_create_posts_guilds() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.route == "/guilds" && r.body == Some(json!({ "name": "Hangout" })))
            .times(1)
            .returning(|_| Ok(RestResponse::new(201, json!({ "id": "100" }))));

        let ctx = context(transport);
        let response = ServerBuilder::new(&ctx)
            .unwrap()
            .name("Hangout")
            .create()
            .await
            .unwrap();
        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn test_server_update_rejects_odd_afk_timeout() {
        let ctx = context(MockTransport::new());
        let err = ServerUpdater::new(&ctx, server())
            .unwrap()
            .afk_timeout(42)
            .update()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Delegate(DelegateError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_sticker_updater_route() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.route == "/guilds/100/stickers/77")
            .times(1)
            .returning(|_| Ok(RestResponse::new(200, json!({}))));

        let ctx = context(transport);
        StickerUpdater::new(&ctx, server(), Snowflake::new(77))
            .unwrap()
            .remove_description()
            .update()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_scheduled_event_create_and_rate_limit() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|r| r.route == "/guilds/100/scheduled-events")
            .times(1)
            .returning(|_| {
                Ok(RestResponse::new(
                    429,
                    json!({ "retry_after": 2.5, "global": false }),
                ))
            });

        let ctx = context(transport);
        let start = Utc.with_ymd_and_hms(2026, 11, 1, 18, 0, 0).unwrap();
        let err = ScheduledEventBuilder::new(&ctx, server())
            .unwrap()
            .name("Meetup")
            .entity_type(ScheduledEventEntityType::External)
            .location("Town hall")
            .start_time(start)
            .end_time(start + Duration::hours(2))
            .create()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::RateLimited { retry_after, global: false } if retry_after == 2.5
        ));
    }

    #[tokio::test]
    async fn test_scheduled_event_invalid_transition() {
        let ctx = context(MockTransport::new());
        let start = Utc.with_ymd_and_hms(2026, 11, 1, 18, 0, 0).unwrap();
        let event = Arc::new(ScheduledEvent {
            id: Snowflake::new(9),
            server_id: Snowflake::new(100),
            channel_id: Some(Snowflake::new(3)),
            name: "Voice chat".into(),
            description: None,
            scheduled_start_time: start,
            scheduled_end_time: None,
            entity_type: ScheduledEventEntityType::Voice,
            status: ScheduledEventStatus::Completed,
            location: None,
        });

        let err = ScheduledEventUpdater::new(&ctx, server(), event)
            .unwrap()
            .status(ScheduledEventStatus::Active)
            .update()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Delegate(DelegateError::Validation(_))
        ));
    }
}
