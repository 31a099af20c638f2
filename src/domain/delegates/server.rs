//! Server-level delegates: servers, invites, stickers and scheduled events.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    ApiSession, DefaultMessageNotificationLevel, ExplicitContentFilterLevel, ScheduledEvent,
    ScheduledEventEntityType, ScheduledEventStatus, Server, ServerChannel, VerificationLevel,
};
use crate::domain::rest::{FileAttachment, RestRequest};
use crate::domain::value_objects::Snowflake;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

pub trait ServerBuilderDelegate: Send {
    fn session(&self) -> &ApiSession;
    fn set_name(&mut self, name: String);
    fn set_icon(&mut self, icon: ImageData);
    fn set_verification_level(&mut self, level: VerificationLevel);
    fn set_default_message_notification_level(&mut self, level: DefaultMessageNotificationLevel);
    fn set_explicit_content_filter_level(&mut self, level: ExplicitContentFilterLevel);

    /// `POST /guilds`
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

/// Modifies server settings. Clearing an optional setting sends `null`.
pub trait ServerUpdaterDelegate: Send {
    fn server(&self) -> &Server;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_description(&mut self, description: Option<String>);
    fn set_icon(&mut self, icon: Option<ImageData>);
    fn set_verification_level(&mut self, level: VerificationLevel);
    fn set_default_message_notification_level(&mut self, level: DefaultMessageNotificationLevel);
    fn set_explicit_content_filter_level(&mut self, level: ExplicitContentFilterLevel);
    fn set_afk_channel(&mut self, channel_id: Option<Snowflake>);

    /// Seconds; the platform accepts 60, 300, 900, 1800 and 3600.
    fn set_afk_timeout(&mut self, seconds: u32);
    fn set_system_channel(&mut self, channel_id: Option<Snowflake>);

    /// Transfer ownership. Only the current owner can do this.
    fn set_owner(&mut self, user_id: Snowflake);

    /// `PATCH /guilds/{server}`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait InviteBuilderDelegate: Send {
    fn channel(&self) -> &ServerChannel;
    fn set_audit_log_reason(&mut self, reason: String);

    /// Seconds until expiry, 0 for never (max 604800).
    fn set_max_age(&mut self, seconds: u32);

    /// 0 for unlimited (max 100).
    fn set_max_uses(&mut self, uses: u32);
    fn set_temporary(&mut self, temporary: bool);
    fn set_never_reuse(&mut self, unique: bool);

    /// `POST /channels/{channel}/invites`
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait StickerBuilderDelegate: Send {
    fn server(&self) -> &Server;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_description(&mut self, description: String);

    /// Autocomplete tags, comma separated.
    fn set_tags(&mut self, tags: String);

    /// PNG, APNG, GIF or Lottie JSON file, at most 512 KiB.
    fn set_file(&mut self, file: FileAttachment);

    /// `POST /guilds/{server}/stickers` (multipart)
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait StickerUpdaterDelegate: Send {
    fn server(&self) -> &Server;
    fn sticker_id(&self) -> Snowflake;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_description(&mut self, description: Option<String>);
    fn set_tags(&mut self, tags: String);

    /// `PATCH /guilds/{server}/stickers/{sticker}`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait ScheduledEventBuilderDelegate: Send {
    fn server(&self) -> &Server;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_description(&mut self, description: String);
    fn set_scheduled_start_time(&mut self, start: DateTime<Utc>);
    fn set_scheduled_end_time(&mut self, end: DateTime<Utc>);
    fn set_entity_type(&mut self, entity_type: ScheduledEventEntityType);

    /// Stage or voice channel; required for non-external events.
    fn set_channel(&mut self, channel_id: Snowflake);

    /// Required for external events.
    fn set_location(&mut self, location: String);
    fn set_image(&mut self, image: ImageData);

    /// `POST /guilds/{server}/scheduled-events`
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait ScheduledEventUpdaterDelegate: Send {
    fn server(&self) -> &Server;
    fn event(&self) -> &ScheduledEvent;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);
    fn set_description(&mut self, description: Option<String>);
    fn set_scheduled_start_time(&mut self, start: DateTime<Utc>);
    fn set_scheduled_end_time(&mut self, end: DateTime<Utc>);
    fn set_entity_type(&mut self, entity_type: ScheduledEventEntityType);
    fn set_channel(&mut self, channel_id: Option<Snowflake>);
    fn set_location(&mut self, location: String);
    fn set_image(&mut self, image: ImageData);
    fn set_status(&mut self, status: ScheduledEventStatus);

    /// `PATCH /guilds/{server}/scheduled-events/{event}`
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}
