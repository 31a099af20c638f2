//! Server, invite, sticker and scheduled event REST delegates.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use super::common::{require, with_changes, with_payload};
use crate::domain::delegates::{
    InviteBuilderDelegate, ScheduledEventBuilderDelegate, ScheduledEventUpdaterDelegate,
    ServerBuilderDelegate, ServerUpdaterDelegate, StickerBuilderDelegate, StickerUpdaterDelegate,
};
use crate::domain::entities::{
    ApiSession, DefaultMessageNotificationLevel, ExplicitContentFilterLevel, ScheduledEvent,
    ScheduledEventEntityType, ScheduledEventStatus, Server, ServerChannel, VerificationLevel,
};
use crate::domain::rest::{FileAttachment, RestRequest};
use crate::domain::value_objects::Snowflake;
use crate::shared::error::DelegateError;
use crate::shared::image::ImageData;

/// AFK timeouts the platform accepts, in seconds.
const AFK_TIMEOUTS: [u32; 5] = [60, 300, 900, 1800, 3600];

/// Maximum sticker file size.
const MAX_STICKER_SIZE: usize = 512 * 1024;

// =============================================================================
// Servers
// =============================================================================

#[derive(Debug, Default, Serialize, Validate)]
struct ServerCreatePayload {
    #[validate(length(min = 2, max = 100, message = "must be 2-100 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<ImageData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    verification_level: Option<VerificationLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    default_message_notifications: Option<DefaultMessageNotificationLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_content_filter: Option<ExplicitContentFilterLevel>,
}

pub struct RestServerBuilderDelegate {
    session: Arc<ApiSession>,
    payload: ServerCreatePayload,
}

impl RestServerBuilderDelegate {
    pub fn new(session: Arc<ApiSession>) -> Self {
        Self {
            session,
            payload: ServerCreatePayload::default(),
        }
    }
}

impl ServerBuilderDelegate for RestServerBuilderDelegate {
    fn session(&self) -> &ApiSession {
        &self.session
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_icon(&mut self, icon: ImageData) {
        self.payload.icon = Some(icon);
    }

    fn set_verification_level(&mut self, level: VerificationLevel) {
        self.payload.verification_level = Some(level);
    }

    fn set_default_message_notification_level(&mut self, level: DefaultMessageNotificationLevel) {
        self.payload.default_message_notifications = Some(level);
    }

    fn set_explicit_content_filter_level(&mut self, level: ExplicitContentFilterLevel) {
        self.payload.explicit_content_filter = Some(level);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        with_payload(RestRequest::post("/guilds"), &self.payload)
    }
}

#[derive(Debug, Default, Serialize, Validate)]
struct ServerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 100, message = "must be 2-100 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<Option<ImageData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    verification_level: Option<VerificationLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    default_message_notifications: Option<DefaultMessageNotificationLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    explicit_content_filter: Option<ExplicitContentFilterLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    afk_channel_id: Option<Option<Snowflake>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    afk_timeout: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    system_channel_id: Option<Option<Snowflake>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    owner_id: Option<Snowflake>,
}

pub struct RestServerUpdaterDelegate {
    server: Arc<Server>,
    patch: ServerPatch,
    reason: Option<String>,
}

impl RestServerUpdaterDelegate {
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            patch: ServerPatch::default(),
            reason: None,
        }
    }
}

impl ServerUpdaterDelegate for RestServerUpdaterDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn set_description(&mut self, description: Option<String>) {
        self.patch.description = Some(description);
    }

    fn set_icon(&mut self, icon: Option<ImageData>) {
        self.patch.icon = Some(icon);
    }

    fn set_verification_level(&mut self, level: VerificationLevel) {
        self.patch.verification_level = Some(level);
    }

    fn set_default_message_notification_level(&mut self, level: DefaultMessageNotificationLevel) {
        self.patch.default_message_notifications = Some(level);
    }

    fn set_explicit_content_filter_level(&mut self, level: ExplicitContentFilterLevel) {
        self.patch.explicit_content_filter = Some(level);
    }

    fn set_afk_channel(&mut self, channel_id: Option<Snowflake>) {
        self.patch.afk_channel_id = Some(channel_id);
    }

    fn set_afk_timeout(&mut self, seconds: u32) {
        self.patch.afk_timeout = Some(seconds);
    }

    fn set_system_channel(&mut self, channel_id: Option<Snowflake>) {
        self.patch.system_channel_id = Some(channel_id);
    }

    fn set_owner(&mut self, user_id: Snowflake) {
        self.patch.owner_id = Some(user_id);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        if let Some(timeout) = self.patch.afk_timeout {
            if !AFK_TIMEOUTS.contains(&timeout) {
                return Err(DelegateError::Validation(format!(
                    "afk_timeout: must be one of {:?}",
                    AFK_TIMEOUTS
                )));
            }
        }

        let request = RestRequest::patch(format!("/guilds/{}", self.server.id))
            .with_reason(self.reason.clone());
        with_changes(request, &self.patch)
    }
}

// =============================================================================
// Invites
// =============================================================================

#[derive(Debug, Default, Serialize, Validate)]
struct InvitePayload {
    /// Seconds, 0 for never
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 604800, message = "must be at most 7 days"))]
    max_age: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 100, message = "must be at most 100"))]
    max_uses: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    temporary: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    unique: Option<bool>,
}

pub struct RestInviteBuilderDelegate {
    channel: Arc<ServerChannel>,
    payload: InvitePayload,
    reason: Option<String>,
}

impl RestInviteBuilderDelegate {
    pub fn new(channel: Arc<ServerChannel>) -> Self {
        Self {
            channel,
            payload: InvitePayload::default(),
            reason: None,
        }
    }
}

impl InviteBuilderDelegate for RestInviteBuilderDelegate {
    fn channel(&self) -> &ServerChannel {
        &self.channel
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_max_age(&mut self, seconds: u32) {
        self.payload.max_age = Some(seconds);
    }

    fn set_max_uses(&mut self, uses: u32) {
        self.payload.max_uses = Some(uses);
    }

    fn set_temporary(&mut self, temporary: bool) {
        self.payload.temporary = Some(temporary);
    }

    fn set_never_reuse(&mut self, unique: bool) {
        self.payload.unique = Some(unique);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        let request = RestRequest::post(format!("/channels/{}/invites", self.channel.id()))
            .with_reason(self.reason.clone());
        with_payload(request, &self.payload)
    }
}

// =============================================================================
// Stickers
// =============================================================================

#[derive(Debug, Default, Serialize, Validate)]
struct StickerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 30, message = "must be 2-30 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    tags: Option<String>,
}

fn check_sticker_description(payload: &StickerPayload) -> Result<(), DelegateError> {
    match payload.description.as_ref().and_then(|d| d.as_deref()) {
        Some(d) if !d.is_empty() && !(2..=100).contains(&d.chars().count()) => Err(
            DelegateError::Validation("description: must be empty or 2-100 characters".into()),
        ),
        _ => Ok(()),
    }
}

pub struct RestStickerBuilderDelegate {
    server: Arc<Server>,
    payload: StickerPayload,
    file: Option<FileAttachment>,
    reason: Option<String>,
}

impl RestStickerBuilderDelegate {
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            payload: StickerPayload::default(),
            file: None,
            reason: None,
        }
    }
}

impl StickerBuilderDelegate for RestStickerBuilderDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_description(&mut self, description: String) {
        self.payload.description = Some(Some(description));
    }

    fn set_tags(&mut self, tags: String) {
        self.payload.tags = Some(tags);
    }

    fn set_file(&mut self, file: FileAttachment) {
        self.file = Some(file);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        require(&self.payload.tags, "tags")?;
        let file = require(&self.file, "file")?;
        if file.bytes.len() > MAX_STICKER_SIZE {
            return Err(DelegateError::Validation(
                "file: must be at most 512 KiB".into(),
            ));
        }
        check_sticker_description(&self.payload)?;

        let request = RestRequest::post(format!("/guilds/{}/stickers", self.server.id))
            .with_reason(self.reason.clone())
            .with_files(vec![file.clone()]);
        with_payload(request, &self.payload)
    }
}

pub struct RestStickerUpdaterDelegate {
    server: Arc<Server>,
    sticker_id: Snowflake,
    patch: StickerPayload,
    reason: Option<String>,
}

impl RestStickerUpdaterDelegate {
    pub fn new(server: Arc<Server>, sticker_id: Snowflake) -> Self {
        Self {
            server,
            sticker_id,
            patch: StickerPayload::default(),
            reason: None,
        }
    }
}

impl StickerUpdaterDelegate for RestStickerUpdaterDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn sticker_id(&self) -> Snowflake {
        self.sticker_id
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn set_description(&mut self, description: Option<String>) {
        self.patch.description = Some(description);
    }

    fn set_tags(&mut self, tags: String) {
        self.patch.tags = Some(tags);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        check_sticker_description(&self.patch)?;
        let request = RestRequest::patch(format!(
            "/guilds/{}/stickers/{}",
            self.server.id, self.sticker_id
        ))
        .with_reason(self.reason.clone());
        with_changes(request, &self.patch)
    }
}

// =============================================================================
// Scheduled events
// =============================================================================

/// Events are always visible to server members only.
const PRIVACY_LEVEL_SERVER_ONLY: u8 = 2;

#[derive(Debug, Clone, Serialize)]
struct EntityMetadata {
    location: String,
}

#[derive(Debug, Default, Serialize, Validate)]
struct ScheduledEventPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    privacy_level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    scheduled_start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    scheduled_end_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    entity_type: Option<ScheduledEventEntityType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    channel_id: Option<Option<Snowflake>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    entity_metadata: Option<EntityMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ImageData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ScheduledEventStatus>,
}

/// The event as it would look after applying a payload.
struct EventShape<'a> {
    entity_type: ScheduledEventEntityType,
    channel_id: Option<Snowflake>,
    location: Option<&'a str>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl EventShape<'_> {
    fn check(&self) -> Result<(), DelegateError> {
        match self.entity_type {
            ScheduledEventEntityType::External => {
                if self.location.map_or(true, str::is_empty) {
                    return Err(DelegateError::MissingField("entity_metadata.location"));
                }
                if self.end.is_none() {
                    return Err(DelegateError::MissingField("scheduled_end_time"));
                }
            }
            ScheduledEventEntityType::StageInstance | ScheduledEventEntityType::Voice => {
                if self.channel_id.is_none() {
                    return Err(DelegateError::MissingField("channel_id"));
                }
            }
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end <= start {
                return Err(DelegateError::Validation(
                    "scheduled_end_time: must be after the start time".into(),
                ));
            }
        }
        Ok(())
    }
}

fn check_event_description(payload: &ScheduledEventPayload) -> Result<(), DelegateError> {
    match payload.description.as_ref().and_then(|d| d.as_deref()) {
        Some(d) if d.chars().count() > 1000 => Err(DelegateError::Validation(
            "description: must be at most 1000 characters".into(),
        )),
        _ => Ok(()),
    }
}

pub struct RestScheduledEventBuilderDelegate {
    server: Arc<Server>,
    payload: ScheduledEventPayload,
    reason: Option<String>,
}

impl RestScheduledEventBuilderDelegate {
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            payload: ScheduledEventPayload {
                privacy_level: Some(PRIVACY_LEVEL_SERVER_ONLY),
                ..Default::default()
            },
            reason: None,
        }
    }
}

impl ScheduledEventBuilderDelegate for RestScheduledEventBuilderDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn set_description(&mut self, description: String) {
        self.payload.description = Some(Some(description));
    }

    fn set_scheduled_start_time(&mut self, start: DateTime<Utc>) {
        self.payload.scheduled_start_time = Some(start);
    }

    fn set_scheduled_end_time(&mut self, end: DateTime<Utc>) {
        self.payload.scheduled_end_time = Some(end);
    }

    fn set_entity_type(&mut self, entity_type: ScheduledEventEntityType) {
        self.payload.entity_type = Some(entity_type);
    }

    fn set_channel(&mut self, channel_id: Snowflake) {
        self.payload.channel_id = Some(Some(channel_id));
    }

    fn set_location(&mut self, location: String) {
        self.payload.entity_metadata = Some(EntityMetadata { location });
    }

    fn set_image(&mut self, image: ImageData) {
        self.payload.image = Some(image);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        let start = *require(&self.payload.scheduled_start_time, "scheduled_start_time")?;
        let entity_type = *require(&self.payload.entity_type, "entity_type")?;
        check_event_description(&self.payload)?;

        EventShape {
            entity_type,
            channel_id: self.payload.channel_id.flatten(),
            location: self.payload.entity_metadata.as_ref().map(|m| m.location.as_str()),
            start: Some(start),
            end: self.payload.scheduled_end_time,
        }
        .check()?;

        let request = RestRequest::post(format!("/guilds/{}/scheduled-events", self.server.id))
            .with_reason(self.reason.clone());
        with_payload(request, &self.payload)
    }
}

pub struct RestScheduledEventUpdaterDelegate {
    server: Arc<Server>,
    event: Arc<ScheduledEvent>,
    patch: ScheduledEventPayload,
    reason: Option<String>,
}

impl RestScheduledEventUpdaterDelegate {
    pub fn new(server: Arc<Server>, event: Arc<ScheduledEvent>) -> Self {
        Self {
            server,
            event,
            patch: ScheduledEventPayload::default(),
            reason: None,
        }
    }

    fn check_status_transition(&self) -> Result<(), DelegateError> {
        use ScheduledEventStatus::*;

        let Some(next) = self.patch.status else {
            return Ok(());
        };
        let allowed = matches!(
            (self.event.status, next),
            (Scheduled, Active) | (Scheduled, Canceled) | (Active, Completed)
        );
        if !allowed {
            return Err(DelegateError::Validation(format!(
                "status: cannot change from {:?} to {:?}",
                self.event.status, next
            )));
        }
        Ok(())
    }
}

impl ScheduledEventUpdaterDelegate for RestScheduledEventUpdaterDelegate {
    fn server(&self) -> &Server {
        &self.server
    }

    fn event(&self) -> &ScheduledEvent {
        &self.event
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn set_description(&mut self, description: Option<String>) {
        self.patch.description = Some(description);
    }

    fn set_scheduled_start_time(&mut self, start: DateTime<Utc>) {
        self.patch.scheduled_start_time = Some(start);
    }

    fn set_scheduled_end_time(&mut self, end: DateTime<Utc>) {
        self.patch.scheduled_end_time = Some(end);
    }

    fn set_entity_type(&mut self, entity_type: ScheduledEventEntityType) {
        self.patch.entity_type = Some(entity_type);
        if entity_type == ScheduledEventEntityType::External {
            self.patch.channel_id = Some(None);
        }
    }

    fn set_channel(&mut self, channel_id: Option<Snowflake>) {
        self.patch.channel_id = Some(channel_id);
    }

    fn set_location(&mut self, location: String) {
        self.patch.entity_metadata = Some(EntityMetadata { location });
    }

    fn set_image(&mut self, image: ImageData) {
        self.patch.image = Some(image);
    }

    fn set_status(&mut self, status: ScheduledEventStatus) {
        self.patch.status = Some(status);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        check_event_description(&self.patch)?;
        self.check_status_transition()?;

        let event = &self.event;
        EventShape {
            entity_type: self.patch.entity_type.unwrap_or(event.entity_type),
            channel_id: self.patch.channel_id.unwrap_or(event.channel_id),
            location: self
                .patch
                .entity_metadata
                .as_ref()
                .map(|m| m.location.as_str())
                .or(event.location.as_deref()),
            start: self.patch.scheduled_start_time.or(Some(event.scheduled_start_time)),
            end: self.patch.scheduled_end_time.or(event.scheduled_end_time),
        }
        .check()?;

        let request = RestRequest::patch(format!(
            "/guilds/{}/scheduled-events/{}",
            self.server.id, event.id
        ))
        .with_reason(self.reason.clone());
        with_changes(request, &self.patch)
    }
}
