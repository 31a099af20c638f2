//! Channel builder and updater REST delegates.
//!
//! The four regular channel builders share one generic implementation,
//! parameterized by a marker for the channel type they create. Updaters are
//! generic over the typed channel view they were created for, so the type
//! specific setters only exist where the view allows them.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use super::common::{remove_overwrite, require, upsert_overwrite, with_changes, with_payload};
use crate::domain::delegates::{
    AutoArchiveDuration, ChannelCategoryBuilderDelegate, RegularServerChannelBuilderDelegate,
    RegularServerChannelUpdaterDelegate, ServerChannelBuilderDelegate,
    ServerChannelUpdaterDelegate, ServerForumChannelBuilderDelegate,
    ServerForumChannelUpdaterDelegate, ServerTextChannelBuilderDelegate,
    ServerTextChannelUpdaterDelegate, ServerThreadChannelUpdaterDelegate,
    ServerVoiceChannelBuilderDelegate, ServerVoiceChannelUpdaterDelegate, ThreadBuilderDelegate,
    ThreadOrigin,
};
use crate::domain::entities::{
    Channel, ChannelCategory, ChannelType, Message, RegularServerChannel, Server, ServerChannel,
    ServerForumChannel, ServerTextChannel, ServerThreadChannel, ServerVoiceChannel,
};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{OverwriteTarget, PermissionOverwrite, Snowflake};
use crate::shared::error::DelegateError;

const MAX_TOPIC_LENGTH: usize = 1024;
const MAX_FORUM_TOPIC_LENGTH: usize = 4096;

fn check_topic(channel_type: ChannelType, topic: Option<&str>) -> Result<(), DelegateError> {
    let max = if channel_type == ChannelType::Forum {
        MAX_FORUM_TOPIC_LENGTH
    } else {
        MAX_TOPIC_LENGTH
    };
    match topic {
        Some(topic) if topic.chars().count() > max => Err(DelegateError::Validation(format!(
            "topic: must be at most {} characters",
            max
        ))),
        _ => Ok(()),
    }
}

// =============================================================================
// Regular channel builders
// =============================================================================

/// Channel type created by a [`RestChannelBuilderDelegate`].
pub trait BuiltChannel: Send + 'static {
    const TYPE: ChannelType;
}

pub enum Category {}
pub enum Text {}
pub enum Forum {}
pub enum Voice {}

impl BuiltChannel for Category {
    const TYPE: ChannelType = ChannelType::Category;
}

impl BuiltChannel for Text {
    const TYPE: ChannelType = ChannelType::Text;
}

impl BuiltChannel for Forum {
    const TYPE: ChannelType = ChannelType::Forum;
}

impl BuiltChannel for Voice {
    const TYPE: ChannelType = ChannelType::Voice;
}

#[derive(Debug, Default, Serialize, Validate)]
struct ChannelCreatePayload {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    name: Option<String>,

    #[serde(rename = "type")]
    channel_type: ChannelType,

    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<i32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    permission_overwrites: Vec<PermissionOverwrite>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<Snowflake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nsfw: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 21600, message = "must be at most 21600 seconds"))]
    rate_limit_per_user: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 8000, max = 384000, message = "must be 8000-384000"))]
    bitrate: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 99, message = "must be at most 99"))]
    user_limit: Option<u32>,
}

pub struct RestChannelBuilderDelegate<K> {
    server: Arc<Server>,
    payload: ChannelCreatePayload,
    reason: Option<String>,
    kind: PhantomData<K>,
}

pub type RestChannelCategoryBuilderDelegate = RestChannelBuilderDelegate<Category>;
pub type RestServerTextChannelBuilderDelegate = RestChannelBuilderDelegate<Text>;
pub type RestServerForumChannelBuilderDelegate = RestChannelBuilderDelegate<Forum>;
pub type RestServerVoiceChannelBuilderDelegate = RestChannelBuilderDelegate<Voice>;

impl<K: BuiltChannel> RestChannelBuilderDelegate<K> {
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            payload: ChannelCreatePayload {
                channel_type: K::TYPE,
                ..Default::default()
            },
            reason: None,
            kind: PhantomData,
        }
    }

    fn assign_category(&mut self, category: Option<&ChannelCategory>) {
        self.payload.parent_id = category.map(ChannelCategory::id);
    }
}

impl<K: BuiltChannel> ServerChannelBuilderDelegate for RestChannelBuilderDelegate<K> {
    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;
        check_topic(K::TYPE, self.payload.topic.as_deref())?;

        let request = RestRequest::post(format!("/guilds/{}/channels", self.server.id))
            .with_reason(self.reason.clone());
        with_payload(request, &self.payload)
    }
}

impl<K: BuiltChannel> RegularServerChannelBuilderDelegate for RestChannelBuilderDelegate<K> {
    fn server(&self) -> &Server {
        &self.server
    }

    fn set_raw_position(&mut self, position: i32) {
        self.payload.position = Some(position);
    }

    fn add_permission_overwrite(&mut self, overwrite: PermissionOverwrite) {
        upsert_overwrite(&mut self.payload.permission_overwrites, overwrite);
    }

    fn remove_permission_overwrite(&mut self, target: OverwriteTarget) {
        remove_overwrite(&mut self.payload.permission_overwrites, target);
    }
}

impl ChannelCategoryBuilderDelegate for RestChannelBuilderDelegate<Category> {}

impl ServerTextChannelBuilderDelegate for RestChannelBuilderDelegate<Text> {
    fn set_category(&mut self, category: Option<&ChannelCategory>) {
        self.assign_category(category);
    }

    fn set_topic(&mut self, topic: String) {
        self.payload.topic = Some(topic);
    }

    fn set_slowmode_delay(&mut self, seconds: u32) {
        self.payload.rate_limit_per_user = Some(seconds);
    }

    fn set_nsfw(&mut self, nsfw: bool) {
        self.payload.nsfw = Some(nsfw);
    }
}

impl ServerForumChannelBuilderDelegate for RestChannelBuilderDelegate<Forum> {
    fn set_category(&mut self, category: Option<&ChannelCategory>) {
        self.assign_category(category);
    }

    fn set_topic(&mut self, topic: String) {
        self.payload.topic = Some(topic);
    }

    fn set_nsfw(&mut self, nsfw: bool) {
        self.payload.nsfw = Some(nsfw);
    }
}

impl ServerVoiceChannelBuilderDelegate for RestChannelBuilderDelegate<Voice> {
    fn set_category(&mut self, category: Option<&ChannelCategory>) {
        self.assign_category(category);
    }

    fn set_bitrate(&mut self, bitrate: u32) {
        self.payload.bitrate = Some(bitrate);
    }

    fn set_user_limit(&mut self, user_limit: u32) {
        self.payload.user_limit = Some(user_limit);
    }
}

// =============================================================================
// Thread builder
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Validate)]
struct ThreadCreatePayload {
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    auto_archive_duration: Option<u32>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    thread_type: Option<ChannelType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    invitable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 21600, message = "must be at most 21600 seconds"))]
    rate_limit_per_user: Option<u32>,
}

pub struct RestThreadBuilderDelegate {
    origin: ThreadOrigin,
    payload: ThreadCreatePayload,
    private: bool,
    reason: Option<String>,
}

impl RestThreadBuilderDelegate {
    pub fn from_channel(channel: Arc<ServerTextChannel>) -> Self {
        Self::new(ThreadOrigin::Channel(channel))
    }

    pub fn from_message(message: Arc<Message>) -> Self {
        Self::new(ThreadOrigin::Message(message))
    }

    fn new(origin: ThreadOrigin) -> Self {
        Self {
            origin,
            payload: ThreadCreatePayload::default(),
            private: false,
            reason: None,
        }
    }
}

impl ServerChannelBuilderDelegate for RestThreadBuilderDelegate {
    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.payload.name = Some(name);
    }

    fn create_request(&self) -> Result<RestRequest, DelegateError> {
        require(&self.payload.name, "name")?;

        let mut payload = self.payload.clone();
        let route = match &self.origin {
            ThreadOrigin::Channel(channel) => {
                payload.thread_type = Some(match (self.private, channel.channel().channel_type) {
                    (true, _) => ChannelType::PrivateThread,
                    (false, ChannelType::Announcement) => ChannelType::AnnouncementThread,
                    (false, _) => ChannelType::PublicThread,
                });
                format!("/channels/{}/threads", channel.id())
            }
            ThreadOrigin::Message(message) => {
                if self.private {
                    return Err(DelegateError::Validation(
                        "type: threads started from a message cannot be private".into(),
                    ));
                }
                format!("/channels/{}/messages/{}/threads", message.channel_id, message.id)
            }
        };

        let request = RestRequest::post(route).with_reason(self.reason.clone());
        with_payload(request, &payload)
    }
}

impl ThreadBuilderDelegate for RestThreadBuilderDelegate {
    fn origin(&self) -> &ThreadOrigin {
        &self.origin
    }

    fn set_auto_archive_duration(&mut self, duration: AutoArchiveDuration) {
        self.payload.auto_archive_duration = Some(duration.minutes());
    }

    fn set_private(&mut self, private: bool) {
        self.private = private;
    }

    fn set_invitable(&mut self, invitable: bool) {
        self.payload.invitable = Some(invitable);
    }

    fn set_slowmode_delay(&mut self, seconds: u32) {
        self.payload.rate_limit_per_user = Some(seconds);
    }
}

// =============================================================================
// Updaters
// =============================================================================

/// A typed channel view an updater can be created for.
pub trait ChannelView: Send + Sync + 'static {
    fn as_channel(&self) -> &Channel;
}

/// Views of channels that are not threads.
pub trait RegularChannelView: ChannelView {}

macro_rules! channel_view {
    ($($view:ident),+ $(,)?) => {
        $(
            impl ChannelView for $view {
                fn as_channel(&self) -> &Channel {
                    self.channel()
                }
            }
        )+
    };
}

channel_view!(
    ServerChannel,
    RegularServerChannel,
    ServerTextChannel,
    ServerForumChannel,
    ServerVoiceChannel,
    ServerThreadChannel,
);

impl RegularChannelView for RegularServerChannel {}
impl RegularChannelView for ServerTextChannel {}
impl RegularChannelView for ServerForumChannel {}
impl RegularChannelView for ServerVoiceChannel {}

#[derive(Debug, Default, Serialize, Validate)]
struct ChannelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nsfw: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 21600, message = "must be at most 21600 seconds"))]
    rate_limit_per_user: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 8000, max = 384000, message = "must be 8000-384000"))]
    bitrate: Option<u32>,

    /// 0 removes the limit
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 99, message = "must be at most 99"))]
    user_limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<Option<Snowflake>>,

    /// The complete list; the platform replaces all overwrites
    #[serde(skip_serializing_if = "Option::is_none")]
    permission_overwrites: Option<Vec<PermissionOverwrite>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    auto_archive_duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    invitable: Option<bool>,
}

pub struct RestChannelUpdaterDelegate<V> {
    view: Arc<V>,
    patch: ChannelPatch,
    reason: Option<String>,
}

pub type RestServerChannelUpdaterDelegate = RestChannelUpdaterDelegate<ServerChannel>;
pub type RestRegularServerChannelUpdaterDelegate = RestChannelUpdaterDelegate<RegularServerChannel>;
pub type RestServerTextChannelUpdaterDelegate = RestChannelUpdaterDelegate<ServerTextChannel>;
pub type RestServerForumChannelUpdaterDelegate = RestChannelUpdaterDelegate<ServerForumChannel>;
pub type RestServerVoiceChannelUpdaterDelegate = RestChannelUpdaterDelegate<ServerVoiceChannel>;
pub type RestServerThreadChannelUpdaterDelegate = RestChannelUpdaterDelegate<ServerThreadChannel>;

impl<V: ChannelView> RestChannelUpdaterDelegate<V> {
    pub fn new(view: Arc<V>) -> Self {
        Self {
            view,
            patch: ChannelPatch::default(),
            reason: None,
        }
    }

    /// Pending overwrites, seeded from the channel on first change.
    fn overwrites_mut(&mut self) -> &mut Vec<PermissionOverwrite> {
        let current = &self.view.as_channel().permission_overwrites;
        self.patch
            .permission_overwrites
            .get_or_insert_with(|| current.clone())
    }

    fn assign_category(&mut self, category: Option<&ChannelCategory>) {
        self.patch.parent_id = Some(category.map(ChannelCategory::id));
    }
}

impl<V: ChannelView> ServerChannelUpdaterDelegate for RestChannelUpdaterDelegate<V> {
    fn channel(&self) -> &Channel {
        self.view.as_channel()
    }

    fn set_audit_log_reason(&mut self, reason: String) {
        self.reason = Some(reason);
    }

    fn set_name(&mut self, name: String) {
        self.patch.name = Some(name);
    }

    fn update_request(&self) -> Result<RestRequest, DelegateError> {
        let channel = self.view.as_channel();
        check_topic(
            channel.channel_type,
            self.patch.topic.as_ref().and_then(|t| t.as_deref()),
        )?;

        let request = RestRequest::patch(format!("/channels/{}", channel.id))
            .with_reason(self.reason.clone());
        with_changes(request, &self.patch)
    }
}

impl<V: RegularChannelView> RegularServerChannelUpdaterDelegate for RestChannelUpdaterDelegate<V> {
    fn set_raw_position(&mut self, position: i32) {
        self.patch.position = Some(position);
    }

    fn add_permission_overwrite(&mut self, overwrite: PermissionOverwrite) {
        upsert_overwrite(self.overwrites_mut(), overwrite);
    }

    fn remove_permission_overwrite(&mut self, target: OverwriteTarget) {
        remove_overwrite(self.overwrites_mut(), target);
    }
}

impl ServerTextChannelUpdaterDelegate for RestChannelUpdaterDelegate<ServerTextChannel> {
    fn set_topic(&mut self, topic: Option<String>) {
        self.patch.topic = Some(topic);
    }

    fn set_nsfw(&mut self, nsfw: bool) {
        self.patch.nsfw = Some(nsfw);
    }

    fn set_slowmode_delay(&mut self, seconds: u32) {
        self.patch.rate_limit_per_user = Some(seconds);
    }

    fn set_category(&mut self, category: Option<&ChannelCategory>) {
        self.assign_category(category);
    }
}

impl ServerForumChannelUpdaterDelegate for RestChannelUpdaterDelegate<ServerForumChannel> {
    fn set_topic(&mut self, topic: Option<String>) {
        self.patch.topic = Some(topic);
    }

    fn set_nsfw(&mut self, nsfw: bool) {
        self.patch.nsfw = Some(nsfw);
    }

    fn set_category(&mut self, category: Option<&ChannelCategory>) {
        self.assign_category(category);
    }
}

impl ServerVoiceChannelUpdaterDelegate for RestChannelUpdaterDelegate<ServerVoiceChannel> {
    fn set_bitrate(&mut self, bitrate: u32) {
        self.patch.bitrate = Some(bitrate);
    }

    fn set_user_limit(&mut self, user_limit: Option<u32>) {
        self.patch.user_limit = Some(user_limit.unwrap_or(0));
    }

    fn set_category(&mut self, category: Option<&ChannelCategory>) {
        self.assign_category(category);
    }
}

impl ServerThreadChannelUpdaterDelegate for RestChannelUpdaterDelegate<ServerThreadChannel> {
    fn set_archived(&mut self, archived: bool) {
        self.patch.archived = Some(archived);
    }

    fn set_locked(&mut self, locked: bool) {
        self.patch.locked = Some(locked);
    }

    fn set_auto_archive_duration(&mut self, duration: AutoArchiveDuration) {
        self.patch.auto_archive_duration = Some(duration.minutes());
    }

    fn set_invitable(&mut self, invitable: bool) {
        self.patch.invitable = Some(invitable);
    }

    fn set_slowmode_delay(&mut self, seconds: u32) {
        self.patch.rate_limit_per_user = Some(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Permissions;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn server() -> Arc<Server> {
        Arc::new(Server {
            id: Snowflake::new(100),
            name: "Rustaceans".into(),
            ..Default::default()
        })
    }

    fn channel(id: i64, channel_type: ChannelType) -> Channel {
        Channel {
            id: Snowflake::new(id),
            server_id: Some(Snowflake::new(100)),
            name: "general".into(),
            channel_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_channel_create_request() {
        let category = ChannelCategory::try_from(channel(9, ChannelType::Category)).unwrap();
        let mut builder = RestServerTextChannelBuilderDelegate::new(server());
        builder.set_name("news".into());
        builder.set_topic("Announcements".into());
        ServerTextChannelBuilderDelegate::set_category(&mut builder, Some(&category));
        builder.set_audit_log_reason("reorg".into());

        let request = builder.create_request().unwrap();
        assert_eq!(request.route, "/guilds/100/channels");
        assert_eq!(request.audit_log_reason.as_deref(), Some("reorg"));
        assert_eq!(
            request.body,
            Some(json!({
                "name": "news",
                "type": 0,
                "topic": "Announcements",
                "parent_id": "9"
            }))
        );
    }

    #[test]
    fn test_channel_builder_requires_name() {
        let builder = RestChannelCategoryBuilderDelegate::new(server());
        assert!(matches!(
            builder.create_request(),
            Err(DelegateError::MissingField("name"))
        ));
    }

    #[test]
    fn test_voice_builder_type_and_bitrate_range() {
        let mut builder = RestServerVoiceChannelBuilderDelegate::new(server());
        builder.set_name("Lounge".into());
        builder.set_bitrate(1000);
        assert!(matches!(
            builder.create_request(),
            Err(DelegateError::Validation(_))
        ));

        builder.set_bitrate(64000);
        let body = builder.create_request().unwrap().body.unwrap();
        assert_eq!(body["type"], json!(2));
        assert_eq!(body["bitrate"], json!(64000));
    }

    #[test]
    fn test_forum_topic_allows_longer_text() {
        let mut builder = RestServerForumChannelBuilderDelegate::new(server());
        builder.set_name("help".into());
        builder.set_topic("x".repeat(2000));
        assert!(builder.create_request().is_ok());
    }

    #[test]
    fn test_thread_routes_differ_by_origin() {
        let text = Arc::new(ServerTextChannel::try_from(channel(3, ChannelType::Text)).unwrap());
        let mut from_channel = RestThreadBuilderDelegate::from_channel(text);
        from_channel.set_name("design".into());
        from_channel.set_private(true);
        let request = from_channel.create_request().unwrap();
        assert_eq!(request.route, "/channels/3/threads");
        assert_eq!(request.body.unwrap()["type"], json!(12));

        let message = Arc::new(Message {
            id: Snowflake::new(44),
            channel_id: Snowflake::new(3),
            ..Default::default()
        });
        let mut from_message = RestThreadBuilderDelegate::from_message(message);
        from_message.set_name("discussion".into());
        from_message.set_auto_archive_duration(AutoArchiveDuration::OneWeek);
        let request = from_message.create_request().unwrap();
        assert_eq!(request.route, "/channels/3/messages/44/threads");
        assert_eq!(
            request.body,
            Some(json!({ "name": "discussion", "auto_archive_duration": 10080 }))
        );
    }

    #[test]
    fn test_message_thread_cannot_be_private() {
        let mut builder = RestThreadBuilderDelegate::from_message(Arc::new(Message::default()));
        builder.set_name("secret".into());
        builder.set_private(true);
        assert!(matches!(
            builder.create_request(),
            Err(DelegateError::Validation(_))
        ));
    }

    #[test]
    fn test_updater_merges_existing_overwrites() {
        let everyone = OverwriteTarget::Role(Snowflake::new(100));
        let member = OverwriteTarget::Member(Snowflake::new(7));
        let mut raw = channel(3, ChannelType::Text);
        raw.permission_overwrites = vec![PermissionOverwrite {
            target: everyone,
            permissions: Permissions::new(0, 1 << 11),
        }];
        let view = Arc::new(ServerTextChannel::try_from(raw).unwrap());

        let mut updater = RestServerTextChannelUpdaterDelegate::new(view);
        updater.add_permission_overwrite(PermissionOverwrite {
            target: member,
            permissions: Permissions::new(1 << 11, 0),
        });

        let body = updater.update_request().unwrap().body.unwrap();
        let overwrites = body["permission_overwrites"].as_array().unwrap();
        assert_eq!(overwrites.len(), 2);
        assert_eq!(overwrites[1]["type"], json!(1));
    }

    #[test]
    fn test_clearing_topic_sends_null() {
        let view = Arc::new(ServerTextChannel::try_from(channel(3, ChannelType::Text)).unwrap());
        let mut updater = RestServerTextChannelUpdaterDelegate::new(view);
        updater.set_topic(None);
        ServerTextChannelUpdaterDelegate::set_category(&mut updater, None);

        let request = updater.update_request().unwrap();
        assert_eq!(request.route, "/channels/3");
        assert_eq!(request.body, Some(json!({ "topic": null, "parent_id": null })));
    }

    #[test]
    fn test_empty_channel_update_is_rejected() {
        let view = Arc::new(ServerChannel::try_from(channel(3, ChannelType::Voice)).unwrap());
        let updater = RestServerChannelUpdaterDelegate::new(view);
        assert!(matches!(
            updater.update_request(),
            Err(DelegateError::NothingToUpdate)
        ));
    }

    #[test]
    fn test_thread_updater_archives() {
        let view =
            Arc::new(ServerThreadChannel::try_from(channel(8, ChannelType::PublicThread)).unwrap());
        let mut updater = RestServerThreadChannelUpdaterDelegate::new(view);
        updater.set_archived(true);
        updater.set_locked(true);

        let request = updater.update_request().unwrap();
        assert_eq!(request.body, Some(json!({ "archived": true, "locked": true })));
    }
}
