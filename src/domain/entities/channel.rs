//! Channel entity and its typed views.
//!
//! The raw [`Channel`] mirrors the platform's channel object. Builders and
//! updaters never take a raw channel; they take one of the typed views
//! below, which can only be obtained through a checked `TryFrom<Channel>`.
//! That keeps "a voice channel handed to a text-only builder" out of the
//! type system instead of relying on runtime checks.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::value_objects::{PermissionOverwrite, Snowflake};

/// Channel types with their platform type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelType {
    /// A text channel within a server
    #[default]
    Text,
    /// A direct message between two users
    Dm,
    /// A voice channel within a server
    Voice,
    /// A direct message between multiple users
    GroupDm,
    /// A category that contains channels
    Category,
    /// A channel that followers can publish into their own servers
    Announcement,
    AnnouncementThread,
    PublicThread,
    PrivateThread,
    /// A voice channel for hosting events with an audience
    Stage,
    /// A channel that can only contain threads
    Forum,
}

impl ChannelType {
    /// Convert from the platform type code.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Text,
            1 => Self::Dm,
            2 => Self::Voice,
            3 => Self::GroupDm,
            4 => Self::Category,
            5 => Self::Announcement,
            10 => Self::AnnouncementThread,
            11 => Self::PublicThread,
            12 => Self::PrivateThread,
            13 => Self::Stage,
            15 => Self::Forum,
            _ => return None,
        })
    }

    /// Convert to the platform type code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Text => 0,
            Self::Dm => 1,
            Self::Voice => 2,
            Self::GroupDm => 3,
            Self::Category => 4,
            Self::Announcement => 5,
            Self::AnnouncementThread => 10,
            Self::PublicThread => 11,
            Self::PrivateThread => 12,
            Self::Stage => 13,
            Self::Forum => 15,
        }
    }

    /// Human readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Dm => "dm",
            Self::Voice => "voice",
            Self::GroupDm => "group_dm",
            Self::Category => "category",
            Self::Announcement => "announcement",
            Self::AnnouncementThread => "announcement_thread",
            Self::PublicThread => "public_thread",
            Self::PrivateThread => "private_thread",
            Self::Stage => "stage",
            Self::Forum => "forum",
        }
    }

    /// Check if this is a thread type.
    pub fn is_thread(&self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }

    /// Check if messages can be sent to channels of this type.
    pub fn is_text_based(&self) -> bool {
        matches!(self, Self::Text | Self::Announcement | Self::Dm | Self::GroupDm) || self.is_thread()
    }

    /// Check if this is a voice-based type.
    pub fn is_voice_based(&self) -> bool {
        matches!(self, Self::Voice | Self::Stage)
    }

    /// Check if this is a private channel type.
    pub fn is_dm(&self) -> bool {
        matches!(self, Self::Dm | Self::GroupDm)
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ChannelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ChannelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("unknown channel type {}", code)))
    }
}

/// Thread-only state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMetadata {
    pub archived: bool,
    /// Minutes of inactivity before the thread auto-archives
    pub auto_archive_duration: u32,
    pub locked: bool,
    #[serde(default)]
    pub invitable: Option<bool>,
}

/// Represents a channel as delivered by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,

    /// Server ID (None for DM channels)
    #[serde(rename = "guild_id", default)]
    pub server_id: Option<Snowflake>,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub channel_type: ChannelType,

    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub position: i32,

    /// Parent category, or the parent channel for threads
    #[serde(default)]
    pub parent_id: Option<Snowflake>,

    #[serde(default)]
    pub nsfw: bool,

    /// Slowmode in seconds
    #[serde(default)]
    pub rate_limit_per_user: u32,

    #[serde(default)]
    pub bitrate: Option<u32>,

    #[serde(default)]
    pub user_limit: Option<u32>,

    #[serde(default)]
    pub permission_overwrites: Vec<PermissionOverwrite>,

    #[serde(default)]
    pub thread_metadata: Option<ThreadMetadata>,
}

impl Channel {
    /// Check if this channel belongs to a server.
    pub fn is_server_channel(&self) -> bool {
        self.server_id.is_some()
    }
}

/// Failure converting a raw channel into a typed view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelConversionError {
    #[error("Channel {id} is not a server channel")]
    NotInServer { id: Snowflake },

    #[error("Channel {id} is a {actual} channel, expected {expected}")]
    WrongType {
        id: Snowflake,
        actual: ChannelType,
        expected: &'static str,
    },
}

/// Generates a typed server-channel view with a checked conversion.
macro_rules! server_channel_view {
    ($(#[$meta:meta])* $name:ident, $expected:literal, |$ty:ident| $accepts:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            channel: Channel,
            server_id: Snowflake,
        }

        impl $name {
            /// The channel ID.
            pub fn id(&self) -> Snowflake {
                self.channel.id
            }

            /// The server the channel belongs to.
            pub fn server_id(&self) -> Snowflake {
                self.server_id
            }

            /// The underlying channel data.
            pub fn channel(&self) -> &Channel {
                &self.channel
            }

            /// Unwrap into the raw channel.
            pub fn into_channel(self) -> Channel {
                self.channel
            }
        }

        impl TryFrom<Channel> for $name {
            type Error = ChannelConversionError;

            fn try_from(channel: Channel) -> Result<Self, Self::Error> {
                let server_id = channel
                    .server_id
                    .ok_or(ChannelConversionError::NotInServer { id: channel.id })?;
                let $ty = channel.channel_type;
                if !($accepts) {
                    return Err(ChannelConversionError::WrongType {
                        id: channel.id,
                        actual: channel.channel_type,
                        expected: $expected,
                    });
                }
                Ok(Self { channel, server_id })
            }
        }
    };
}

server_channel_view!(
    /// Any channel that lives in a server, threads included.
    ServerChannel,
    "server",
    |ty| !ty.is_dm()
);

server_channel_view!(
    /// A server channel that is not a thread (it has a position and overwrites).
    RegularServerChannel,
    "regular server",
    |ty| !ty.is_dm() && !ty.is_thread()
);

server_channel_view!(
    /// A server text (or announcement) channel.
    ServerTextChannel,
    "text",
    |ty| matches!(ty, ChannelType::Text | ChannelType::Announcement)
);

server_channel_view!(
    ServerForumChannel,
    "forum",
    |ty| ty == ChannelType::Forum
);

server_channel_view!(
    /// A server voice or stage channel.
    ServerVoiceChannel,
    "voice",
    |ty| ty.is_voice_based()
);

server_channel_view!(
    ServerThreadChannel,
    "thread",
    |ty| ty.is_thread()
);

server_channel_view!(
    ChannelCategory,
    "category",
    |ty| ty == ChannelType::Category
);

macro_rules! widen_view {
    ($from:ident => $($to:ident),+) => {
        $(
            impl From<$from> for $to {
                fn from(view: $from) -> Self {
                    $to {
                        channel: view.channel,
                        server_id: view.server_id,
                    }
                }
            }
        )+
    };
}

widen_view!(ServerTextChannel => RegularServerChannel, ServerChannel);
widen_view!(ServerForumChannel => RegularServerChannel, ServerChannel);
widen_view!(ServerVoiceChannel => RegularServerChannel, ServerChannel);
widen_view!(ChannelCategory => RegularServerChannel, ServerChannel);
widen_view!(RegularServerChannel => ServerChannel);
widen_view!(ServerThreadChannel => ServerChannel);

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_channel(channel_type: ChannelType, server_id: Option<i64>) -> Channel {
        Channel {
            id: Snowflake::new(12345678901234567),
            server_id: server_id.map(Snowflake::new),
            name: "test-channel".to_string(),
            channel_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_channel_type_code_roundtrip() {
        for code in [0u8, 1, 2, 3, 4, 5, 10, 11, 12, 13, 15] {
            let ty = ChannelType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
        }
        assert_eq!(ChannelType::from_code(99), None);
    }

    #[test]
    fn test_channel_type_display() {
        assert_eq!(ChannelType::Forum.to_string(), "forum");
        assert_eq!(ChannelType::PrivateThread.to_string(), "private_thread");
    }

    #[test]
    fn test_channel_deserializes_platform_json() {
        let channel: Channel = serde_json::from_value(serde_json::json!({
            "id": "41771983423143937",
            "guild_id": "41771983423143938",
            "name": "general",
            "type": 0,
            "position": 6,
            "nsfw": true
        }))
        .unwrap();

        assert_eq!(channel.channel_type, ChannelType::Text);
        assert_eq!(channel.server_id, Some(Snowflake::new(41771983423143938)));
        assert!(channel.nsfw);
    }

    #[test]
    fn test_text_view_accepts_text_channel() {
        let view = ServerTextChannel::try_from(create_test_channel(ChannelType::Text, Some(7))).unwrap();
        assert_eq!(view.server_id(), Snowflake::new(7));
    }

    #[test]
    fn test_text_view_rejects_voice_channel() {
        let err = ServerTextChannel::try_from(create_test_channel(ChannelType::Voice, Some(7)))
            .unwrap_err();
        assert!(matches!(
            err,
            ChannelConversionError::WrongType { actual: ChannelType::Voice, expected: "text", .. }
        ));
    }

    #[test]
    fn test_views_reject_dm_channels() {
        let err = ServerChannel::try_from(create_test_channel(ChannelType::Dm, None)).unwrap_err();
        assert!(matches!(err, ChannelConversionError::NotInServer { .. }));
    }

    #[test]
    fn test_regular_view_rejects_threads() {
        let thread = create_test_channel(ChannelType::PublicThread, Some(7));
        assert!(RegularServerChannel::try_from(thread.clone()).is_err());
        assert!(ServerThreadChannel::try_from(thread.clone()).is_ok());
        assert!(ServerChannel::try_from(thread).is_ok());
    }

    #[test]
    fn test_widening_keeps_channel() {
        let text = ServerTextChannel::try_from(create_test_channel(ChannelType::Text, Some(7))).unwrap();
        let server: ServerChannel = text.clone().into();
        assert_eq!(server.channel(), text.channel());
    }
}
