//! Channel builder and updater delegates.
//!
//! The traits form two hierarchies mirroring the channel views: everything
//! that applies to any server channel sits on the base trait, position and
//! overwrites on the "regular" (non-thread) layer, and type-specific
//! settings on the leaves.

use std::sync::Arc;

use crate::domain::entities::{Channel, ChannelCategory, Message, Server, ServerTextChannel};
use crate::domain::rest::RestRequest;
use crate::domain::value_objects::{OverwriteTarget, PermissionOverwrite, Snowflake};
use crate::shared::error::DelegateError;

/// Minutes of inactivity after which a thread is archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoArchiveDuration {
    OneHour,
    #[default]
    OneDay,
    ThreeDays,
    OneWeek,
}

impl AutoArchiveDuration {
    pub fn minutes(&self) -> u32 {
        match self {
            Self::OneHour => 60,
            Self::OneDay => 1440,
            Self::ThreeDays => 4320,
            Self::OneWeek => 10080,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            60 => Some(Self::OneHour),
            1440 => Some(Self::OneDay),
            4320 => Some(Self::ThreeDays),
            10080 => Some(Self::OneWeek),
            _ => None,
        }
    }
}

/// Where a new thread starts.
#[derive(Debug, Clone)]
pub enum ThreadOrigin {
    /// A standalone thread in a text channel
    Channel(Arc<ServerTextChannel>),
    /// A thread attached to an existing message
    Message(Arc<Message>),
}

impl ThreadOrigin {
    /// The channel the thread is created in.
    pub fn channel_id(&self) -> Snowflake {
        match self {
            Self::Channel(channel) => channel.id(),
            Self::Message(message) => message.channel_id,
        }
    }
}

// Builders

pub trait ServerChannelBuilderDelegate: Send {
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);

    /// Render the creation request.
    fn create_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait RegularServerChannelBuilderDelegate: ServerChannelBuilderDelegate {
    fn server(&self) -> &Server;
    fn set_raw_position(&mut self, position: i32);

    /// Add an overwrite, replacing any existing one for the same target.
    fn add_permission_overwrite(&mut self, overwrite: PermissionOverwrite);
    fn remove_permission_overwrite(&mut self, target: OverwriteTarget);
}

pub trait ChannelCategoryBuilderDelegate: RegularServerChannelBuilderDelegate {}

pub trait ServerTextChannelBuilderDelegate: RegularServerChannelBuilderDelegate {
    fn set_category(&mut self, category: Option<&ChannelCategory>);
    fn set_topic(&mut self, topic: String);
    fn set_slowmode_delay(&mut self, seconds: u32);
    fn set_nsfw(&mut self, nsfw: bool);
}

pub trait ServerForumChannelBuilderDelegate: RegularServerChannelBuilderDelegate {
    fn set_category(&mut self, category: Option<&ChannelCategory>);
    fn set_topic(&mut self, topic: String);
    fn set_nsfw(&mut self, nsfw: bool);
}

pub trait ServerVoiceChannelBuilderDelegate: RegularServerChannelBuilderDelegate {
    fn set_category(&mut self, category: Option<&ChannelCategory>);
    fn set_bitrate(&mut self, bitrate: u32);
    fn set_user_limit(&mut self, user_limit: u32);
}

/// Builds a thread from either a channel or a message.
pub trait ThreadBuilderDelegate: ServerChannelBuilderDelegate {
    fn origin(&self) -> &ThreadOrigin;
    fn set_auto_archive_duration(&mut self, duration: AutoArchiveDuration);

    /// Only threads started from a channel can be private.
    fn set_private(&mut self, private: bool);
    fn set_invitable(&mut self, invitable: bool);
    fn set_slowmode_delay(&mut self, seconds: u32);
}

// Updaters

pub trait ServerChannelUpdaterDelegate: Send {
    /// The channel as it was when the updater was created.
    fn channel(&self) -> &Channel;
    fn set_audit_log_reason(&mut self, reason: String);
    fn set_name(&mut self, name: String);

    /// `PATCH /channels/{channel}` with the changed fields only.
    fn update_request(&self) -> Result<RestRequest, DelegateError>;
}

pub trait RegularServerChannelUpdaterDelegate: ServerChannelUpdaterDelegate {
    fn set_raw_position(&mut self, position: i32);

    /// Add or replace the overwrite of a target. Untouched overwrites of the
    /// channel are kept.
    fn add_permission_overwrite(&mut self, overwrite: PermissionOverwrite);
    fn remove_permission_overwrite(&mut self, target: OverwriteTarget);
}

pub trait ServerTextChannelUpdaterDelegate: RegularServerChannelUpdaterDelegate {
    fn set_topic(&mut self, topic: Option<String>);
    fn set_nsfw(&mut self, nsfw: bool);
    fn set_slowmode_delay(&mut self, seconds: u32);
    fn set_category(&mut self, category: Option<&ChannelCategory>);
}

pub trait ServerForumChannelUpdaterDelegate: RegularServerChannelUpdaterDelegate {
    fn set_topic(&mut self, topic: Option<String>);
    fn set_nsfw(&mut self, nsfw: bool);
    fn set_category(&mut self, category: Option<&ChannelCategory>);
}

pub trait ServerVoiceChannelUpdaterDelegate: RegularServerChannelUpdaterDelegate {
    fn set_bitrate(&mut self, bitrate: u32);

    /// `None` removes the limit.
    fn set_user_limit(&mut self, user_limit: Option<u32>);
    fn set_category(&mut self, category: Option<&ChannelCategory>);
}

pub trait ServerThreadChannelUpdaterDelegate: ServerChannelUpdaterDelegate {
    fn set_archived(&mut self, archived: bool);
    fn set_locked(&mut self, locked: bool);
    fn set_auto_archive_duration(&mut self, duration: AutoArchiveDuration);
    fn set_invitable(&mut self, invitable: bool);
    fn set_slowmode_delay(&mut self, seconds: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_archive_minutes_roundtrip() {
        for duration in [
            AutoArchiveDuration::OneHour,
            AutoArchiveDuration::OneDay,
            AutoArchiveDuration::ThreeDays,
            AutoArchiveDuration::OneWeek,
        ] {
            assert_eq!(AutoArchiveDuration::from_minutes(duration.minutes()), Some(duration));
        }
        assert_eq!(AutoArchiveDuration::from_minutes(30), None);
    }

    #[test]
    fn test_message_origin_uses_message_channel() {
        let message = Message {
            id: Snowflake::new(2),
            channel_id: Snowflake::new(99),
            ..Default::default()
        };
        let origin = ThreadOrigin::Message(Arc::new(message));
        assert_eq!(origin.channel_id(), Snowflake::new(99));
    }
}
