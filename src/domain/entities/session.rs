//! API session entity.
//!
//! A logged-in connection to the platform: who the client is and which
//! application it acts for. Builders that act on behalf of the account
//! (server creation, account updates, audio) are scoped to a session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Snowflake;

/// Gateway intents (bitfield).
pub mod intents {
    pub const SERVERS: u64 = 1 << 0;
    pub const SERVER_MEMBERS: u64 = 1 << 1;
    pub const SERVER_MODERATION: u64 = 1 << 2;
    pub const SERVER_EMOJIS_AND_STICKERS: u64 = 1 << 3;
    pub const SERVER_WEBHOOKS: u64 = 1 << 5;
    pub const SERVER_INVITES: u64 = 1 << 6;
    pub const SERVER_VOICE_STATES: u64 = 1 << 7;
    pub const SERVER_PRESENCES: u64 = 1 << 8;
    pub const SERVER_MESSAGES: u64 = 1 << 9;
    pub const SERVER_MESSAGE_REACTIONS: u64 = 1 << 10;
    pub const DIRECT_MESSAGES: u64 = 1 << 12;
    pub const MESSAGE_CONTENT: u64 = 1 << 15;
    pub const SERVER_SCHEDULED_EVENTS: u64 = 1 << 16;

    /// Intents that do not require privileged access.
    pub const DEFAULT: u64 = SERVERS
        | SERVER_MODERATION
        | SERVER_EMOJIS_AND_STICKERS
        | SERVER_WEBHOOKS
        | SERVER_INVITES
        | SERVER_VOICE_STATES
        | SERVER_MESSAGES
        | SERVER_MESSAGE_REACTIONS
        | DIRECT_MESSAGES
        | SERVER_SCHEDULED_EVENTS;
}

/// Connection parameters produced by the API builder.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub token: String,
    pub intents: u64,
    /// Shard id of this connection
    pub current_shard: u32,
    pub total_shards: u32,
    pub wait_for_servers_on_startup: bool,
}

// Keep tokens out of logs
impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("token", &"<redacted>")
            .field("intents", &self.intents)
            .field("current_shard", &self.current_shard)
            .field("total_shards", &self.total_shards)
            .field("wait_for_servers_on_startup", &self.wait_for_servers_on_startup)
            .finish()
    }
}

/// A session with the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSession {
    /// The account the session is logged in as
    pub user_id: Snowflake,

    /// The application that owns the commands the session manages
    pub application_id: Snowflake,

    pub config: SessionConfig,
}

impl ApiSession {
    /// Create a new session.
    pub fn new(user_id: Snowflake, application_id: Snowflake, config: SessionConfig) -> Self {
        Self {
            user_id,
            application_id,
            config,
        }
    }

    /// Value of the `Authorization` header for this session.
    pub fn authorization(&self) -> String {
        format!("Bot {}", self.config.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let config = SessionConfig {
            token: "super-secret".into(),
            intents: intents::DEFAULT,
            current_shard: 0,
            total_shards: 1,
            wait_for_servers_on_startup: true,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
