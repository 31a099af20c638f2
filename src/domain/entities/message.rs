//! Message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Snowflake;

/// Represents a message in a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Snowflake,

    /// Channel ID where the message was sent
    pub channel_id: Snowflake,

    /// Server ID, if the channel lives in a server
    #[serde(rename = "guild_id", default)]
    pub server_id: Option<Snowflake>,

    /// Author user ID
    #[serde(default)]
    pub author_id: Snowflake,

    /// Message content (up to 2000 characters)
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub pinned: bool,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Check if the message has been edited.
    pub fn is_edited(&self) -> bool {
        self.edited_timestamp.is_some()
    }

    /// Check if the message was sent in a server.
    pub fn is_server_message(&self) -> bool {
        self.server_id.is_some()
    }
}
