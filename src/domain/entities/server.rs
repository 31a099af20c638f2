//! Server (guild) entity.
//!
//! The platform's REST API calls servers "guilds"; the client calls them
//! servers and renames the wire fields.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::value_objects::Snowflake;

/// Represents a server (guild).
///
/// A server is a community space containing channels, roles, and members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: Snowflake,

    /// Server name (2-100 characters)
    pub name: String,

    /// User ID of the server owner
    #[serde(default)]
    pub owner_id: Snowflake,

    /// Icon hash
    #[serde(rename = "icon", default)]
    pub icon_hash: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub verification_level: u8,
}

impl Server {
    /// Check if a user is the owner of this server.
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// The ID of the server's @everyone role (same as the server ID).
    pub fn everyone_role_id(&self) -> Snowflake {
        self.id
    }
}

/// Type alias for API compatibility.
/// In Discord terminology, servers are called "guilds".
pub type Guild = Server;

/// Requirements members must meet before they can talk in a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerificationLevel {
    #[default]
    None = 0,
    /// Verified email
    Low = 1,
    /// Registered for longer than five minutes
    Medium = 2,
    /// Member of the server for longer than ten minutes
    High = 3,
    /// Verified phone number
    VeryHigh = 4,
}

/// Which messages notify members by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultMessageNotificationLevel {
    #[default]
    AllMessages = 0,
    OnlyMentions = 1,
}

/// Whose media gets scanned for explicit content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExplicitContentFilterLevel {
    #[default]
    Disabled = 0,
    MembersWithoutRoles = 1,
    AllMembers = 2,
}

impl Serialize for VerificationLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl Serialize for DefaultMessageNotificationLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl Serialize for ExplicitContentFilterLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}
