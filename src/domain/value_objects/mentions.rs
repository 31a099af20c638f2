//! Allowed mentions of an outgoing message.

use serde::{Deserialize, Serialize};

use super::Snowflake;

/// Mention categories that can be parsed from message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionType {
    Users,
    Roles,
    Everyone,
}

/// Controls which mentions in a message actually ping.
///
/// A category parsed wholesale (listed in `parse`) must not also carry
/// explicit IDs; the builder enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMentions {
    pub parse: Vec<MentionType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<Snowflake>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Snowflake>,
    #[serde(default)]
    pub replied_user: bool,
}

impl AllowedMentions {
    /// Mentions that ping nobody.
    pub fn none() -> Self {
        Self::default()
    }
}
