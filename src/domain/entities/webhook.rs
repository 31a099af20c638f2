//! Webhook entity.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Snowflake;

/// Represents a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: Snowflake,

    pub channel_id: Snowflake,

    #[serde(rename = "guild_id", default)]
    pub server_id: Option<Snowflake>,

    #[serde(default)]
    pub name: Option<String>,

    /// Only present for incoming webhooks the client may execute
    #[serde(default)]
    pub token: Option<String>,
}
