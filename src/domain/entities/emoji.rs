//! Custom emoji entity.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Snowflake;

/// A custom emoji whose owning server is known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownCustomEmoji {
    pub id: Snowflake,

    #[serde(rename = "guild_id")]
    pub server_id: Snowflake,

    pub name: String,

    #[serde(default)]
    pub animated: bool,

    /// Roles allowed to use the emoji; empty means everyone
    #[serde(rename = "roles", default)]
    pub whitelisted_roles: Vec<Snowflake>,
}

impl KnownCustomEmoji {
    /// The mention tag used in message content.
    pub fn mention_tag(&self) -> String {
        let prefix = if self.animated { "a" } else { "" };
        format!("<{}:{}:{}>", prefix, self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_tag() {
        let mut emoji = KnownCustomEmoji {
            id: Snowflake::new(41771983429993937),
            name: "LUL".into(),
            ..Default::default()
        };
        assert_eq!(emoji.mention_tag(), "<:LUL:41771983429993937>");

        emoji.animated = true;
        assert_eq!(emoji.mention_tag(), "<a:LUL:41771983429993937>");
    }
}
