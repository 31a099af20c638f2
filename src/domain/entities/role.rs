//! Role entity.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PermissionType, Permissions, Snowflake};

/// Represents a role in a server.
///
/// Roles define permissions and can be assigned to members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,

    /// Server ID this role belongs to
    #[serde(rename = "guild_id")]
    pub server_id: Snowflake,

    /// Role name (up to 100 characters)
    pub name: String,

    /// Permissions granted by the role; only the allowed half is used
    #[serde(with = "allowed_bits")]
    pub permissions: Permissions,

    /// Position in the role hierarchy (higher = more priority)
    #[serde(default)]
    pub position: i32,

    /// Role color (RGB integer, 0 for no color)
    #[serde(default)]
    pub color: u32,

    /// Whether this role is hoisted (shown separately in member list)
    #[serde(default)]
    pub hoist: bool,

    #[serde(default)]
    pub mentionable: bool,

    /// Whether the role is managed by an integration
    #[serde(default)]
    pub managed: bool,
}

impl Role {
    /// Check if this role grants a specific permission.
    pub fn has_permission(&self, permission: PermissionType) -> bool {
        // Administrator permission overrides all
        self.permissions.is_admin() || permission.is_set(self.permissions.allowed_bits())
    }

    /// Check if this is the @everyone role of its server.
    pub fn is_everyone_role(&self) -> bool {
        self.id == self.server_id
    }

    /// Get the color as a hex string (e.g., "#FF5733").
    pub fn color_hex(&self) -> Option<String> {
        (self.color != 0).then(|| format!("#{:06X}", self.color))
    }
}

impl Default for Role {
    fn default() -> Self {
        Self {
            id: Snowflake::default(),
            server_id: Snowflake::default(),
            name: "new role".to_string(),
            permissions: Permissions::empty(),
            position: 0,
            color: 0,
            hoist: false,
            mentionable: false,
            managed: false,
        }
    }
}

/// Role permissions travel as a single decimal bitfield string.
pub(crate) mod allowed_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::value_objects::Permissions;

    pub fn serialize<S: Serializer>(perms: &Permissions, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&perms.allowed_bits())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Permissions, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map(|bits| Permissions::new(bits, 0))
            .map_err(serde::de::Error::custom)
    }
}
