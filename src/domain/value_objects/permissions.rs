//! Discord-compatible permission flags.
//!
//! A [`Permissions`] value is a pair of 64-bit bitfields: permissions that
//! are explicitly allowed and permissions that are explicitly denied. Bits
//! set in neither are unset. Role permissions only use the allowed half;
//! channel overwrites use both.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Snowflake;

/// A single permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionType {
    /// Allows creation of instant invites
    CreateInstantInvite,
    /// Allows kicking members
    KickMembers,
    /// Allows banning members
    BanMembers,
    /// Allows all permissions and bypasses channel permission overwrites
    Administrator,
    /// Allows management and editing of channels
    ManageChannels,
    /// Allows management and editing of the server
    ManageServer,
    AddReactions,
    ViewAuditLog,
    PrioritySpeaker,
    Stream,
    ViewChannel,
    SendMessages,
    SendTtsMessages,
    ManageMessages,
    EmbedLinks,
    AttachFiles,
    ReadMessageHistory,
    MentionEveryone,
    UseExternalEmojis,
    ViewServerInsights,
    Connect,
    Speak,
    MuteMembers,
    DeafenMembers,
    MoveMembers,
    UseVoiceActivity,
    ChangeNickname,
    ManageNicknames,
    ManageRoles,
    ManageWebhooks,
    /// Allows management and editing of emojis and stickers
    ManageEmojisAndStickers,
    UseApplicationCommands,
    RequestToSpeak,
    /// Allows for creating, editing, and deleting scheduled events
    ManageEvents,
    ManageThreads,
    CreatePublicThreads,
    CreatePrivateThreads,
    UseExternalStickers,
    SendMessagesInThreads,
    UseEmbeddedActivities,
    /// Allows for timing out users
    ModerateMembers,
}

impl PermissionType {
    /// Every permission flag, in bit order.
    pub const ALL: [PermissionType; 41] = [
        Self::CreateInstantInvite,
        Self::KickMembers,
        Self::BanMembers,
        Self::Administrator,
        Self::ManageChannels,
        Self::ManageServer,
        Self::AddReactions,
        Self::ViewAuditLog,
        Self::PrioritySpeaker,
        Self::Stream,
        Self::ViewChannel,
        Self::SendMessages,
        Self::SendTtsMessages,
        Self::ManageMessages,
        Self::EmbedLinks,
        Self::AttachFiles,
        Self::ReadMessageHistory,
        Self::MentionEveryone,
        Self::UseExternalEmojis,
        Self::ViewServerInsights,
        Self::Connect,
        Self::Speak,
        Self::MuteMembers,
        Self::DeafenMembers,
        Self::MoveMembers,
        Self::UseVoiceActivity,
        Self::ChangeNickname,
        Self::ManageNicknames,
        Self::ManageRoles,
        Self::ManageWebhooks,
        Self::ManageEmojisAndStickers,
        Self::UseApplicationCommands,
        Self::RequestToSpeak,
        Self::ManageEvents,
        Self::ManageThreads,
        Self::CreatePublicThreads,
        Self::CreatePrivateThreads,
        Self::UseExternalStickers,
        Self::SendMessagesInThreads,
        Self::UseEmbeddedActivities,
        Self::ModerateMembers,
    ];

    /// The bit offset of this flag.
    pub const fn offset(self) -> u32 {
        self as u32
    }

    /// The bit mask of this flag.
    pub const fn bit(self) -> i64 {
        1 << self.offset()
    }

    /// Check whether this flag is set in a bitfield.
    pub const fn is_set(self, bits: i64) -> bool {
        bits & self.bit() != 0
    }

    /// Collect the flags set in a bitfield.
    pub fn from_bits(bits: i64) -> Vec<PermissionType> {
        Self::ALL.iter().copied().filter(|p| p.is_set(bits)).collect()
    }
}

/// The state of one flag within a [`Permissions`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    Allowed,
    Denied,
    #[default]
    Unset,
}

/// Allowed and denied permission bitfields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(rename = "allow", with = "bits_as_string")]
    allowed: i64,
    #[serde(rename = "deny", with = "bits_as_string")]
    denied: i64,
}

impl Permissions {
    /// Bitfield of every known flag.
    pub const ALL_BITS: i64 = 0x1FFFFFFFFFF;

    /// Create permissions from raw bitfields.
    ///
    /// A bit present in both halves is treated as denied.
    pub const fn new(allowed: i64, denied: i64) -> Self {
        Self {
            allowed: allowed & !denied,
            denied,
        }
    }

    /// Create empty permissions (everything unset).
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Permissions allowing every flag in the given slice.
    pub fn allowing(types: &[PermissionType]) -> Self {
        Self::new(types.iter().fold(0, |bits, p| bits | p.bit()), 0)
    }

    /// Get the allowed bitfield.
    pub const fn allowed_bits(&self) -> i64 {
        self.allowed
    }

    /// Get the denied bitfield.
    pub const fn denied_bits(&self) -> i64 {
        self.denied
    }

    /// Bits that are neither allowed nor denied.
    pub const fn unset_bits(&self) -> i64 {
        Self::ALL_BITS & !(self.allowed | self.denied)
    }

    /// Get the state of one flag.
    pub const fn state(&self, permission: PermissionType) -> PermissionState {
        if permission.is_set(self.denied) {
            PermissionState::Denied
        } else if permission.is_set(self.allowed) {
            PermissionState::Allowed
        } else {
            PermissionState::Unset
        }
    }

    /// Set the state of one flag.
    pub fn set_state(&mut self, permission: PermissionType, state: PermissionState) {
        let bit = permission.bit();
        self.allowed &= !bit;
        self.denied &= !bit;
        match state {
            PermissionState::Allowed => self.allowed |= bit,
            PermissionState::Denied => self.denied |= bit,
            PermissionState::Unset => {}
        }
    }

    /// Check whether the administrator flag grants everything.
    pub const fn is_admin(&self) -> bool {
        PermissionType::Administrator.is_set(self.allowed)
    }

    /// Check whether no flag is allowed or denied.
    pub const fn is_empty(&self) -> bool {
        self.allowed == 0 && self.denied == 0
    }

    /// Flags currently allowed.
    pub fn allowed(&self) -> Vec<PermissionType> {
        PermissionType::from_bits(self.allowed)
    }

    /// Flags currently denied.
    pub fn denied(&self) -> Vec<PermissionType> {
        PermissionType::from_bits(self.denied)
    }

    /// Compute effective permissions after applying this value as an overwrite.
    pub const fn apply_to(&self, base: i64) -> i64 {
        (base & !self.denied) | self.allowed
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allow={} deny={}", self.allowed, self.denied)
    }
}

/// Who a channel permission overwrite applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverwriteTarget {
    Role(Snowflake),
    Member(Snowflake),
}

impl OverwriteTarget {
    /// The role or user ID.
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Role(id) | Self::Member(id) => *id,
        }
    }

    /// Platform overwrite type code (0 = role, 1 = member).
    pub fn type_code(&self) -> u8 {
        match self {
            Self::Role(_) => 0,
            Self::Member(_) => 1,
        }
    }
}

/// Channel-level permission overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawOverwrite", into = "RawOverwrite")]
pub struct PermissionOverwrite {
    pub target: OverwriteTarget,
    pub permissions: Permissions,
}

#[derive(Serialize, Deserialize)]
struct RawOverwrite {
    id: Snowflake,
    #[serde(rename = "type")]
    target_type: u8,
    #[serde(flatten)]
    permissions: Permissions,
}

impl From<RawOverwrite> for PermissionOverwrite {
    fn from(raw: RawOverwrite) -> Self {
        let target = if raw.target_type == 1 {
            OverwriteTarget::Member(raw.id)
        } else {
            OverwriteTarget::Role(raw.id)
        };
        Self {
            target,
            permissions: raw.permissions,
        }
    }
}

impl From<PermissionOverwrite> for RawOverwrite {
    fn from(overwrite: PermissionOverwrite) -> Self {
        Self {
            id: overwrite.target.id(),
            target_type: overwrite.target.type_code(),
            permissions: overwrite.permissions,
        }
    }
}

/// Permission bitfields travel as decimal strings.
mod bits_as_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bits: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(bits)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
