//! Scheduled event entity.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::value_objects::Snowflake;

/// Where a scheduled event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledEventEntityType {
    StageInstance = 1,
    Voice = 2,
    External = 3,
}

impl ScheduledEventEntityType {
    /// Convert from the platform code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::StageInstance),
            2 => Some(Self::Voice),
            3 => Some(Self::External),
            _ => None,
        }
    }
}

impl Serialize for ScheduledEventEntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ScheduledEventEntityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("unknown entity type {}", code)))
    }
}

/// Lifecycle state of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScheduledEventStatus {
    #[default]
    Scheduled = 1,
    Active = 2,
    Completed = 3,
    Canceled = 4,
}

impl ScheduledEventStatus {
    /// Convert from the platform code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Scheduled),
            2 => Some(Self::Active),
            3 => Some(Self::Completed),
            4 => Some(Self::Canceled),
            _ => None,
        }
    }
}

impl Serialize for ScheduledEventStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ScheduledEventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code).ok_or_else(|| de::Error::custom(format!("unknown status {}", code)))
    }
}

/// A server's scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: Snowflake,

    #[serde(rename = "guild_id")]
    pub server_id: Snowflake,

    /// Stage or voice channel hosting the event; None for external events
    #[serde(default)]
    pub channel_id: Option<Snowflake>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub scheduled_start_time: DateTime<Utc>,

    #[serde(default)]
    pub scheduled_end_time: Option<DateTime<Utc>>,

    pub entity_type: ScheduledEventEntityType,

    #[serde(default)]
    pub status: ScheduledEventStatus,

    /// Location of an external event
    #[serde(default)]
    pub location: Option<String>,
}

impl ScheduledEvent {
    /// Check if the event has already ended or was canceled.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            ScheduledEventStatus::Completed | ScheduledEventStatus::Canceled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_external_event() {
        let event: ScheduledEvent = serde_json::from_value(serde_json::json!({
            "id": "10",
            "guild_id": "1",
            "name": "Meetup",
            "scheduled_start_time": "2026-11-01T18:00:00Z",
            "scheduled_end_time": "2026-11-01T20:00:00Z",
            "entity_type": 3,
            "status": 1,
            "entity_metadata": { "location": "Town hall" },
            "location": "Town hall"
        }))
        .unwrap();

        assert_eq!(event.entity_type, ScheduledEventEntityType::External);
        assert_eq!(event.location.as_deref(), Some("Town hall"));
        assert!(!event.is_finished());
    }
}
