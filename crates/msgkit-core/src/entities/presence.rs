//! Presence entity - online status reported by the presence service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// User online status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// User is online and active
    Online,
    /// User is connected but idle
    Away,
    /// User is offline
    #[default]
    Offline,
}

impl PresenceStatus {
    /// Check if the user is currently connected
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !matches!(self, Self::Offline)
    }
}

impl std::fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Away => write!(f, "away"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for PresenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "away" | "idle" => Ok(Self::Away),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

/// Presence snapshot for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    pub user_id: UserId,
    pub status: PresenceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl Presence {
    /// Create new presence data
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, status: PresenceStatus) -> Self {
        Self {
            user_id: user_id.into(),
            status,
            last_seen: None,
        }
    }

    /// Set the last-seen timestamp
    #[must_use]
    pub fn with_last_seen(mut self, at: DateTime<Utc>) -> Self {
        self.last_seen = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("ONLINE".parse::<PresenceStatus>(), Ok(PresenceStatus::Online));
        assert_eq!("idle".parse::<PresenceStatus>(), Ok(PresenceStatus::Away));
        assert!("busy".parse::<PresenceStatus>().is_err());
        assert_eq!(PresenceStatus::Away.to_string(), "away");
    }

    #[test]
    fn test_is_connected() {
        assert!(PresenceStatus::Online.is_connected());
        assert!(PresenceStatus::Away.is_connected());
        assert!(!PresenceStatus::Offline.is_connected());
    }

    #[test]
    fn test_deserialize_presence() {
        let presence: Presence = serde_json::from_str(
            r#"{"userId":"5","status":"offline","lastSeen":"2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();
        assert_eq!(presence.status, PresenceStatus::Offline);
        assert!(presence.last_seen.is_some());
    }
}
