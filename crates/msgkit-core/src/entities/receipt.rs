//! Read receipt entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// A user having read a message at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadReceipt {
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub read_at: DateTime<Utc>,
}

impl ReadReceipt {
    /// Create a new ReadReceipt
    pub fn new(user_id: impl Into<UserId>, read_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: None,
            read_at,
        }
    }

    /// Attach the reader's display name
    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(self.user_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let now = Utc::now();
        assert_eq!(ReadReceipt::new("u1", now).display_name(), "u1");
        assert_eq!(ReadReceipt::new("u1", now).with_user_name("Ann").display_name(), "Ann");
    }
}
