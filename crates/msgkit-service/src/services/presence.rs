//! Presence service
//!
//! Turns presence snapshots from the presence service into display labels.

use chrono::{DateTime, Utc};
use msgkit_core::{Presence, PresenceStatus, UserId};

use super::context::ServiceContext;

/// Label for a presence snapshot at `now`
pub fn presence_label(presence: &Presence, now: DateTime<Utc>) -> String {
    match presence.status {
        PresenceStatus::Online => "Online".to_string(),
        PresenceStatus::Away => "Away".to_string(),
        PresenceStatus::Offline => presence
            .last_seen
            .map_or_else(|| "Offline".to_string(), |at| last_seen_label(at, now)),
    }
}

fn last_seen_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // Clock skew can put `at` in the future
    let elapsed = now.signed_duration_since(at).max(chrono::Duration::zero());

    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "Last seen just now".to_string();
    }
    if minutes < 60 {
        return format!("Last seen {minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("Last seen {hours}h ago");
    }
    format!("Last seen {}d ago", elapsed.num_days())
}

/// Presence service
pub struct PresenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceService<'a> {
    /// Create a new PresenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Label for a snapshot as of now
    pub fn label(&self, presence: &Presence) -> String {
        presence_label(presence, Utc::now())
    }

    /// Roster members currently connected, in roster order
    pub fn connected<'p>(&self, presences: &'p [Presence]) -> Vec<&'p UserId> {
        self.ctx
            .roster()
            .iter()
            .filter_map(|user| {
                presences
                    .iter()
                    .find(|p| p.user_id == user.id && p.status.is_connected())
                    .map(|p| &p.user_id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use msgkit_core::{MentionUser, Roster};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn offline_since(ago: Duration) -> Presence {
        Presence::new("u1", PresenceStatus::Offline).with_last_seen(now() - ago)
    }

    #[test]
    fn test_connected_labels() {
        assert_eq!(presence_label(&Presence::new("u1", PresenceStatus::Online), now()), "Online");
        assert_eq!(presence_label(&Presence::new("u1", PresenceStatus::Away), now()), "Away");
    }

    #[test]
    fn test_offline_without_last_seen() {
        assert_eq!(presence_label(&Presence::new("u1", PresenceStatus::Offline), now()), "Offline");
    }

    #[test]
    fn test_last_seen_buckets() {
        assert_eq!(presence_label(&offline_since(Duration::seconds(30)), now()), "Last seen just now");
        assert_eq!(presence_label(&offline_since(Duration::minutes(5)), now()), "Last seen 5m ago");
        assert_eq!(presence_label(&offline_since(Duration::minutes(59)), now()), "Last seen 59m ago");
        assert_eq!(presence_label(&offline_since(Duration::minutes(60)), now()), "Last seen 1h ago");
        assert_eq!(presence_label(&offline_since(Duration::hours(23)), now()), "Last seen 23h ago");
        assert_eq!(presence_label(&offline_since(Duration::days(3)), now()), "Last seen 3d ago");
    }

    #[test]
    fn test_future_last_seen_is_just_now() {
        assert_eq!(
            presence_label(&offline_since(Duration::minutes(-10)), now()),
            "Last seen just now"
        );
    }

    #[test]
    fn test_connected_in_roster_order() {
        let roster = Roster::new(vec![
            MentionUser::new("a", "Ann"),
            MentionUser::new("b", "Ben"),
            MentionUser::new("c", "Cy"),
        ]);
        let ctx = ServiceContext::builder().roster(roster).build();
        let presences = vec![
            Presence::new("c", PresenceStatus::Away),
            Presence::new("b", PresenceStatus::Offline),
            Presence::new("a", PresenceStatus::Online),
            Presence::new("z", PresenceStatus::Online),
        ];

        let ids: Vec<_> = PresenceService::new(&ctx)
            .connected(&presences)
            .into_iter()
            .map(UserId::as_str)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
