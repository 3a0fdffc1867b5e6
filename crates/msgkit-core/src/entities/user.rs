//! Roster entities - users available for mention resolution

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// A roster entry supplied by the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionUser {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl MentionUser {
    /// Create a new roster entry with required fields
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            role: None,
        }
    }

    /// Set the avatar URL
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Set the role label
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Case-insensitive name equality.
    ///
    /// Runs of whitespace compare equal, so `"John  Smith"` names `"John Smith"`.
    pub fn name_matches(&self, candidate: &str) -> bool {
        normalize(&self.name) == normalize(candidate)
    }

    /// Case-insensitive substring match used by the suggestion dropdown
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered set of users known to the mention parser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    users: Vec<MentionUser>,
}

impl Roster {
    /// Create a roster from a list of entries
    pub fn new(users: Vec<MentionUser>) -> Self {
        Self { users }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the roster has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate entries in roster order
    pub fn iter(&self) -> impl Iterator<Item = &MentionUser> {
        self.users.iter()
    }

    /// Find an entry by id
    pub fn get(&self, id: &UserId) -> Option<&MentionUser> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// First entry whose name equals the candidate, ignoring case
    pub fn find_by_name(&self, candidate: &str) -> Option<&MentionUser> {
        self.users.iter().find(|u| u.name_matches(candidate))
    }

    /// Entries whose name contains the query, in roster order, at most `limit`
    pub fn search(&self, query: &str, limit: usize) -> Vec<&MentionUser> {
        self.users
            .iter()
            .filter(|u| u.name_contains(query))
            .take(limit)
            .collect()
    }
}

impl FromIterator<MentionUser> for Roster {
    fn from_iter<I: IntoIterator<Item = MentionUser>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a MentionUser;
    type IntoIter = std::slice::Iter<'a, MentionUser>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            MentionUser::new("1", "Alice"),
            MentionUser::new("2", "John Smith").with_role("Supervisor"),
            MentionUser::new("3", "alicia keys"),
        ])
    }

    #[test]
    fn test_name_matches_ignores_case_and_spacing() {
        let user = MentionUser::new("2", "John Smith");
        assert!(user.name_matches("john smith"));
        assert!(user.name_matches("JOHN   Smith"));
        assert!(!user.name_matches("John"));
    }

    #[test]
    fn test_find_by_name() {
        let roster = roster();
        assert_eq!(roster.find_by_name("ALICE").map(|u| u.id.as_str()), Some("1"));
        assert!(roster.find_by_name("Bob").is_none());
    }

    #[test]
    fn test_search_is_substring_and_limited() {
        let roster = roster();
        let found: Vec<_> = roster.search("ali", 10).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(found, vec!["1", "3"]);
        assert_eq!(roster.search("ali", 1).len(), 1);
        assert_eq!(roster.search("", 10).len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let roster = roster();
        assert_eq!(roster.get(&UserId::new("2")).and_then(|u| u.role.as_deref()), Some("Supervisor"));
        assert!(roster.get(&UserId::new("9")).is_none());
    }

    #[test]
    fn test_roster_deserializes_from_array() {
        let roster: Roster = serde_json::from_str(
            r#"[{"id":"1","name":"Alice","avatarUrl":"https://cdn.example/a.png"}]"#,
        )
        .unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(
            roster.iter().next().and_then(|u| u.avatar_url.as_deref()),
            Some("https://cdn.example/a.png")
        );
    }
}
