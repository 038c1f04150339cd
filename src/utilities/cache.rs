use std::collections::HashMap;
use std::fmt;

use tdlib::enums::UserType;
use tdlib::types::{UpdateUser, User};

use super::telegram_utils::MainUsername;

/// Users seen in TDLib updates. A session is keyed by the user id, so a
/// sender has to be known here before their command runs.
#[derive(Default)]
pub struct UserCache {
    users: HashMap<i64, CompactUser>,
}

impl UserCache {
    pub fn get(&self, id: i64) -> Option<CompactUser> {
        self.users.get(&id).cloned()
    }

    pub fn update(&mut self, update: UpdateUser) {
        self.users.insert(update.user.id, update.user.into());
    }
}

#[derive(Clone)]
pub struct CompactUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: Option<String>,
    pub r#type: UserType,
}

impl CompactUser {
    /// Only regular accounts get headlines; bots and deleted accounts are skipped.
    pub const fn is_regular(&self) -> bool {
        matches!(self.r#type, UserType::Regular)
    }
}

impl From<User> for CompactUser {
    fn from(value: User) -> Self {
        let username = value.main_username().cloned();

        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            username,
            r#type: value.r#type,
        }
    }
}

impl fmt::Display for CompactUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.username {
            Some(username) => write!(f, "@{username}"),
            None if self.last_name.is_empty() => write!(f, "{} ({})", self.first_name, self.id),
            None => write!(f, "{} {} ({})", self.first_name, self.last_name, self.id),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn user(username: Option<&str>, last_name: &str) -> CompactUser {
        CompactUser {
            id: 42,
            first_name: "Ada".into(),
            last_name: last_name.into(),
            username: username.map(str::to_string),
            r#type: UserType::Regular,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(user(Some("ada"), "Lovelace").to_string(), "@ada");
        assert_eq!(user(None, "Lovelace").to_string(), "Ada Lovelace (42)");
        assert_eq!(user(None, "").to_string(), "Ada (42)");
    }

    #[test]
    fn test_is_regular() {
        assert!(user(None, "").is_regular());

        let deleted = CompactUser { r#type: UserType::Deleted, ..user(None, "") };
        assert!(!deleted.is_regular());
    }
}
