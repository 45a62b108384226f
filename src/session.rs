//! Session

use serde::{Deserialize, Serialize};

/// Signed-in customer, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user id
    pub id: u64,

    /// Login name
    pub username: String,

    /// Contact email
    pub email: String,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Full name, falling back to the username when no name is on file.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();

        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Authentication state. Being authenticated means a user is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Replace the current user; `None` signs out.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Drop the current user, returning it.
    pub fn clear(&mut self) -> Option<User> {
        self.user.take()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
        }
    }

    #[test]
    fn set_user_authenticates() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());

        session.set_user(Some(ada()));

        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id), Some(1));
    }

    #[test]
    fn setting_none_signs_out() {
        let mut session = Session::default();
        session.set_user(Some(ada()));

        session.set_user(None);

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn clear_returns_previous_user() {
        let mut session = Session::default();
        session.set_user(Some(ada()));

        assert_eq!(session.clear(), Some(ada()));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user = ada();
        assert_eq!(user.display_name(), "Ada Obi");

        user.first_name.clear();
        user.last_name.clear();
        assert_eq!(user.display_name(), "ada");
    }

    #[test]
    fn user_deserialises_without_names() -> Result<(), serde_norway::Error> {
        let user: User = serde_norway::from_str("id: 7\nusername: kemi\nemail: kemi@example.com\n")?;

        assert_eq!(user.id, 7);
        assert!(user.first_name.is_empty());

        Ok(())
    }
}
