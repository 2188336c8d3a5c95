//! The session entity - the sole persisted piece of state in the core.

use serde::{Deserialize, Serialize};

use super::User;

/// Who the current actor is.
///
/// There is no separate "logged in" flag: the presence of `user` IS the
/// authentication state. A session with a user (even partially populated)
/// is signed in; a session without one is signed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    /// The signed-out session.
    pub fn signed_out() -> Self {
        Self { user: None }
    }

    /// A signed-in session for the given user.
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn into_user(self) -> Option<User> {
        self.user
    }
}
