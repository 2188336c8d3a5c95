//! The signed-in actor as reported by the upstream auth API.

use serde::{Deserialize, Serialize};

/// Role tags assigned by the upstream garage API.
///
/// This is a closed set: anything else in a stored record fails
/// deserialization and the session falls back to signed-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Mechanic,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Mechanic => "mechanic",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// A user attached to a session.
///
/// Every field is optional: the upstream API populates what it knows, and a
/// partially populated user still counts as signed in. The session layer
/// performs no validation of these contents - that is the caller's job
/// before sign-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar URL, if the upstream profile carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    /// Minimal user as produced by the sign-in form: email plus role.
    pub fn with_email(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: Some(email.into()),
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
