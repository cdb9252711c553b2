//! User entity and related types

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored user record
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: UserId,
    /// Unique, case-sensitive login
    login: String,
    /// Password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    name: Option<String>,
}

impl User {
    pub fn new(
        id: UserId,
        login: impl Into<String>,
        password_hash: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            id,
            login: login.into(),
            password_hash: password_hash.into(),
            name,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Update the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Public projection without the credential
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            login: self.login.clone(),
            name: self.name.clone(),
        }
    }
}

/// Public view of a user: `{id, login, name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub login: String,
    pub name: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            name: user.name,
        }
    }
}

/// Data needed to insert a user; the id is assigned by the store
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
    pub name: Option<String>,
}
