//! Plain user account entity and its input draft.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use super::error::{EntityKind, FieldViolation};
use super::listing::SortField;
use super::ports::PasswordHash;
use super::validation::{
    Validate, Violations, check_email, check_password, check_username_length,
};

/// Stored user. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Server-assigned identity.
    pub id: i64,
    /// Unique, immutable handle.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user.
#[derive(Clone, Default)]
pub struct UserDraft {
    /// Requested handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plain-text password; wiped on drop.
    pub password: Zeroizing<String>,
}

impl fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl UserDraft {
    /// Swap the plain-text password for its hash.
    #[must_use]
    pub fn into_new(self, password_hash: PasswordHash) -> NewUser {
        let Self {
            username, email, ..
        } = self;
        NewUser {
            username,
            email,
            password_hash,
        }
    }
}

impl Validate for UserDraft {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Violations::new(EntityKind::User);
        check_username_length(&mut violations, &self.username);
        check_email(&mut violations, &self.email);
        check_password(&mut violations, &self.password, None);
        violations.into_vec()
    }
}

/// Validated user ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Hashed password.
    pub password_hash: PasswordHash,
}

/// Properties a user listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSortField {
    /// `userId`
    UserId,
    /// `username`
    Username,
    /// `email`
    Email,
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
}

impl SortField for UserSortField {
    const KIND: EntityKind = EntityKind::User;
    const ALL: &'static [Self] = &[
        Self::UserId,
        Self::Username,
        Self::Email,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::UserId => "userId",
            Self::Username => "username",
            Self::Email => "email",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    fn primary() -> Self {
        Self::UserId
    }
}
