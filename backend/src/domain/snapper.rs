//! Snapper (photographer account) entity and its input draft.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use super::error::{EntityKind, FieldViolation};
use super::listing::SortField;
use super::ports::PasswordHash;
use super::validation::{
    INVALID_USERNAME, Validate, Violations, char_len, check_email, check_password,
    check_username_length, is_blank, is_valid_username, size_at_least,
};

/// Minimum password length in characters.
pub const SNAPPER_PASSWORD_MIN: usize = 8;
/// Minimum biography length in characters, when one is given.
pub const BIOGRAPHY_MIN: usize = 10;

/// Stored snapper. Carries no password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapper {
    /// Server-assigned identity.
    pub id: i64,
    /// Unique, immutable handle.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Optional self description.
    pub biography: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a snapper.
#[derive(Clone, Default)]
pub struct SnapperDraft {
    /// Requested handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Plain-text password; wiped on drop.
    pub password: Zeroizing<String>,
    /// Optional self description.
    pub biography: Option<String>,
}

impl fmt::Debug for SnapperDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapperDraft")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("biography", &self.biography)
            .finish()
    }
}

impl SnapperDraft {
    /// Swap the plain-text password for its hash.
    #[must_use]
    pub fn into_new(self, password_hash: PasswordHash) -> NewSnapper {
        let Self {
            username,
            email,
            biography,
            ..
        } = self;
        NewSnapper {
            username,
            email,
            password_hash,
            biography,
        }
    }
}

impl Validate for SnapperDraft {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Violations::new(EntityKind::Snapper);
        check_username_length(&mut violations, &self.username);
        if !is_blank(&self.username) && !is_valid_username(&self.username) {
            violations.reject("username", INVALID_USERNAME, self.username.as_str());
        }
        check_email(&mut violations, &self.email);
        check_password(&mut violations, &self.password, Some(SNAPPER_PASSWORD_MIN));
        if let Some(biography) = self
            .biography
            .as_deref()
            .filter(|biography| char_len(biography) < BIOGRAPHY_MIN)
        {
            violations.reject("biography", size_at_least(BIOGRAPHY_MIN), biography);
        }
        violations.into_vec()
    }
}

/// Validated snapper ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnapper {
    /// Handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Hashed password.
    pub password_hash: PasswordHash,
    /// Optional self description.
    pub biography: Option<String>,
}

/// Properties a snapper listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapperSortField {
    /// `snapperId`
    SnapperId,
    /// `username`
    Username,
    /// `email`
    Email,
    /// `biography`
    Biography,
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
}

impl SortField for SnapperSortField {
    const KIND: EntityKind = EntityKind::Snapper;
    const ALL: &'static [Self] = &[
        Self::SnapperId,
        Self::Username,
        Self::Email,
        Self::Biography,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::SnapperId => "snapperId",
            Self::Username => "username",
            Self::Email => "email",
            Self::Biography => "biography",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    fn primary() -> Self {
        Self::SnapperId
    }
}
