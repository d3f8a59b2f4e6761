//! Photo entity, its input drafts, and its sortable fields.

use chrono::{DateTime, Utc};

use super::error::{EntityKind, FieldViolation};
use super::listing::SortField;
use super::validation::{
    INVALID_URL, NOT_BLANK, Validate, Violations, char_len, is_blank, is_valid_url, size_between,
};

/// Minimum title length in characters.
pub const TITLE_MIN: usize = 2;
/// Maximum title length in characters.
pub const TITLE_MAX: usize = 50;
/// Maximum URL length in characters.
pub const URL_MAX: usize = 2048;

/// Stored photo.
///
/// Two photos are equal when they share identity and URL; the mutable
/// fields do not take part.
#[derive(Debug, Clone)]
pub struct Photo {
    /// Server-assigned identity.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Location of the image; unique and immutable.
    pub url: String,
    /// Number of successful single-item reads.
    pub views: i64,
    /// Owning snapper, if any.
    pub snapper_id: Option<i64>,
    /// Owning user, if any.
    pub user_id: Option<i64>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.url == other.url
    }
}

impl Eq for Photo {}

/// Photo removed by a delete, with the time of removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedPhoto {
    /// When the photo was removed.
    pub timestamp: DateTime<Utc>,
    /// Last known state of the removed photo.
    pub photo: Photo,
}

/// Filter restricting a photo listing to one owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoOwner {
    /// Every photo.
    #[default]
    Any,
    /// Photos owned by the given snapper.
    Snapper(i64),
    /// Photos owned by the given user.
    User(i64),
}

/// Payload for creating a photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDraft {
    /// Display title.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Location of the image.
    pub url: String,
    /// Owning snapper, if any.
    pub snapper_id: Option<i64>,
    /// Owning user, if any.
    pub user_id: Option<i64>,
}

/// Payload for updating a photo; only these fields are ever changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDetails {
    /// Replacement title.
    pub title: String,
    /// Replacement description; `None` clears it.
    pub description: Option<String>,
}

fn check_title(violations: &mut Violations, title: &str) {
    if is_blank(title) {
        violations.reject("title", NOT_BLANK, title);
    }
    if !(TITLE_MIN..=TITLE_MAX).contains(&char_len(title)) {
        violations.reject("title", size_between(TITLE_MIN, TITLE_MAX), title);
    }
}

impl Validate for PhotoDraft {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Violations::new(EntityKind::Photo);
        check_title(&mut violations, &self.title);
        if is_blank(&self.url) {
            violations.reject("url", NOT_BLANK, self.url.as_str());
        } else if !is_valid_url(&self.url) {
            violations.reject("url", INVALID_URL, self.url.as_str());
        }
        if char_len(&self.url) > URL_MAX {
            violations.reject("url", size_between(0, URL_MAX), self.url.as_str());
        }
        violations.into_vec()
    }
}

impl Validate for PhotoDetails {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Violations::new(EntityKind::Photo);
        check_title(&mut violations, &self.title);
        violations.into_vec()
    }
}

/// Properties a photo listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoSortField {
    /// `photoId`
    PhotoId,
    /// `title`
    Title,
    /// `description`
    Description,
    /// `url`
    Url,
    /// `views`
    Views,
    /// `createdAt`
    CreatedAt,
    /// `updatedAt`
    UpdatedAt,
}

impl SortField for PhotoSortField {
    const KIND: EntityKind = EntityKind::Photo;
    const ALL: &'static [Self] = &[
        Self::PhotoId,
        Self::Title,
        Self::Description,
        Self::Url,
        Self::Views,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::PhotoId => "photoId",
            Self::Title => "title",
            Self::Description => "description",
            Self::Url => "url",
            Self::Views => "views",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }

    fn primary() -> Self {
        Self::PhotoId
    }
}
