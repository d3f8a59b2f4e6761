//! Internal Diesel row structs.
//!
//! Never exposed to the domain; each row converts into its entity on the
//! way out of the repository.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Photo, Snapper, User};

use super::schema::{photos, snappers, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PhotoRow {
    pub photo_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub views: i64,
    pub snapper_id: Option<i64>,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PhotoRow> for Photo {
    fn from(row: PhotoRow) -> Self {
        let PhotoRow {
            photo_id,
            title,
            description,
            url,
            views,
            snapper_id,
            user_id,
            created_at,
            updated_at,
        } = row;
        Self {
            id: photo_id,
            title,
            description,
            url,
            views,
            snapper_id,
            user_id,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = photos)]
pub(crate) struct NewPhotoRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub url: &'a str,
    pub snapper_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Title and description only; `None` writes SQL `NULL`. Timestamps stay
/// untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = photos)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PhotoDetailsUpdate<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = snappers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SnapperRow {
    pub snapper_id: i64,
    pub username: String,
    pub email: String,
    pub biography: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SnapperRow> for Snapper {
    fn from(row: SnapperRow) -> Self {
        Self {
            id: row.snapper_id,
            username: row.username,
            email: row.email,
            biography: row.biography,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = snappers)]
pub(crate) struct NewSnapperRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub biography: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.user_id,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}
