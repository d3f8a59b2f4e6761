//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Photographer accounts.
    snappers (snapper_id) {
        snapper_id -> Int8,
        username -> Varchar,
        email -> Varchar,
        /// PHC-encoded Argon2id hash.
        password_hash -> Varchar,
        biography -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Plain user accounts.
    users (user_id) {
        user_id -> Int8,
        username -> Varchar,
        email -> Varchar,
        /// PHC-encoded Argon2id hash.
        password_hash -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Photos; `url` is unique and never updated.
    photos (photo_id) {
        photo_id -> Int8,
        title -> Varchar,
        description -> Nullable<Text>,
        url -> Varchar,
        views -> Int8,
        snapper_id -> Nullable<Int8>,
        user_id -> Nullable<Int8>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(photos -> snappers (snapper_id));
diesel::joinable!(photos -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(photos, snappers, users);
