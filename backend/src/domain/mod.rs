//! Domain primitives, use cases, and the ports they depend on.
//!
//! Purpose: define the photo, snapper, and user entities together with the
//! rules that govern them. Nothing here knows about HTTP or SQL; inbound
//! adapters call the services and outbound adapters implement the ports.
//!
//! Public surface:
//! - Error — domain failure, translated to a response by the HTTP layer.
//! - Photo, Snapper, User — stored entities and their drafts.
//! - PhotoService, SnapperService, UserService — use cases.
//! - ListParams, SortField — listing parameter resolution.

pub mod error;
mod listing;
mod photo;
mod photo_service;
pub mod ports;
mod snapper;
mod snapper_service;
mod trace_id;
mod user;
mod user_service;
mod validation;

pub use self::error::{EntityKind, Error, FieldViolation, ViolationOrigin};
pub use self::listing::{ListParams, SortField};
pub use self::photo::{
    DeletedPhoto, Photo, PhotoDetails, PhotoDraft, PhotoOwner, PhotoSortField, TITLE_MAX,
    TITLE_MIN, URL_MAX,
};
pub use self::photo_service::PhotoService;
pub use self::snapper::{
    BIOGRAPHY_MIN, NewSnapper, SNAPPER_PASSWORD_MIN, Snapper, SnapperDraft, SnapperSortField,
};
pub use self::snapper_service::SnapperService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserDraft, UserSortField};
pub use self::user_service::UserService;
pub use self::validation::{EMAIL_MAX, USERNAME_MAX, USERNAME_MIN, Validate};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use photos::domain::{ApiResult, EntityKind, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found(EntityKind::Photo, 7))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
