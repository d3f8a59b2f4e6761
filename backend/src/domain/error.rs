//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The HTTP adapter is the only place
//! that decides status codes and response bodies; everything else returns one
//! of the variants below and lets it propagate.

use std::fmt;

use pagination::PaginationError;
use serde_json::Value;

use super::ports::RepositoryError;

/// Entity collections exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A photo record.
    Photo,
    /// A photographer account.
    Snapper,
    /// A plain user account.
    User,
}

impl EntityKind {
    /// Type name used in client-facing messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "Photo",
            Self::Snapper => "Snapper",
            Self::User => "User",
        }
    }

    /// Lower-case object name reported against field violations.
    #[must_use]
    pub const fn object_name(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Snapper => "snapper",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a validation failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationOrigin {
    /// The request payload broke a field constraint.
    Request,
    /// The store rejected a write that passed request validation.
    Storage,
}

impl ViolationOrigin {
    /// Summary message shown for this origin.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Request => "Validation error",
            Self::Storage => "Constraint Violation (Validation error)",
        }
    }
}

/// One violated constraint.
///
/// Every part except `message` is optional so storage-level violations, which
/// cannot always name a field, share the same shape as request violations.
///
/// # Examples
/// ```
/// use photos::domain::{EntityKind, FieldViolation};
/// use serde_json::json;
///
/// let violation = FieldViolation::new(EntityKind::Photo, "title", "must not be blank")
///     .with_rejected_value(json!(""));
/// assert_eq!(violation.field(), Some("title"));
/// assert_eq!(violation.object_name(), Some("photo"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    field: Option<String>,
    message: String,
    object_name: Option<String>,
    rejected_value: Option<Value>,
}

impl FieldViolation {
    /// Violation attached to a named field of `kind`.
    pub fn new(kind: EntityKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
            object_name: Some(kind.object_name().to_owned()),
            rejected_value: None,
        }
    }

    /// Violation that cannot be attributed to a field.
    pub fn unnamed(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
            object_name: None,
            rejected_value: None,
        }
    }

    /// Record the value that failed the constraint.
    #[must_use]
    pub fn with_rejected_value(mut self, value: Value) -> Self {
        self.rejected_value = Some(value);
        self
    }

    /// Offending field, if known.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Constraint message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Owning object name, if known.
    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    /// Rejected value, if recorded.
    pub fn rejected_value(&self) -> Option<&Value> {
        self.rejected_value.as_ref()
    }
}

/// Closed set of failures a request can end in.
///
/// # Examples
/// ```
/// use photos::domain::{EntityKind, Error};
///
/// let err = Error::not_found(EntityKind::Photo, 7);
/// assert_eq!(err.to_string(), "Photo not found for this id :: 7");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No entity of `kind` has identity `id`.
    #[error("{kind} not found for this id :: {id}")]
    NotFound {
        /// Collection searched.
        kind: EntityKind,
        /// Identity requested.
        id: i64,
    },

    /// The whole collection holds nothing.
    #[error("The repository is empty")]
    EmptyCollection,

    /// The page index lies past the last page of a non-empty collection.
    #[error("Page value out of bounds, max page = {max_page}")]
    PageOutOfRange {
        /// Highest valid zero-based page index.
        max_page: u64,
    },

    /// A query or path parameter could not be accepted.
    #[error("{message}")]
    InvalidArgument {
        /// Message naming the offending value and, where finite, the legal ones.
        message: String,
    },

    /// `sortBy` names no sortable property of `kind`.
    #[error("No property '{field}' found for type '{kind}'")]
    UnresolvableSortField {
        /// Raw `sortBy` value.
        field: String,
        /// Collection being listed.
        kind: EntityKind,
    },

    /// One or more constraints were violated.
    #[error("{}", .origin.message())]
    ValidationFailure {
        /// Where the violation was detected.
        origin: ViolationOrigin,
        /// Individual violations, in detection order.
        violations: Vec<FieldViolation>,
    },

    /// No route matches the method and URL.
    #[error("Could not find the method {method} for the URL {url}")]
    RouteNotFound {
        /// HTTP method attempted.
        method: String,
        /// Request URL attempted.
        url: String,
    },

    /// The backing store cannot be reached.
    #[error("{message}")]
    ServiceUnavailable {
        /// Diagnostic message.
        message: String,
    },

    /// An unexpected failure; the message never leaves the process.
    #[error("{message}")]
    Internal {
        /// Diagnostic message.
        message: String,
    },
}

impl Error {
    /// Convenience constructor for [`Error::NotFound`].
    #[must_use]
    pub const fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Convenience constructor for [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::UnresolvableSortField`].
    pub fn unresolvable_sort_field(kind: EntityKind, field: impl Into<String>) -> Self {
        Self::UnresolvableSortField {
            field: field.into(),
            kind,
        }
    }

    /// Request-origin [`Error::ValidationFailure`].
    #[must_use]
    pub const fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::ValidationFailure {
            origin: ViolationOrigin::Request,
            violations,
        }
    }

    /// Storage-origin [`Error::ValidationFailure`] carrying one unnamed entry.
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            origin: ViolationOrigin::Storage,
            violations: vec![FieldViolation::unnamed(message)],
        }
    }

    /// Convenience constructor for [`Error::RouteNotFound`].
    pub fn route_not_found(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self::RouteNotFound {
            method: method.into(),
            url: url.into(),
        }
    }

    /// Convenience constructor for [`Error::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Field violations carried by a validation failure; empty otherwise.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::ValidationFailure { violations, .. } => violations.as_slice(),
            _ => &[],
        }
    }
}

impl From<PaginationError> for Error {
    fn from(error: PaginationError) -> Self {
        match error {
            PaginationError::EmptyCollection => Self::EmptyCollection,
            PaginationError::PageOutOfRange { max_page } => Self::PageOutOfRange { max_page },
            other @ (PaginationError::UnknownSortOrder { .. }
            | PaginationError::NegativePage { .. }
            | PaginationError::NonPositiveSize { .. }) => Self::invalid_argument(other.to_string()),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Connection { message } => Self::service_unavailable(message),
            RepositoryError::Query { message } => Self::internal(message),
            RepositoryError::UniqueViolation { constraint } => {
                Self::constraint_violation(format!("duplicate value violates {constraint}"))
            }
            RepositoryError::ConstraintViolation { message } => Self::constraint_violation(message),
        }
    }
}
