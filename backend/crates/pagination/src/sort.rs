//! Sort direction parsing and the generic sort specification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PaginationError;

/// Direction applied to the sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest values first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest values first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Wire representation used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = PaginationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(PaginationError::UnknownSortOrder {
                value: other.to_owned(),
            }),
        }
    }
}

/// Sort column and direction for one listing.
///
/// `F` is an entity-specific enum of sortable columns, so an unknown column
/// cannot be represented once the request has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort<F> {
    field: F,
    direction: SortDirection,
}

impl<F: Copy> Sort<F> {
    /// Build a sort specification.
    #[must_use]
    pub const fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column to sort by.
    #[must_use]
    pub const fn field(&self) -> F {
        self.field
    }

    /// Direction applied to the column.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }
}
