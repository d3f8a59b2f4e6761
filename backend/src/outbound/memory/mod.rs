//! In-process repositories for running without PostgreSQL.
//!
//! Used when no database URL is configured and by the integration tests.
//! Ordering and uniqueness follow the PostgreSQL adapters: `NULL` sorts
//! after every value ascending, ties break on identity, and unique columns
//! are checked under the same lock as the insert.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use pagination::{PageWindow, SortDirection};

use crate::domain::ports::RepositoryError;

mod photo_repository;
mod snapper_repository;
mod user_repository;

pub use photo_repository::MemoryPhotoRepository;
pub use snapper_repository::MemorySnapperRepository;
pub use user_repository::MemoryUserRepository;

/// Rows keyed by a monotonically assigned identity.
#[derive(Debug)]
struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    fn count(&self, predicate: impl Fn(&T) -> bool) -> u64 {
        self.rows.values().filter(|row| predicate(row)).count() as u64
    }

    /// Filter, sort with `compare`, then cut out `window`.
    fn page(
        &self,
        predicate: impl Fn(&T) -> bool,
        compare: impl Fn(&T, &T) -> Ordering,
        window: PageWindow,
    ) -> Result<Vec<T>, RepositoryError> {
        let offset = to_index(window.offset())?;
        let limit = to_index(window.limit())?;
        let mut rows: Vec<&T> = self.rows.values().filter(|row| predicate(row)).collect();
        rows.sort_by(|a, b| compare(a, b));
        Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
    }
}

fn to_index(value: u64) -> Result<usize, RepositoryError> {
    usize::try_from(value).map_err(|_| RepositoryError::query("window exceeds address space"))
}

/// Order two values the way PostgreSQL does: `NULL` is greater than any
/// value, and `DESC` reverses the whole ordering.
fn compare_column<V: Ord + ?Sized>(
    left: Option<&V>,
    right: Option<&V>,
    direction: SortDirection,
) -> Ordering {
    let ascending = match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(l), Some(r)) => l.cmp(r),
    };
    match direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}
