//! Port abstraction for snapper persistence adapters.

use async_trait::async_trait;
use pagination::{PageWindow, Sort};

use crate::domain::{NewSnapper, Snapper, SnapperSortField};

use super::RepositoryError;

/// Storage for snapper accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapperRepository: Send + Sync {
    /// Number of snappers.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Load the slice of snappers described by `window`.
    async fn find_page(
        &self,
        sort: Sort<SnapperSortField>,
        window: PageWindow,
    ) -> Result<Vec<Snapper>, RepositoryError>;

    /// Fetch a snapper by identity.
    async fn find_by_id(&self, id: i64) -> Result<Option<Snapper>, RepositoryError>;

    /// Fetch a snapper by unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Snapper>, RepositoryError>;

    /// Fetch a snapper by unique email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Snapper>, RepositoryError>;

    /// Insert a validated snapper with its hashed password.
    async fn insert(&self, snapper: &NewSnapper) -> Result<Snapper, RepositoryError>;
}
