//! Port abstraction for user persistence adapters.
use async_trait::async_trait;
use pagination::{PageWindow, Sort};

use crate::domain::{NewUser, User, UserSortField};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Number of users.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Load the slice of users described by `window`.
    async fn find_page(
        &self,
        sort: Sort<UserSortField>,
        window: PageWindow,
    ) -> Result<Vec<User>, RepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;

    /// Fetch a user by unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Fetch a user by unique email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a validated user with its hashed password.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
