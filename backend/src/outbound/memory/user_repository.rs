//! In-memory `UserRepository`.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{PageWindow, Sort};
use tokio::sync::Mutex;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{NewUser, User, UserSortField};

use super::{Table, compare_column};

/// Users held in process memory.
pub struct MemoryUserRepository {
    table: Mutex<Table<User>>,
    clock: Arc<dyn Clock>,
}

impl MemoryUserRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            clock,
        }
    }
}

fn compare(left: &User, right: &User, sort: Sort<UserSortField>) -> Ordering {
    let direction = sort.direction();
    let by_field = match sort.field() {
        UserSortField::UserId => compare_column(Some(&left.id), Some(&right.id), direction),
        UserSortField::Username => {
            compare_column(Some(&left.username), Some(&right.username), direction)
        }
        UserSortField::Email => compare_column(Some(&left.email), Some(&right.email), direction),
        UserSortField::CreatedAt => {
            compare_column(Some(&left.created_at), Some(&right.created_at), direction)
        }
        UserSortField::UpdatedAt => {
            compare_column(Some(&left.updated_at), Some(&right.updated_at), direction)
        }
    };
    by_field.then(left.id.cmp(&right.id))
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.table.lock().await.count(|_| true))
    }

    async fn find_page(
        &self,
        sort: Sort<UserSortField>,
        window: PageWindow,
    ) -> Result<Vec<User>, RepositoryError> {
        self.table
            .lock()
            .await
            .page(|_| true, |left, right| compare(left, right, sort), window)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        Ok(self.table.lock().await.get(id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.table.lock().await.find(|row| row.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.table.lock().await.find(|row| row.email == email))
    }

    async fn insert(&self, new: &NewUser) -> Result<User, RepositoryError> {
        let mut table = self.table.lock().await;
        if table.find(|row| row.username == new.username).is_some() {
            return Err(RepositoryError::unique_violation("users_username_key"));
        }
        if table.find(|row| row.email == new.email).is_some() {
            return Err(RepositoryError::unique_violation("users_email_key"));
        }
        let now = self.clock.utc();
        let user = User {
            id: table.next_id(),
            username: new.username.clone(),
            email: new.email.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }
}
