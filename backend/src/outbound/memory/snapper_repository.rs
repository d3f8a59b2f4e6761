//! In-memory `SnapperRepository`.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{PageWindow, Sort};
use tokio::sync::Mutex;

use crate::domain::ports::{RepositoryError, SnapperRepository};
use crate::domain::{NewSnapper, Snapper, SnapperSortField};

use super::{Table, compare_column};

/// Snappers held in process memory.
pub struct MemorySnapperRepository {
    table: Mutex<Table<Snapper>>,
    clock: Arc<dyn Clock>,
}

impl MemorySnapperRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            clock,
        }
    }
}

fn compare(left: &Snapper, right: &Snapper, sort: Sort<SnapperSortField>) -> Ordering {
    let direction = sort.direction();
    let by_field = match sort.field() {
        SnapperSortField::SnapperId => compare_column(Some(&left.id), Some(&right.id), direction),
        SnapperSortField::Username => {
            compare_column(Some(&left.username), Some(&right.username), direction)
        }
        SnapperSortField::Email => compare_column(Some(&left.email), Some(&right.email), direction),
        SnapperSortField::Biography => {
            compare_column(left.biography.as_ref(), right.biography.as_ref(), direction)
        }
        SnapperSortField::CreatedAt => {
            compare_column(Some(&left.created_at), Some(&right.created_at), direction)
        }
        SnapperSortField::UpdatedAt => {
            compare_column(Some(&left.updated_at), Some(&right.updated_at), direction)
        }
    };
    by_field.then(left.id.cmp(&right.id))
}

#[async_trait]
impl SnapperRepository for MemorySnapperRepository {
    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.table.lock().await.count(|_| true))
    }

    async fn find_page(
        &self,
        sort: Sort<SnapperSortField>,
        window: PageWindow,
    ) -> Result<Vec<Snapper>, RepositoryError> {
        self.table
            .lock()
            .await
            .page(|_| true, |left, right| compare(left, right, sort), window)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Snapper>, RepositoryError> {
        Ok(self.table.lock().await.get(id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Snapper>, RepositoryError> {
        Ok(self.table.lock().await.find(|row| row.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Snapper>, RepositoryError> {
        Ok(self.table.lock().await.find(|row| row.email == email))
    }

    async fn insert(&self, new: &NewSnapper) -> Result<Snapper, RepositoryError> {
        let mut table = self.table.lock().await;
        if table.find(|row| row.username == new.username).is_some() {
            return Err(RepositoryError::unique_violation("snappers_username_key"));
        }
        if table.find(|row| row.email == new.email).is_some() {
            return Err(RepositoryError::unique_violation("snappers_email_key"));
        }
        let now = self.clock.utc();
        let snapper = Snapper {
            id: table.next_id(),
            username: new.username.clone(),
            email: new.email.clone(),
            biography: new.biography.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(snapper.id, snapper.clone());
        Ok(snapper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PasswordHash;
    use mockable::DefaultClock;

    fn new_snapper(username: &str, email: &str) -> NewSnapper {
        NewSnapper {
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: PasswordHash::new("$argon2id$stub"),
            biography: None,
        }
    }

    #[tokio::test]
    async fn email_collision_names_its_constraint() {
        let repo = MemorySnapperRepository::new(Arc::new(DefaultClock));
        repo.insert(&new_snapper("ansel-adams", "ansel@example.com"))
            .await
            .expect("first insert");

        let error = repo
            .insert(&new_snapper("dorothea", "ansel@example.com"))
            .await
            .expect_err("duplicate email");

        assert_eq!(error, RepositoryError::unique_violation("snappers_email_key"));
        assert_eq!(repo.count().await.expect("count"), 1);
    }
}
