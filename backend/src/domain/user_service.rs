//! User use cases: listing, lookup, registration.

use std::sync::Arc;

use pagination::Page;
use tracing::info;
use zeroize::Zeroizing;

use super::error::{EntityKind, Error, FieldViolation};
use super::listing::ListParams;
use super::ports::{PasswordHash, PasswordHasher, UserRepository};
use super::user::{User, UserDraft, UserSortField};
use super::validation::{NOT_UNIQUE, Validate, is_blank};

/// User use cases over the repository and hashing ports.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// One page of users.
    ///
    /// # Errors
    ///
    /// Parameter errors, then [`Error::EmptyCollection`] or
    /// [`Error::PageOutOfRange`].
    pub async fn list(&self, params: &ListParams) -> Result<Page<User>, Error> {
        let (request, sort) = params.resolve::<UserSortField>()?;
        let total = self.users.count().await?;
        let window = request.window(total)?;
        let items = self.users.find_page(sort, window).await?;
        Ok(Page::new(window, items)?)
    }

    /// Fetch one user.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no user has this identity.
    pub async fn get(&self, id: i64) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(Error::not_found(EntityKind::User, id))
    }

    /// Validate, hash the password, and store a new user.
    ///
    /// # Errors
    ///
    /// [`Error::ValidationFailure`] for broken constraints or a taken
    /// username or email; [`Error::Internal`] when hashing fails.
    pub async fn create(&self, draft: UserDraft) -> Result<User, Error> {
        let mut violations = draft.violations();
        if !is_blank(&draft.username) && self.users.find_by_username(&draft.username).await?.is_some()
        {
            violations.push(taken("username", &draft.username));
        }
        if !is_blank(&draft.email) && self.users.find_by_email(&draft.email).await?.is_some() {
            violations.push(taken("email", &draft.email));
        }
        if !violations.is_empty() {
            return Err(Error::validation(violations));
        }

        let hash = self.hash_password(&draft.password).await?;
        let user = self.users.insert(&draft.into_new(hash)).await?;
        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    async fn hash_password(&self, password: &Zeroizing<String>) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| Error::internal(err.to_string()))?
            .map_err(|err| Error::internal(err.to_string()))
    }
}

fn taken(field: &str, value: &str) -> FieldViolation {
    FieldViolation::new(EntityKind::User, field, NOT_UNIQUE).with_rejected_value(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockPasswordHasher, MockUserRepository, PasswordHash};
    use zeroize::Zeroizing;

    fn draft() -> UserDraft {
        UserDraft {
            username: "grace".to_owned(),
            email: "grace@example.com".to_owned(),
            password: Zeroizing::new("x".to_owned()),
        }
    }

    #[tokio::test]
    async fn invalid_draft_skips_hashing() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().never();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().return_once(|_| Ok(None));
        repo.expect_find_by_email().never();
        let mut invalid = draft();
        invalid.email = String::new();

        let error = UserService::new(Arc::new(repo), Arc::new(hasher))
            .create(invalid)
            .await
            .expect_err("invalid");

        assert_eq!(error.violations().len(), 1);
        assert_eq!(error.to_string(), "Validation error");
    }

    #[tokio::test]
    async fn single_character_password_is_hashed() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .return_once(|_| Ok(PasswordHash::new("$argon2id$stub")));
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().return_once(|_| Ok(None));
        repo.expect_find_by_email().return_once(|_| Ok(None));
        repo.expect_insert().return_once(|new| {
            let now = chrono::Utc::now();
            Ok(User {
                id: 3,
                username: new.username.clone(),
                email: new.email.clone(),
                created_at: now,
                updated_at: now,
            })
        });

        let user = UserService::new(Arc::new(repo), Arc::new(hasher))
            .create(draft())
            .await
            .expect("created");

        assert_eq!(user.username, "grace");
    }

    #[tokio::test]
    async fn empty_listing_is_reported() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().return_once(|| Ok(0));

        let error = UserService::new(Arc::new(repo), Arc::new(MockPasswordHasher::new()))
            .list(&ListParams::default())
            .await
            .expect_err("empty");

        assert_eq!(error, Error::EmptyCollection);
    }
}
