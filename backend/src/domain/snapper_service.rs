//! Snapper use cases: listing, lookup, registration.

use std::sync::Arc;

use pagination::Page;
use tracing::info;
use zeroize::Zeroizing;

use super::error::{EntityKind, Error, FieldViolation};
use super::listing::ListParams;
use super::ports::{PasswordHash, PasswordHasher, SnapperRepository};
use super::snapper::{Snapper, SnapperDraft, SnapperSortField};
use super::validation::{NOT_UNIQUE, Validate, is_blank};

/// Snapper use cases over the repository and hashing ports.
#[derive(Clone)]
pub struct SnapperService {
    snappers: Arc<dyn SnapperRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SnapperService {
    /// Build the service.
    pub fn new(snappers: Arc<dyn SnapperRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { snappers, hasher }
    }

    /// One page of snappers.
    ///
    /// # Errors
    ///
    /// Parameter errors, then [`Error::EmptyCollection`] or
    /// [`Error::PageOutOfRange`].
    pub async fn list(&self, params: &ListParams) -> Result<Page<Snapper>, Error> {
        let (request, sort) = params.resolve::<SnapperSortField>()?;
        let total = self.snappers.count().await?;
        let window = request.window(total)?;
        let items = self.snappers.find_page(sort, window).await?;
        Ok(Page::new(window, items)?)
    }

    /// Fetch one snapper.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no snapper has this identity.
    pub async fn get(&self, id: i64) -> Result<Snapper, Error> {
        self.snappers
            .find_by_id(id)
            .await?
            .ok_or(Error::not_found(EntityKind::Snapper, id))
    }

    /// Validate, hash the password, and store a new snapper.
    ///
    /// # Errors
    ///
    /// [`Error::ValidationFailure`] for broken constraints or a taken
    /// username or email; [`Error::Internal`] when hashing fails.
    pub async fn create(&self, draft: SnapperDraft) -> Result<Snapper, Error> {
        let mut violations = draft.violations();
        if !is_blank(&draft.username)
            && self.snappers.find_by_username(&draft.username).await?.is_some()
        {
            violations.push(taken("username", &draft.username));
        }
        if !is_blank(&draft.email) && self.snappers.find_by_email(&draft.email).await?.is_some() {
            violations.push(taken("email", &draft.email));
        }
        if !violations.is_empty() {
            return Err(Error::validation(violations));
        }

        let hash = self.hash_password(&draft.password).await?;
        let snapper = self.snappers.insert(&draft.into_new(hash)).await?;
        info!(snapper_id = snapper.id, "snapper registered");
        Ok(snapper)
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
    FieldViolation::new(EntityKind::Snapper, field, NOT_UNIQUE).with_rejected_value(value.into())
}
