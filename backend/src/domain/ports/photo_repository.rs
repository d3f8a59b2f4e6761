//! Port abstraction for photo persistence adapters.

use async_trait::async_trait;
use pagination::{PageWindow, Sort};

use crate::domain::{Photo, PhotoDetails, PhotoDraft, PhotoOwner, PhotoSortField};

use super::RepositoryError;

/// Storage for photos.
///
/// Listings order by the requested column, then by identity ascending, so
/// pages never overlap.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Number of photos visible to `owner`.
    async fn count(&self, owner: PhotoOwner) -> Result<u64, RepositoryError>;

    /// Load the slice of photos described by `window`.
    async fn find_page(
        &self,
        owner: PhotoOwner,
        sort: Sort<PhotoSortField>,
        window: PageWindow,
    ) -> Result<Vec<Photo>, RepositoryError>;

    /// Fetch a photo by identity without side effects.
    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, RepositoryError>;

    /// Fetch a photo by its unique URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<Photo>, RepositoryError>;

    /// Insert a validated draft, assigning identity and timestamps.
    async fn insert(&self, draft: &PhotoDraft) -> Result<Photo, RepositoryError>;

    /// Add one to the view counter in a single atomic row update and return
    /// the updated photo.
    async fn increment_views(&self, id: i64) -> Result<Option<Photo>, RepositoryError>;

    /// Overwrite title and description only.
    async fn update_details(
        &self,
        id: i64,
        details: &PhotoDetails,
    ) -> Result<Option<Photo>, RepositoryError>;

    /// Remove a photo, returning its last state.
    async fn delete(&self, id: i64) -> Result<Option<Photo>, RepositoryError>;
}
