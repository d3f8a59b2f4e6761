//! In-memory `PhotoRepository`.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{PageWindow, Sort};
use tokio::sync::Mutex;

use crate::domain::ports::{PhotoRepository, RepositoryError};
use crate::domain::{Photo, PhotoDetails, PhotoDraft, PhotoOwner, PhotoSortField};

use super::{Table, compare_column};

/// Photos held in process memory.
pub struct MemoryPhotoRepository {
    table: Mutex<Table<Photo>>,
    clock: Arc<dyn Clock>,
}

impl MemoryPhotoRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            clock,
        }
    }
}

fn owned_by(photo: &Photo, owner: PhotoOwner) -> bool {
    match owner {
        PhotoOwner::Any => true,
        PhotoOwner::Snapper(id) => photo.snapper_id == Some(id),
        PhotoOwner::User(id) => photo.user_id == Some(id),
    }
}

fn compare(left: &Photo, right: &Photo, sort: Sort<PhotoSortField>) -> Ordering {
    let direction = sort.direction();
    let by_field = match sort.field() {
        PhotoSortField::PhotoId => compare_column(Some(&left.id), Some(&right.id), direction),
        PhotoSortField::Title => compare_column(Some(&left.title), Some(&right.title), direction),
        PhotoSortField::Description => compare_column(
            left.description.as_ref(),
            right.description.as_ref(),
            direction,
        ),
        PhotoSortField::Url => compare_column(Some(&left.url), Some(&right.url), direction),
        PhotoSortField::Views => compare_column(Some(&left.views), Some(&right.views), direction),
        PhotoSortField::CreatedAt => {
            compare_column(Some(&left.created_at), Some(&right.created_at), direction)
        }
        PhotoSortField::UpdatedAt => {
            compare_column(Some(&left.updated_at), Some(&right.updated_at), direction)
        }
    };
    by_field.then(left.id.cmp(&right.id))
}

#[async_trait]
impl PhotoRepository for MemoryPhotoRepository {
    async fn count(&self, owner: PhotoOwner) -> Result<u64, RepositoryError> {
        Ok(self.table.lock().await.count(|photo| owned_by(photo, owner)))
    }

    async fn find_page(
        &self,
        owner: PhotoOwner,
        sort: Sort<PhotoSortField>,
        window: PageWindow,
    ) -> Result<Vec<Photo>, RepositoryError> {
        self.table.lock().await.page(
            |photo| owned_by(photo, owner),
            |left, right| compare(left, right, sort),
            window,
        )
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, RepositoryError> {
        Ok(self.table.lock().await.get(id))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Photo>, RepositoryError> {
        Ok(self.table.lock().await.find(|photo| photo.url == url))
    }

    async fn insert(&self, draft: &PhotoDraft) -> Result<Photo, RepositoryError> {
        let mut table = self.table.lock().await;
        if table.find(|photo| photo.url == draft.url).is_some() {
            return Err(RepositoryError::unique_violation("photos_url_key"));
        }
        let now = self.clock.utc();
        let photo = Photo {
            id: table.next_id(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            url: draft.url.clone(),
            views: 0,
            snapper_id: draft.snapper_id,
            user_id: draft.user_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(photo.id, photo.clone());
        Ok(photo)
    }

    async fn increment_views(&self, id: i64) -> Result<Option<Photo>, RepositoryError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.get_mut(&id).map(|photo| {
            photo.views += 1;
            photo.clone()
        }))
    }

    async fn update_details(
        &self,
        id: i64,
        details: &PhotoDetails,
    ) -> Result<Option<Photo>, RepositoryError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.get_mut(&id).map(|photo| {
            photo.title.clone_from(&details.title);
            photo.description.clone_from(&details.description);
            photo.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Photo>, RepositoryError> {
        Ok(self.table.lock().await.rows.remove(&id))
    }
}
