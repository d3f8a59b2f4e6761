//! Photo use cases: listing, viewing, creating, updating, deleting.

use std::sync::Arc;

use mockable::Clock;
use pagination::Page;
use tracing::{debug, info};

use super::error::{EntityKind, Error, FieldViolation};
use super::listing::ListParams;
use super::photo::{DeletedPhoto, Photo, PhotoDetails, PhotoDraft, PhotoOwner, PhotoSortField};
use super::ports::{PhotoRepository, SnapperRepository, UserRepository};
use super::validation::{NOT_UNIQUE, UNKNOWN_OWNER, Validate, is_valid_url};

/// Photo use cases over the repository ports.
#[derive(Clone)]
pub struct PhotoService {
    photos: Arc<dyn PhotoRepository>,
    snappers: Arc<dyn SnapperRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl PhotoService {
    /// Build the service; owner repositories resolve nested listings and
    /// owner references on create.
    pub fn new(
        photos: Arc<dyn PhotoRepository>,
        snappers: Arc<dyn SnapperRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            photos,
            snappers,
            users,
            clock,
        }
    }

    /// One page of every photo.
    ///
    /// # Errors
    ///
    /// Parameter errors from [`ListParams::resolve`], then
    /// [`Error::EmptyCollection`] or [`Error::PageOutOfRange`].
    pub async fn list(&self, params: &ListParams) -> Result<Page<Photo>, Error> {
        self.list_for_owner(PhotoOwner::Any, params).await
    }

    /// One page of the photos belonging to `owner`.
    ///
    /// # Errors
    ///
    /// As [`PhotoService::list`], plus [`Error::NotFound`] when the owner
    /// does not exist.
    pub async fn list_for_owner(
        &self,
        owner: PhotoOwner,
        params: &ListParams,
    ) -> Result<Page<Photo>, Error> {
        let (request, sort) = params.resolve::<PhotoSortField>()?;
        self.ensure_owner_exists(owner).await?;
        let total = self.photos.count(owner).await?;
        let window = request.window(total)?;
        let items = self.photos.find_page(owner, sort, window).await?;
        Ok(Page::new(window, items)?)
    }

    /// Fetch a photo, counting the read.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no photo has this identity.
    pub async fn view(&self, id: i64) -> Result<Photo, Error> {
        let photo = self
            .photos
            .increment_views(id)
            .await?
            .ok_or(Error::not_found(EntityKind::Photo, id))?;
        debug!(photo_id = id, views = photo.views, "photo viewed");
        Ok(photo)
    }

    /// Validate and store a new photo.
    ///
    /// # Errors
    ///
    /// [`Error::ValidationFailure`] listing every broken constraint, including
    /// a duplicate URL or an unknown owner.
    pub async fn create(&self, draft: PhotoDraft) -> Result<Photo, Error> {
        let mut violations = draft.violations();
        if is_valid_url(&draft.url) && self.photos.find_by_url(&draft.url).await?.is_some() {
            violations.push(
                FieldViolation::new(EntityKind::Photo, "url", NOT_UNIQUE)
                    .with_rejected_value(draft.url.clone().into()),
            );
        }
        if let Some(snapper_id) = draft.snapper_id {
            if self.snappers.find_by_id(snapper_id).await?.is_none() {
                violations.push(unknown_owner("snapperId", snapper_id));
            }
        }
        if let Some(user_id) = draft.user_id {
            if self.users.find_by_id(user_id).await?.is_none() {
                violations.push(unknown_owner("userId", user_id));
            }
        }
        if !violations.is_empty() {
            return Err(Error::validation(violations));
        }

        let photo = self.photos.insert(&draft).await?;
        info!(photo_id = photo.id, "photo created");
        Ok(photo)
    }

    /// Overwrite a photo's title and description.
    ///
    /// # Errors
    ///
    /// [`Error::ValidationFailure`] for a bad title, then [`Error::NotFound`].
    pub async fn update(&self, id: i64, details: PhotoDetails) -> Result<Photo, Error> {
        details.ensure_valid()?;
        let photo = self
            .photos
            .update_details(id, &details)
            .await?
            .ok_or(Error::not_found(EntityKind::Photo, id))?;
        info!(photo_id = id, "photo updated");
        Ok(photo)
    }

    /// Remove a photo.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no photo has this identity.
    pub async fn delete(&self, id: i64) -> Result<DeletedPhoto, Error> {
        let photo = self
            .photos
            .delete(id)
            .await?
            .ok_or(Error::not_found(EntityKind::Photo, id))?;
        info!(photo_id = id, "photo deleted");
        Ok(DeletedPhoto {
            timestamp: self.clock.utc(),
            photo,
        })
    }

    async fn ensure_owner_exists(&self, owner: PhotoOwner) -> Result<(), Error> {
        match owner {
            PhotoOwner::Any => Ok(()),
            PhotoOwner::Snapper(id) => self
                .snappers
                .find_by_id(id)
                .await?
                .map(|_| ())
                .ok_or(Error::not_found(EntityKind::Snapper, id)),
            PhotoOwner::User(id) => self
                .users
                .find_by_id(id)
                .await?
                .map(|_| ())
                .ok_or(Error::not_found(EntityKind::User, id)),
        }
    }
}

fn unknown_owner(field: &str, id: i64) -> FieldViolation {
    FieldViolation::new(EntityKind::Photo, field, UNKNOWN_OWNER).with_rejected_value(id.into())
}

#[cfg(test)]
#[path = "photo_service_tests.rs"]
mod tests;
