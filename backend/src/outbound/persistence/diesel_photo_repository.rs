//! PostgreSQL-backed `PhotoRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageWindow, Sort};

use crate::domain::ports::{PhotoRepository, RepositoryError};
use crate::domain::{Photo, PhotoDetails, PhotoDraft, PhotoOwner, PhotoSortField};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::{from_sql_count, order_by_direction, query_optional, to_sql_bigint};
use super::models::{NewPhotoRow, PhotoDetailsUpdate, PhotoRow};
use super::pool::DbPool;
use super::schema::photos;

/// Diesel-backed implementation of the photo repository port.
#[derive(Clone)]
pub struct DieselPhotoRepository {
    pool: DbPool,
}

impl DieselPhotoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn owned_by(query: photos::BoxedQuery<'_, Pg>, owner: PhotoOwner) -> photos::BoxedQuery<'_, Pg> {
    match owner {
        PhotoOwner::Any => query,
        PhotoOwner::Snapper(id) => query.filter(photos::snapper_id.eq(id)),
        PhotoOwner::User(id) => query.filter(photos::user_id.eq(id)),
    }
}

fn ordered(
    query: photos::BoxedQuery<'_, Pg>,
    sort: Sort<PhotoSortField>,
) -> photos::BoxedQuery<'_, Pg> {
    let direction = sort.direction();
    let query = match sort.field() {
        PhotoSortField::PhotoId => order_by_direction!(query, direction, photos::photo_id),
        PhotoSortField::Title => order_by_direction!(query, direction, photos::title),
        PhotoSortField::Description => {
            order_by_direction!(query, direction, photos::description)
        }
        PhotoSortField::Url => order_by_direction!(query, direction, photos::url),
        PhotoSortField::Views => order_by_direction!(query, direction, photos::views),
        PhotoSortField::CreatedAt => order_by_direction!(query, direction, photos::created_at),
        PhotoSortField::UpdatedAt => order_by_direction!(query, direction, photos::updated_at),
    };
    query.then_order_by(photos::photo_id.asc())
}

#[async_trait]
impl PhotoRepository for DieselPhotoRepository {
    async fn count(&self, owner: PhotoOwner) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = owned_by(photos::table.into_boxed(), owner)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        from_sql_count(total)
    }

    async fn find_page(
        &self,
        owner: PhotoOwner,
        sort: Sort<PhotoSortField>,
        window: PageWindow,
    ) -> Result<Vec<Photo>, RepositoryError> {
        let offset = to_sql_bigint(window.offset(), "offset")?;
        let limit = to_sql_bigint(window.limit(), "limit")?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PhotoRow> = ordered(owned_by(photos::table.into_boxed(), owner), sort)
            .offset(offset)
            .limit(limit)
            .select(PhotoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Photo::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, RepositoryError> {
        query_optional!(self, photos::table, photos::photo_id.eq(id), PhotoRow)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Photo>, RepositoryError> {
        query_optional!(self, photos::table, photos::url.eq(url), PhotoRow)
    }

    async fn insert(&self, draft: &PhotoDraft) -> Result<Photo, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewPhotoRow {
            title: &draft.title,
            description: draft.description.as_deref(),
            url: &draft.url,
            snapper_id: draft.snapper_id,
            user_id: draft.user_id,
        };

        diesel::insert_into(photos::table)
            .values(&row)
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Photo::from)
            .map_err(map_diesel_error)
    }

    async fn increment_views(&self, id: i64) -> Result<Option<Photo>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PhotoRow> = diesel::update(photos::table.find(id))
            .set(photos::views.eq(photos::views + 1_i64))
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Photo::from))
    }

    async fn update_details(
        &self,
        id: i64,
        details: &PhotoDetails,
    ) -> Result<Option<Photo>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = PhotoDetailsUpdate {
            title: &details.title,
            description: details.description.as_deref(),
        };

        let row: Option<PhotoRow> = diesel::update(photos::table.find(id))
            .set(&changes)
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Photo::from))
    }

    async fn delete(&self, id: i64) -> Result<Option<Photo>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PhotoRow> = diesel::delete(photos::table.find(id))
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Photo::from))
    }
}
