//! PostgreSQL-backed `SnapperRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageWindow, Sort};

use crate::domain::ports::{RepositoryError, SnapperRepository};
use crate::domain::{NewSnapper, Snapper, SnapperSortField};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::{from_sql_count, order_by_direction, query_optional, to_sql_bigint};
use super::models::{NewSnapperRow, SnapperRow};
use super::pool::DbPool;
use super::schema::snappers;

/// Diesel-backed implementation of the snapper repository port.
#[derive(Clone)]
pub struct DieselSnapperRepository {
    pool: DbPool,
}

impl DieselSnapperRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn ordered(
    query: snappers::BoxedQuery<'_, Pg>,
    sort: Sort<SnapperSortField>,
) -> snappers::BoxedQuery<'_, Pg> {
    let direction = sort.direction();
    let query = match sort.field() {
        SnapperSortField::SnapperId => order_by_direction!(query, direction, snappers::snapper_id),
        SnapperSortField::Username => order_by_direction!(query, direction, snappers::username),
        SnapperSortField::Email => order_by_direction!(query, direction, snappers::email),
        SnapperSortField::Biography => order_by_direction!(query, direction, snappers::biography),
        SnapperSortField::CreatedAt => order_by_direction!(query, direction, snappers::created_at),
        SnapperSortField::UpdatedAt => order_by_direction!(query, direction, snappers::updated_at),
    };
    query.then_order_by(snappers::snapper_id.asc())
}

#[async_trait]
impl SnapperRepository for DieselSnapperRepository {
    async fn count(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = snappers::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        from_sql_count(total)
    }

    async fn find_page(
        &self,
        sort: Sort<SnapperSortField>,
        window: PageWindow,
    ) -> Result<Vec<Snapper>, RepositoryError> {
        let offset = to_sql_bigint(window.offset(), "offset")?;
        let limit = to_sql_bigint(window.limit(), "limit")?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<SnapperRow> = ordered(snappers::table.into_boxed(), sort)
            .offset(offset)
            .limit(limit)
            .select(SnapperRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Snapper::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Snapper>, RepositoryError> {
        query_optional!(self, snappers::table, snappers::snapper_id.eq(id), SnapperRow)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Snapper>, RepositoryError> {
        query_optional!(self, snappers::table, snappers::username.eq(username), SnapperRow)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Snapper>, RepositoryError> {
        query_optional!(self, snappers::table, snappers::email.eq(email), SnapperRow)
    }

    async fn insert(&self, snapper: &NewSnapper) -> Result<Snapper, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewSnapperRow {
            username: &snapper.username,
            email: &snapper.email,
            password_hash: snapper.password_hash.as_str(),
            biography: snapper.biography.as_deref(),
        };

        diesel::insert_into(snappers::table)
            .values(&row)
            .returning(SnapperRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Snapper::from)
            .map_err(map_diesel_error)
    }
}
