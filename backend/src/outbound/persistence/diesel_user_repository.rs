//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageWindow, Sort};

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{NewUser, User, UserSortField};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::{from_sql_count, order_by_direction, query_optional, to_sql_bigint};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn ordered(query: users::BoxedQuery<'_, Pg>, sort: Sort<UserSortField>) -> users::BoxedQuery<'_, Pg> {
    let direction = sort.direction();
    let query = match sort.field() {
        UserSortField::UserId => order_by_direction!(query, direction, users::user_id),
        UserSortField::Username => order_by_direction!(query, direction, users::username),
        UserSortField::Email => order_by_direction!(query, direction, users::email),
        UserSortField::CreatedAt => order_by_direction!(query, direction, users::created_at),
        UserSortField::UpdatedAt => order_by_direction!(query, direction, users::updated_at),
    };
    query.then_order_by(users::user_id.asc())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn count(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        from_sql_count(total)
    }

    async fn find_page(
        &self,
        sort: Sort<UserSortField>,
        window: PageWindow,
    ) -> Result<Vec<User>, RepositoryError> {
        let offset = to_sql_bigint(window.offset(), "offset")?;
        let limit = to_sql_bigint(window.limit(), "limit")?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = ordered(users::table.into_boxed(), sort)
            .offset(offset)
            .limit(limit)
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        query_optional!(self, users::table, users::user_id.eq(id), UserRow)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        query_optional!(self, users::table, users::username.eq(username), UserRow)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        query_optional!(self, users::table, users::email.eq(email), UserRow)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            username: &user.username,
            email: &user.email,
            password_hash: user.password_hash.as_str(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(User::from)
            .map_err(map_diesel_error)
    }
}
