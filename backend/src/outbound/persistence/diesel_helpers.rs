//! Shared helpers and macros for the Diesel repositories.

use crate::domain::ports::RepositoryError;

/// Fetch at most one row matching `$filter` and convert it into its entity.
///
/// Acquires a connection, runs the query, maps errors, converts the row.
macro_rules! query_optional {
    ($self:ident, $table:expr, $filter:expr, $row_type:ty) => {{
        use diesel::prelude::*;
        use diesel_async::RunQueryDsl;
        use $crate::outbound::persistence::diesel_basic_error_mapping::{
            map_diesel_error, map_pool_error,
        };

        let mut conn = $self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<$row_type> = $table
            .filter($filter)
            .select(<$row_type>::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }};
}

/// Order a boxed query by `$column` in `$direction`.
///
/// PostgreSQL puts `NULL` last for ascending and first for descending order.
macro_rules! order_by_direction {
    ($query:expr, $direction:expr, $column:expr) => {
        match $direction {
            pagination::SortDirection::Ascending => $query.order_by($column.asc()),
            pagination::SortDirection::Descending => $query.order_by($column.desc()),
        }
    };
}

pub(crate) use order_by_direction;
pub(crate) use query_optional;

/// Offsets and limits travel as `u64` in the domain and `BIGINT` in SQL.
pub(crate) fn to_sql_bigint(value: u64, what: &str) -> Result<i64, RepositoryError> {
    i64::try_from(value).map_err(|_| RepositoryError::query(format!("{what} exceeds i64 range")))
}

pub(crate) fn from_sql_count(value: i64) -> Result<u64, RepositoryError> {
    u64::try_from(value).map_err(|_| RepositoryError::query("negative row count"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(0))]
    #[case(20, Some(20))]
    #[case(u64::MAX, None)]
    fn bigint_conversion(#[case] value: u64, #[case] expected: Option<i64>) {
        assert_eq!(to_sql_bigint(value, "offset").ok(), expected);
    }

    #[rstest]
    fn negative_count_is_rejected() {
        assert_eq!(
            from_sql_count(-1),
            Err(RepositoryError::query("negative row count"))
        );
        assert_eq!(from_sql_count(7), Ok(7));
    }
}
