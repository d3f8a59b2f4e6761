//! Listing query parameters shared by every collection endpoint.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ListParams;

/// `?page=&size=&sortBy=&sortOrder=`; every parameter is optional.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Zero-based page index (default 0).
    pub page: Option<i64>,
    /// Items per page (default 10).
    pub size: Option<i64>,
    /// Property to sort by (default: the primary key).
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `asc`).
    pub sort_order: Option<String>,
}

impl From<ListQuery> for ListParams {
    fn from(query: ListQuery) -> Self {
        let ListQuery {
            page,
            size,
            sort_by,
            sort_order,
        } = query;
        Self {
            page,
            size,
            sort_by,
            sort_order,
        }
    }
}
