//! Snapper API handlers.
//!
//! ```text
//! GET  /snappers?page=0&size=10&sortBy=username
//! GET  /snappers/{id}
//! GET  /snappers/{id}/photos
//! POST /snappers {"username":"ansel-adams","email":"ansel@example.com","password":"moonrise1941"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{ApiResult, ListParams, PhotoOwner, Snapper, SnapperDraft};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::listing::ListQuery;
use crate::inbound::http::photos::PhotoPageResponse;
use crate::inbound::http::state::HttpState;

/// Snapper as returned by the API; never carries a password.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapperResponse {
    pub snapper_id: i64,
    pub username: String,
    pub email: String,
    pub biography: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Snapper> for SnapperResponse {
    fn from(snapper: Snapper) -> Self {
        Self {
            snapper_id: snapper.id,
            username: snapper.username,
            email: snapper.email,
            biography: snapper.biography,
            created_at: snapper.created_at,
            updated_at: snapper.updated_at,
        }
    }
}

/// One page of snappers.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapperPageResponse {
    pub snappers: Vec<SnapperResponse>,
    pub current_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<Page<Snapper>> for SnapperPageResponse {
    fn from(page: Page<Snapper>) -> Self {
        let page = page.map(SnapperResponse::from);
        Self {
            current_page: page.current_page(),
            total_items: page.total_items(),
            total_pages: page.total_pages(),
            snappers: page.into_items(),
        }
    }
}

/// Request body for `POST /snappers`.
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSnapperRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    #[schema(format = Password)]
    pub password: Option<String>,
    pub biography: Option<String>,
}

impl From<CreateSnapperRequest> for SnapperDraft {
    fn from(request: CreateSnapperRequest) -> Self {
        Self {
            username: request.username.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: Zeroizing::new(request.password.unwrap_or_default()),
            biography: request.biography,
        }
    }
}

/// List snappers, one page at a time.
#[utoipa::path(
    get,
    path = "/snappers",
    params(ListQuery),
    responses(
        (status = 200, description = "Snappers", body = SnapperPageResponse),
        (status = 204, description = "No snappers stored", body = ErrorResponse),
        (status = 400, description = "Invalid paging or sorting", body = ErrorResponse)
    ),
    tags = ["snappers"],
    operation_id = "listSnappers"
)]
#[get("/snappers")]
pub async fn list_snappers(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<SnapperPageResponse>> {
    let params = ListParams::from(query.into_inner());
    let page = state.snappers.list(&params).await?;
    Ok(web::Json(page.into()))
}

/// Fetch one snapper.
#[utoipa::path(
    get,
    path = "/snappers/{id}",
    params(("id" = i64, Path, description = "Snapper identity")),
    responses(
        (status = 200, description = "Snapper", body = SnapperResponse),
        (status = 404, description = "Unknown snapper", body = ErrorResponse)
    ),
    tags = ["snappers"],
    operation_id = "getSnapper"
)]
#[get("/snappers/{id:\\d+}")]
pub async fn get_snapper(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<SnapperResponse>> {
    let snapper = state.snappers.get(id.into_inner()).await?;
    Ok(web::Json(snapper.into()))
}

/// List the photos a snapper owns.
#[utoipa::path(
    get,
    path = "/snappers/{id}/photos",
    params(("id" = i64, Path, description = "Snapper identity"), ListQuery),
    responses(
        (status = 200, description = "Photos", body = PhotoPageResponse),
        (status = 204, description = "No photos stored for this snapper", body = ErrorResponse),
        (status = 404, description = "Unknown snapper", body = ErrorResponse)
    ),
    tags = ["snappers"],
    operation_id = "listSnapperPhotos"
)]
#[get("/snappers/{id:\\d+}/photos")]
pub async fn list_snapper_photos(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<PhotoPageResponse>> {
    let params = ListParams::from(query.into_inner());
    let page = state
        .photos
        .list_for_owner(PhotoOwner::Snapper(id.into_inner()), &params)
        .await?;
    Ok(web::Json(page.into()))
}

/// Register a snapper.
#[utoipa::path(
    post,
    path = "/snappers",
    request_body = CreateSnapperRequest,
    responses(
        (status = 201, description = "Snapper created", body = SnapperResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tags = ["snappers"],
    operation_id = "createSnapper"
)]
#[post("/snappers")]
pub async fn create_snapper(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSnapperRequest>,
) -> ApiResult<HttpResponse> {
    let snapper = state.snappers.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(SnapperResponse::from(snapper)))
}
