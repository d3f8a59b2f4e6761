//! Photo API handlers.
//!
//! ```text
//! GET    /photos?page=0&size=10&sortBy=views&sortOrder=desc
//! GET    /photos/{id}
//! POST   /photos {"title":"Sunset","url":"https://x.test/a.jpg"}
//! PUT    /photos/{id} {"title":"Dusk","description":"Later that evening"}
//! DELETE /photos/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, DeletedPhoto, ListParams, Photo, PhotoDetails, PhotoDraft};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::listing::ListQuery;
use crate::inbound::http::state::HttpState;

/// Photo as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub photo_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub views: i64,
    pub snapper_id: Option<i64>,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            photo_id: photo.id,
            title: photo.title,
            description: photo.description,
            url: photo.url,
            views: photo.views,
            snapper_id: photo.snapper_id,
            user_id: photo.user_id,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

/// One page of photos.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPageResponse {
    pub photos: Vec<PhotoResponse>,
    pub current_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<Page<Photo>> for PhotoPageResponse {
    fn from(page: Page<Photo>) -> Self {
        let page = page.map(PhotoResponse::from);
        Self {
            current_page: page.current_page(),
            total_items: page.total_items(),
            total_pages: page.total_pages(),
            photos: page.into_items(),
        }
    }
}

/// Request body for `POST /photos`. Identity, views and timestamps are
/// assigned by the server and ignored if sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePhotoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub snapper_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl From<CreatePhotoRequest> for PhotoDraft {
    fn from(request: CreatePhotoRequest) -> Self {
        Self {
            title: request.title.unwrap_or_default(),
            description: request.description,
            url: request.url.unwrap_or_default(),
            snapper_id: request.snapper_id,
            user_id: request.user_id,
        }
    }
}

/// Request body for `PUT /photos/{id}`; only these fields can change.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePhotoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<UpdatePhotoRequest> for PhotoDetails {
    fn from(request: UpdatePhotoRequest) -> Self {
        Self {
            title: request.title.unwrap_or_default(),
            description: request.description,
        }
    }
}

/// Deletion flag inside [`DeletedPhotoResponse`].
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteStatus {
    pub deleted: bool,
}

/// Confirmation returned by `DELETE /photos/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedPhotoResponse {
    pub timestamp: DateTime<Utc>,
    pub photo: PhotoResponse,
    pub status: DeleteStatus,
}

impl From<DeletedPhoto> for DeletedPhotoResponse {
    fn from(deleted: DeletedPhoto) -> Self {
        Self {
            timestamp: deleted.timestamp,
            photo: deleted.photo.into(),
            status: DeleteStatus { deleted: true },
        }
    }
}

/// List photos, one page at a time.
#[utoipa::path(
    get,
    path = "/photos",
    params(ListQuery),
    responses(
        (status = 200, description = "Photos", body = PhotoPageResponse),
        (status = 204, description = "No photos stored", body = ErrorResponse),
        (status = 400, description = "Invalid paging or sorting", body = ErrorResponse)
    ),
    tags = ["photos"],
    operation_id = "listPhotos"
)]
#[get("/photos")]
pub async fn list_photos(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<PhotoPageResponse>> {
    let params = ListParams::from(query.into_inner());
    let page = state.photos.list(&params).await?;
    Ok(web::Json(page.into()))
}

/// Fetch one photo. Every successful fetch counts as a view.
#[utoipa::path(
    get,
    path = "/photos/{id}",
    params(("id" = i64, Path, description = "Photo identity")),
    responses(
        (status = 200, description = "Photo", body = PhotoResponse),
        (status = 404, description = "Unknown photo", body = ErrorResponse)
    ),
    tags = ["photos"],
    operation_id = "getPhoto"
)]
#[get("/photos/{id:\\d+}")]
pub async fn get_photo(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<PhotoResponse>> {
    let photo = state.photos.view(id.into_inner()).await?;
    Ok(web::Json(photo.into()))
}

/// Store a new photo.
#[utoipa::path(
    post,
    path = "/photos",
    request_body = CreatePhotoRequest,
    responses(
        (status = 201, description = "Photo created", body = PhotoResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tags = ["photos"],
    operation_id = "createPhoto"
)]
#[post("/photos")]
pub async fn create_photo(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePhotoRequest>,
) -> ApiResult<HttpResponse> {
    let photo = state.photos.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(PhotoResponse::from(photo)))
}

/// Replace a photo's title and description.
#[utoipa::path(
    put,
    path = "/photos/{id}",
    params(("id" = i64, Path, description = "Photo identity")),
    request_body = UpdatePhotoRequest,
    responses(
        (status = 200, description = "Photo updated", body = PhotoResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Unknown photo", body = ErrorResponse)
    ),
    tags = ["photos"],
    operation_id = "updatePhoto"
)]
#[put("/photos/{id:\\d+}")]
pub async fn update_photo(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<UpdatePhotoRequest>,
) -> ApiResult<web::Json<PhotoResponse>> {
    let photo = state
        .photos
        .update(id.into_inner(), payload.into_inner().into())
        .await?;
    Ok(web::Json(photo.into()))
}

/// Remove a photo.
#[utoipa::path(
    delete,
    path = "/photos/{id}",
    params(("id" = i64, Path, description = "Photo identity")),
    responses(
        (status = 200, description = "Photo deleted", body = DeletedPhotoResponse),
        (status = 404, description = "Unknown photo", body = ErrorResponse)
    ),
    tags = ["photos"],
    operation_id = "deletePhoto"
)]
#[delete("/photos/{id:\\d+}")]
pub async fn delete_photo(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<DeletedPhotoResponse>> {
    let deleted = state.photos.delete(id.into_inner()).await?;
    Ok(web::Json(deleted.into()))
}

#[cfg(test)]
#[path = "photos_tests.rs"]
mod tests;
