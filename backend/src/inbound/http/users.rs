//! User API handlers.
//!
//! ```text
//! GET  /users
//! GET  /users/{id}
//! GET  /users/{id}/photos
//! POST /users {"username":"grace","email":"grace@example.com","password":"x"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{ApiResult, ListParams, PhotoOwner, User, UserDraft};
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::listing::ListQuery;
use crate::inbound::http::photos::PhotoPageResponse;
use crate::inbound::http::state::HttpState;

/// User as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// One page of users.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPageResponse {
    pub users: Vec<UserResponse>,
    pub current_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<Page<User>> for UserPageResponse {
    fn from(page: Page<User>) -> Self {
        let page = page.map(UserResponse::from);
        Self {
            current_page: page.current_page(),
            total_items: page.total_items(),
            total_pages: page.total_pages(),
            users: page.into_items(),
        }
    }
}

/// Request body for `POST /users`.
#[derive(Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    #[schema(format = Password)]
    pub password: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: Zeroizing::new(request.password.unwrap_or_default()),
        }
    }
}

/// List users, one page at a time.
#[utoipa::path(
    get,
    path = "/users",
    params(ListQuery),
    responses(
        (status = 200, description = "Users", body = UserPageResponse),
        (status = 204, description = "No users stored", body = ErrorResponse),
        (status = 400, description = "Invalid paging or sorting", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<UserPageResponse>> {
    let params = ListParams::from(query.into_inner());
    let page = state.users.list(&params).await?;
    Ok(web::Json(page.into()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identity")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id:\\d+}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.get(id.into_inner()).await?;
    Ok(web::Json(user.into()))
}

/// List the photos a user owns.
#[utoipa::path(
    get,
    path = "/users/{id}/photos",
    params(("id" = i64, Path, description = "User identity"), ListQuery),
    responses(
        (status = 200, description = "Photos", body = PhotoPageResponse),
        (status = 204, description = "No photos stored for this user", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUserPhotos"
)]
#[get("/users/{id:\\d+}/photos")]
pub async fn list_user_photos(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<PhotoPageResponse>> {
    let params = ListParams::from(query.into_inner());
    let page = state
        .photos
        .list_for_owner(PhotoOwner::User(id.into_inner()), &params)
        .await?;
    Ok(web::Json(page.into()))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
