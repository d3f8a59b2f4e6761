//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every photo, snapper, user and health endpoint
//! together with the request and response bodies they exchange. The document
//! backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::{DetailedError, ErrorResponse};
use crate::inbound::http::photos::{
    CreatePhotoRequest, DeleteStatus, DeletedPhotoResponse, PhotoPageResponse, PhotoResponse,
    UpdatePhotoRequest,
};
use crate::inbound::http::snappers::{
    CreateSnapperRequest, SnapperPageResponse, SnapperResponse,
};
use crate::inbound::http::users::{CreateUserRequest, UserPageResponse, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Photos API",
        description = "Photo sharing backend: photos, the snappers who take them, and users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::photos::list_photos,
        crate::inbound::http::photos::get_photo,
        crate::inbound::http::photos::create_photo,
        crate::inbound::http::photos::update_photo,
        crate::inbound::http::photos::delete_photo,
        crate::inbound::http::snappers::list_snappers,
        crate::inbound::http::snappers::get_snapper,
        crate::inbound::http::snappers::list_snapper_photos,
        crate::inbound::http::snappers::create_snapper,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_user_photos,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorResponse,
        DetailedError,
        PhotoResponse,
        PhotoPageResponse,
        CreatePhotoRequest,
        UpdatePhotoRequest,
        DeletedPhotoResponse,
        DeleteStatus,
        SnapperResponse,
        SnapperPageResponse,
        CreateSnapperRequest,
        UserResponse,
        UserPageResponse,
        CreateUserRequest,
    )),
    tags(
        (name = "photos", description = "Photo catalogue"),
        (name = "snappers", description = "Photographer accounts"),
        (name = "users", description = "Plain user accounts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(schema_name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(schema_name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            other => panic!(
                "expected object schema for {schema_name}, registered: {}",
                other.is_some()
            ),
        }
    }

    #[rstest]
    #[case("ErrorResponse", &["timestamp", "httpStatus", "httpStatusCode", "message", "detailedErrors"])]
    #[case("PhotoResponse", &["photoId", "title", "url", "views"])]
    #[case("DeletedPhotoResponse", &["timestamp", "photo", "status"])]
    #[case("PhotoPageResponse", &["photos", "currentPage", "totalItems", "totalPages"])]
    fn schemas_expose_wire_names(#[case] schema: &str, #[case] fields: &[&str]) {
        let present = object_fields(schema);
        for field in fields {
            assert!(present.iter().any(|name| name == field), "{schema}.{field}");
        }
    }

    #[rstest]
    #[case("SnapperResponse")]
    #[case("UserResponse")]
    fn account_responses_carry_no_password(#[case] schema: &str) {
        let fields = object_fields(schema);
        assert!(fields.iter().all(|name| !name.contains("password")));
    }

    #[test]
    fn item_paths_use_plain_parameter_names() {
        let doc = ApiDoc::openapi();
        for path in ["/photos/{id}", "/snappers/{id}/photos", "/users/{id}/photos"] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
