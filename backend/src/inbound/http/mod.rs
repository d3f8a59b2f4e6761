//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod listing;
pub mod photos;
pub mod snappers;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::{ErrorResponse, route_not_found};

/// Register the photo, snapper and user endpoints together with the
/// extractor configurations that report malformed input as domain errors.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use photos::inbound::http::{configure, route_not_found};
///
/// let app = App::new()
///     .configure(configure)
///     .default_service(web::to(route_not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .app_data(error::path_config())
        .service(photos::list_photos)
        .service(photos::get_photo)
        .service(photos::create_photo)
        .service(photos::update_photo)
        .service(photos::delete_photo)
        .service(snappers::list_snappers)
        .service(snappers::get_snapper)
        .service(snappers::list_snapper_photos)
        .service(snappers::create_snapper)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::list_user_photos)
        .service(users::create_user);
}
