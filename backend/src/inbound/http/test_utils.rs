//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};

use super::error::route_not_found;
use super::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{MemoryPhotoRepository, MemorySnapperRepository, MemoryUserRepository};
use crate::outbound::security::Argon2Hasher;

/// Instant every fixture clock reports.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock frozen at [`fixture_timestamp`].
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        fixture_timestamp().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_timestamp()
    }
}

/// Handler state over fresh in-memory repositories and a cheap hasher.
pub fn memory_state() -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(FixtureClock);
    let hasher = Argon2Hasher::with_costs(8, 1, 1).expect("valid test hashing costs");
    web::Data::new(HttpState::from(HttpStatePorts {
        photos: Arc::new(MemoryPhotoRepository::new(Arc::clone(&clock))),
        snappers: Arc::new(MemorySnapperRepository::new(Arc::clone(&clock))),
        users: Arc::new(MemoryUserRepository::new(Arc::clone(&clock))),
        hasher: Arc::new(hasher),
        clock,
    }))
}

/// Every API route over `state`, with the routing fallback installed.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .configure(super::configure)
        .default_service(web::to(route_not_found))
}

/// Minimal valid photo payload.
pub fn photo_body(title: &str, url: &str) -> Value {
    json!({ "title": title, "url": url })
}
