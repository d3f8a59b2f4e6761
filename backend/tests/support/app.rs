//! Full application over in-memory repositories for integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use mockable::{Clock, DefaultClock};
use photos::Trace;
use photos::inbound::http::state::{HttpState, HttpStatePorts};
use photos::inbound::http::{configure, route_not_found};
use photos::outbound::memory::{
    MemoryPhotoRepository, MemorySnapperRepository, MemoryUserRepository,
};
use photos::outbound::security::Argon2Hasher;
use serde_json::Value;

/// Initialised service with every endpoint, the trace middleware and the
/// routing fallback.
pub async fn init_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let hasher = Argon2Hasher::with_costs(8, 1, 1).expect("valid test hashing costs");
    let state = web::Data::new(HttpState::from(HttpStatePorts {
        photos: Arc::new(MemoryPhotoRepository::new(Arc::clone(&clock))),
        snappers: Arc::new(MemorySnapperRepository::new(Arc::clone(&clock))),
        users: Arc::new(MemoryUserRepository::new(Arc::clone(&clock))),
        hasher: Arc::new(hasher),
        clock,
    }));
    test::init_service(
        App::new()
            .app_data(state)
            .wrap(Trace)
            .configure(configure)
            .default_service(web::to(route_not_found)),
    )
    .await
}

/// Status and JSON body of one request; `Value::Null` when the body is empty.
pub async fn send(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    request: Request,
) -> (u16, Value) {
    let response = test::call_service(app, request).await;
    let status = response.status().as_u16();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}
