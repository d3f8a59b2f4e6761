//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{PasswordHasher, PhotoRepository, SnapperRepository, UserRepository};
use crate::domain::{PhotoService, SnapperService, UserService};

/// Parameter object bundling the port implementations the services need.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub photos: Arc<dyn PhotoRepository>,
    pub snappers: Arc<dyn SnapperRepository>,
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub photos: PhotoService,
    pub snappers: SnapperService,
    pub users: UserService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            photos,
            snappers,
            users,
            hasher,
            clock,
        } = ports;
        Self {
            photos: PhotoService::new(
                photos,
                Arc::clone(&snappers),
                Arc::clone(&users),
                clock,
            ),
            snappers: SnapperService::new(snappers, Arc::clone(&hasher)),
            users: UserService::new(users, hasher),
        }
    }
}
