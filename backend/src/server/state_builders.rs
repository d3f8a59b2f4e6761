//! Builders for the HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use photos::domain::ports::{PhotoRepository, SnapperRepository, UserRepository};
use photos::inbound::http::state::{HttpState, HttpStatePorts};
use photos::outbound::memory::{
    MemoryPhotoRepository, MemorySnapperRepository, MemoryUserRepository,
};
use photos::outbound::persistence::{
    DbPool, DieselPhotoRepository, DieselSnapperRepository, DieselUserRepository,
};
use photos::outbound::security::Argon2Hasher;

use super::ServerConfig;

struct Repositories {
    photos: Arc<dyn PhotoRepository>,
    snappers: Arc<dyn SnapperRepository>,
    users: Arc<dyn UserRepository>,
}

fn diesel_repositories(pool: &DbPool) -> Repositories {
    Repositories {
        photos: Arc::new(DieselPhotoRepository::new(pool.clone())),
        snappers: Arc::new(DieselSnapperRepository::new(pool.clone())),
        users: Arc::new(DieselUserRepository::new(pool.clone())),
    }
}

fn memory_repositories(clock: &Arc<dyn Clock>) -> Repositories {
    Repositories {
        photos: Arc::new(MemoryPhotoRepository::new(Arc::clone(clock))),
        snappers: Arc::new(MemorySnapperRepository::new(Arc::clone(clock))),
        users: Arc::new(MemoryUserRepository::new(Arc::clone(clock))),
    }
}

/// Build handler state over PostgreSQL when a pool is configured, otherwise
/// over the in-memory repositories.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let repositories = match &config.db_pool {
        Some(pool) => diesel_repositories(pool),
        None => {
            info!("no database configured; serving from the in-memory store");
            memory_repositories(&clock)
        }
    };
    let Repositories {
        photos,
        snappers,
        users,
    } = repositories;
    web::Data::new(HttpState::from(HttpStatePorts {
        photos,
        snappers,
        users,
        hasher: Arc::new(Argon2Hasher::default()),
        clock,
    }))
}
