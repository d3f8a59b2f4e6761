//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Repositories are the only way the domain reaches storage; services hold
//! them as `Arc<dyn Port>` so adapters can be swapped without touching the
//! use cases.

mod macros;
pub(crate) use macros::define_port_error;

mod password_hasher;
mod photo_repository;
mod repository_error;
mod snapper_repository;
mod user_repository;

#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHash, PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use photo_repository::MockPhotoRepository;
pub use photo_repository::PhotoRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use snapper_repository::MockSnapperRepository;
pub use snapper_repository::SnapperRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
