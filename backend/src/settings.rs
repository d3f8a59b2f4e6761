//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PHOTOS_*` environment variables and the
//! configuration file, in that order of precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Server, database and start-up settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHOTOS")]
pub struct AppSettings {
    /// Interface address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Leave the schema untouched at start-up.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse()?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "PHOTOS_HOST",
        "PHOTOS_PORT",
        "PHOTOS_DATABASE_URL",
        "PHOTOS_POOL_MAX_SIZE",
        "PHOTOS_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("photos")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(!settings.skip_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PHOTOS_HOST", Some("127.0.0.1")),
            ("PHOTOS_PORT", Some("9090")),
            ("PHOTOS_DATABASE_URL", Some("postgres://localhost/photos")),
            ("PHOTOS_POOL_MAX_SIZE", Some("4")),
            ("PHOTOS_SKIP_MIGRATIONS", Some("true")),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("address"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/photos"));
        assert_eq!(settings.pool_max_size(), 4);
        assert!(settings.skip_migrations);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([("PHOTOS_DATABASE_URL", Some("   "))]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }

    #[rstest]
    fn host_names_are_rejected() {
        let _guard = lock_env([("PHOTOS_HOST", Some("localhost"))]);

        assert!(load_from_empty_args().bind_addr().is_err());
    }
}
