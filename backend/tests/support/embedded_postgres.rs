//! Embedded PostgreSQL databases for the Diesel adapter suites.
//!
//! A template database is migrated once per process; each test clones it
//! into a temporary database on the shared cluster. Set
//! `SKIP_TEST_CLUSTER=1` where the cluster cannot start; the suites then skip
//! instead of failing.

use std::sync::{Mutex, OnceLock};

use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use photos::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use tokio::runtime::Runtime;
use uuid::Uuid;

const TEMPLATE_NAME: &str = "photos_template";

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Pool, runtime and the database they point at. Fields drop in order, so
/// connections close before the database is removed.
pub struct DatabaseContext {
    pub pool: DbPool,
    pub runtime: Runtime,
    _database: TemporaryDatabase,
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn ensure_template(cluster: &ClusterHandle) -> Result<(), String> {
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(TEMPLATE_NAME)
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(TEMPLATE_NAME)
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(TEMPLATE_NAME);
        run_pending_migrations(&url).map_err(|err| err.to_string())?;
    }
    Ok(())
}

fn setup() -> Result<DatabaseContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster_handle().map_err(|err| format!("{err:?}"))?;
    ensure_template(cluster)?;
    let name = format!("test_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database_from_template(name.as_str(), TEMPLATE_NAME)
        .map_err(|err| format!("clone template: {err:?}"))?;

    let config = PoolConfig::new(database.url())
        .with_max_size(4)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(DatabaseContext {
        pool,
        runtime,
        _database: database,
    })
}

/// Fresh migrated database, or `None` when the cluster is unavailable and
/// skipping was requested.
///
/// # Panics
///
/// When the cluster cannot start and `SKIP_TEST_CLUSTER` is not set.
pub fn database_context() -> Option<DatabaseContext> {
    match setup() {
        Ok(context) => Some(context),
        Err(reason) if should_skip_test_cluster() => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.")
        }
    }
}
