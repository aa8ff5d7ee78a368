//! Helpers for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use inventory_api::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

static NEXT_DB_ID: AtomicUsize = AtomicUsize::new(0);

/// Temporary sqlite database used in integration tests, removed on drop.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    /// Creates a fresh database under the system temp directory. `name`
    /// keeps the file recognizable; process id and a counter keep parallel
    /// test runs apart.
    pub fn new(name: &str) -> Self {
        let id = NEXT_DB_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("{name}-{}-{id}.db", std::process::id()));

        let database_url = path.to_str().expect("temp path should be valid utf-8");
        let pool = establish_connection_pool(database_url)
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { path, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}
