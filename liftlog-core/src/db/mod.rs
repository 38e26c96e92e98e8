pub mod models;
pub mod operations;
pub mod schema;

use anyhow::{Result, anyhow};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{debug, info};
use std::time::Duration;

use crate::catalog::DEFAULT_CATALOG;
use crate::config::StoreConfig;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
struct ConnectionOptions {
    wal: bool,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        apply_pragmas(conn, self.wal).map_err(r2d2::Error::QueryError)
    }
}

fn apply_pragmas(conn: &mut SqliteConnection, wal: bool) -> diesel::QueryResult<()> {
    conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")?;
    if wal {
        conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
    }
    Ok(())
}

/// Opens the database, applies pending migrations and seeds the catalog.
///
/// Blocking; callers on an async runtime should run it on a blocking thread.
pub fn open(config: &StoreConfig) -> Result<DbPool> {
    // Fails fast on an unopenable path instead of waiting out the pool timeout.
    SqliteConnection::establish(&config.database_url).map_err(|e| {
        anyhow!(
            "Failed to open workout database at {}: {}",
            config.database_url,
            e
        )
    })?;

    let manager = ConnectionManager::<SqliteConnection>::new(config.database_url.as_str());
    let mut builder = Pool::builder()
        .max_size(config.effective_pool_size())
        .connection_timeout(CONNECTION_TIMEOUT);
    if config.is_in_memory() {
        // An in-memory database lives only as long as its one connection.
        builder = builder.idle_timeout(None).max_lifetime(None);
    }
    let pool = builder
        .connection_customizer(Box::new(ConnectionOptions {
            wal: !config.is_in_memory(),
        }))
        .build(manager)
        .map_err(|e| anyhow!("Failed to create DB pool: {}", e))?;

    let mut conn = pool.get()?;
    init_database(&mut conn)?;

    if config.seed_catalog {
        let inserted = operations::seed_catalog(&mut conn, DEFAULT_CATALOG)?;
        if inserted > 0 {
            info!("Seeded catalog with {} exercises", inserted);
        } else {
            debug!("Catalog already present, skipping seed");
        }
    }

    info!("Workout database ready at {}", config.database_url);
    Ok(pool)
}

/// Creates every table that does not exist yet.
pub fn init_database(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to apply migrations: {}", e))?;

    if applied.is_empty() {
        debug!("Schema up to date");
    }
    for version in applied {
        info!("Migration {} applied successfully", version);
    }
    Ok(())
}
