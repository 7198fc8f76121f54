//! Database connection management

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::MigrateError,
    pool::PoolConnection,
    postgres::PgPoolOptions,
};

/// Error raised by the product store driver.
pub use sqlx::Error as StoreError;

/// Default number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Shared handle to the product store.
///
/// Every operation borrows a connection or transaction for its own duration;
/// dropping the guard hands the connection back to the pool, and an
/// uncommitted transaction rolls back.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acquire a connection scoped to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be obtained from the pool.
    pub async fn connection(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Begin a transaction scoped to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
