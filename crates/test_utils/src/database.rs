//! Database Test Utilities
//!
//! Every `TestDatabase` is a private in-memory SQLite database with the schema
//! applied, so tests never share state and need no external service.
//!
//! The pool behind it holds exactly one connection. A test must dispose (or
//! drop) one `UnitOfWork` before beginning the next.

use infra_db::{
    create_pool, run_migrations, seed_catalog, DatabaseConfig, DatabaseError, DatabasePool,
    UnitOfWork,
};

/// A migrated in-memory database for one test
pub struct TestDatabase {
    pub pool: DatabasePool,
}

impl TestDatabase {
    /// Creates an empty database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created or migrations fail
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = create_pool(DatabaseConfig::in_memory()).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Creates a database holding the seed catalog
    ///
    /// Three actors, four movies, and one biography; see
    /// [`crate::fixtures::CatalogFixtures`].
    pub async fn seeded() -> Result<Self, DatabaseError> {
        let db = Self::new().await?;
        seed_catalog(&db.pool).await?;
        Ok(db)
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Begins a unit of work on this database
    pub async fn unit_of_work(&self) -> Result<UnitOfWork, DatabaseError> {
        UnitOfWork::begin(&self.pool).await
    }

    /// Counts the rows of `table` directly, bypassing the repositories
    pub async fn count_rows(&self, table: &str) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
