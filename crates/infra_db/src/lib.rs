//! Infrastructure Database Layer
//!
//! This crate provides persistence for the movie catalog on SQLite using SQLx.
//!
//! # Architecture
//!
//! Data access follows the repository pattern:
//!
//! - [`Repository`] is the CRUD contract, implemented once for every
//!   [`Entity`] by [`GenericRepository`].
//! - Entity-specific repositories wrap the generic one and add queries that
//!   eager-load relationships.
//! - A [`UnitOfWork`] owns one session and hands out the repositories. Writes
//!   are staged and only reach the database, atomically, on
//!   [`UnitOfWork::save`].
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, UnitOfWork};
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://movies.db")).await?;
//! run_migrations(&pool).await?;
//!
//! let mut uow = UnitOfWork::begin(&pool).await?;
//! let actors = uow.actors().get_actors_with_movies().await?;
//! ```

pub mod entity;
pub mod error;
pub mod pool;
pub mod repositories;
pub mod seed;
pub mod session;
pub mod unit_of_work;

pub use entity::{ColumnValue, Entity};
pub use error::DatabaseError;
pub use pool::{
    create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool, MIGRATOR,
};
pub use repositories::{
    ActorRepository, BiographyRepository, GenericRepository, GenreRepository, MovieRepository,
    Repository,
};
pub use seed::seed_catalog;
pub use unit_of_work::UnitOfWork;
