//! Unit of work
//!
//! A `UnitOfWork` owns one [`Session`] and hands out repository views over it.
//! Every view stages into the same change tracker, so a single `save` commits
//! changes made through any of them atomically.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalog::Actor;
//! use infra_db::{Repository, UnitOfWork};
//!
//! let mut uow = UnitOfWork::begin(&pool).await?;
//! uow.actors().add(Actor::new("Harrison", "Ford", "Dies to Kylo Ren"));
//! uow.save().await?;
//! let id = uow.last_inserted_id::<Actor>();
//! uow.dispose();
//! ```

use tracing::{debug, error, info, instrument};

use crate::entity::Entity;
use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::{
    ActorRepository, BiographyRepository, GenreRepository, MovieRepository,
};
use crate::session::Session;

/// Scope of one logical operation against the catalog
///
/// Dropping a unit of work releases its connection and discards anything not
/// yet saved.
pub struct UnitOfWork {
    session: Session,
}

impl UnitOfWork {
    /// Opens a unit of work on a connection taken from `pool`
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::PoolExhausted` if no connection frees up in time
    pub async fn begin(pool: &DatabasePool) -> Result<Self, DatabaseError> {
        let session = Session::open(pool).await?;
        debug!("Unit of work started");
        Ok(Self { session })
    }

    pub fn actors(&mut self) -> ActorRepository<'_> {
        ActorRepository::new(&mut self.session)
    }

    pub fn movies(&mut self) -> MovieRepository<'_> {
        MovieRepository::new(&mut self.session)
    }

    pub fn genres(&mut self) -> GenreRepository<'_> {
        GenreRepository::new(&mut self.session)
    }

    pub fn biographies(&mut self) -> BiographyRepository<'_> {
        BiographyRepository::new(&mut self.session)
    }

    /// Commits every staged change in one transaction
    ///
    /// Returns the number of rows written. When any change fails, nothing is
    /// written and the staged changes stay pending.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::NotFound` if an update or delete targets a missing row
    /// - `DatabaseError::ForeignKeyViolation` if a row references a missing parent
    /// - `DatabaseError::DuplicateEntry` if an insert reuses an existing key
    #[instrument(skip(self), fields(pending = self.session.tracker().len()))]
    pub async fn save(&mut self) -> Result<u64, DatabaseError> {
        match self.session.flush().await {
            Ok(written) => {
                info!(rows_affected = written, "Saved unit of work");
                Ok(written)
            }
            Err(e) => {
                error!(error = %e, "Failed to save unit of work");
                Err(e)
            }
        }
    }

    /// True when there are staged changes not yet saved
    pub fn has_changes(&self) -> bool {
        !self.session.tracker().is_empty()
    }

    pub fn pending_changes(&self) -> usize {
        self.session.tracker().len()
    }

    /// Drops every staged change without touching the store
    pub fn discard_changes(&mut self) -> usize {
        let discarded = self.session.discard();
        if discarded > 0 {
            debug!(discarded, "Discarded staged changes");
        }
        discarded
    }

    /// Id assigned to the most recent `E` inserted by the last successful save
    pub fn last_inserted_id<E: Entity>(&self) -> Option<i64> {
        self.session
            .inserted()
            .iter()
            .rev()
            .find(|key| key.table == E::TABLE)
            .map(|key| key.id)
    }

    /// Ids assigned to every `E` inserted by the last successful save, in staging order
    pub fn inserted_ids<E: Entity>(&self) -> Vec<i64> {
        self.session
            .inserted()
            .iter()
            .filter(|key| key.table == E::TABLE)
            .map(|key| key.id)
            .collect()
    }

    /// Ends the unit of work and returns its connection to the pool
    pub fn dispose(self) {
        debug!(
            unsaved = self.session.tracker().len(),
            "Unit of work disposed"
        );
    }
}
