//! Generic repository
//!
//! `Repository<E>` is the CRUD contract shared by every entity; the
//! `GenericRepository` implements it once for any `E: Entity` on top of a
//! borrowed `Session`.
//!
//! Reads run immediately against the session's connection and never load
//! relationships. Writes are only staged; nothing is visible to reads until
//! the owning unit of work saves.

use async_trait::async_trait;
use std::marker::PhantomData;

use crate::entity::Entity;
use crate::error::DatabaseError;
use crate::session::{Session, StagedChange, StagedRow};

/// CRUD contract over an entity type with an integer identity
#[async_trait]
pub trait Repository<E: Entity>: Send {
    /// Returns every row of the entity's table in id order, relationships unloaded
    async fn get_all(&mut self) -> Result<Vec<E>, DatabaseError>;

    /// Returns the row with the given id, or `None` if there is none
    async fn get_by_id(&mut self, id: i64) -> Result<Option<E>, DatabaseError>;

    /// Returns every row for which `predicate` holds
    async fn find<P>(&mut self, predicate: P) -> Result<Vec<E>, DatabaseError>
    where
        P: Fn(&E) -> bool + Send;

    /// Stages insertion of `entity`
    fn add(&mut self, entity: E);

    /// Stages insertion of every entity, in iteration order
    fn add_range<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = E>;

    /// Stages a full overwrite of the row with `entity.id`
    fn update(&mut self, entity: E);

    /// Stages deletion of the row with `entity.id`
    fn remove(&mut self, entity: E);

    /// Stages deletion of every entity, in iteration order
    fn remove_range<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = E>;
}

/// `Repository` implementation shared by all entities
pub struct GenericRepository<'s, E> {
    pub(crate) session: &'s mut Session,
    _entity: PhantomData<fn() -> E>,
}

impl<'s, E: Entity> GenericRepository<'s, E> {
    /// Creates a repository view over `session`
    pub(crate) fn new(session: &'s mut Session) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<'s, E: Entity> Repository<E> for GenericRepository<'s, E> {
    async fn get_all(&mut self) -> Result<Vec<E>, DatabaseError> {
        let sql = format!("{} ORDER BY id", E::select_sql());
        let rows = sqlx::query_as::<_, E>(&sql)
            .fetch_all(self.session.connection())
            .await?;

        Ok(rows)
    }

    async fn get_by_id(&mut self, id: i64) -> Result<Option<E>, DatabaseError> {
        let sql = format!("{} WHERE id = ?", E::select_sql());
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.session.connection())
            .await?;

        Ok(row)
    }

    async fn find<P>(&mut self, predicate: P) -> Result<Vec<E>, DatabaseError>
    where
        P: Fn(&E) -> bool + Send,
    {
        let rows = self.get_all().await?;
        Ok(rows.into_iter().filter(|row| predicate(row)).collect())
    }

    fn add(&mut self, entity: E) {
        self.session.stage(StagedChange::Insert(StagedRow::of(&entity)));
    }

    fn add_range<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = E>,
    {
        for entity in entities {
            self.add(entity);
        }
    }

    fn update(&mut self, entity: E) {
        self.session.stage(StagedChange::Update(StagedRow::of(&entity)));
    }

    fn remove(&mut self, entity: E) {
        self.session.stage(StagedChange::delete(&entity));
    }

    fn remove_range<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = E>,
    {
        for entity in entities {
            self.remove(entity);
        }
    }
}
