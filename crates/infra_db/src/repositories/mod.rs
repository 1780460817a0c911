//! Repository implementations
//!
//! `GenericRepository` carries the CRUD behavior for every entity. The
//! entity-specific repositories wrap it, forward the `Repository` contract to
//! it, and add the queries that eager-load relationships.

/// Implements `Repository<$entity>` for a wrapper with an `inner` generic repository
macro_rules! delegate_repository {
    ($repo:ident, $entity:ty) => {
        #[async_trait::async_trait]
        impl<'s> $crate::repositories::Repository<$entity> for $repo<'s> {
            async fn get_all(&mut self) -> Result<Vec<$entity>, $crate::error::DatabaseError> {
                $crate::repositories::Repository::get_all(&mut self.inner).await
            }

            async fn get_by_id(
                &mut self,
                id: i64,
            ) -> Result<Option<$entity>, $crate::error::DatabaseError> {
                $crate::repositories::Repository::get_by_id(&mut self.inner, id).await
            }

            async fn find<P>(
                &mut self,
                predicate: P,
            ) -> Result<Vec<$entity>, $crate::error::DatabaseError>
            where
                P: Fn(&$entity) -> bool + Send,
            {
                $crate::repositories::Repository::find(&mut self.inner, predicate).await
            }

            fn add(&mut self, entity: $entity) {
                $crate::repositories::Repository::add(&mut self.inner, entity)
            }

            fn add_range<I>(&mut self, entities: I)
            where
                I: IntoIterator<Item = $entity>,
            {
                $crate::repositories::Repository::add_range(&mut self.inner, entities)
            }

            fn update(&mut self, entity: $entity) {
                $crate::repositories::Repository::update(&mut self.inner, entity)
            }

            fn remove(&mut self, entity: $entity) {
                $crate::repositories::Repository::remove(&mut self.inner, entity)
            }

            fn remove_range<I>(&mut self, entities: I)
            where
                I: IntoIterator<Item = $entity>,
            {
                $crate::repositories::Repository::remove_range(&mut self.inner, entities)
            }
        }
    };
}

mod actor;
mod biography;
mod generic;
mod genre;
mod movie;
mod relations;

pub use actor::ActorRepository;
pub use biography::BiographyRepository;
pub use generic::{GenericRepository, Repository};
pub use genre::GenreRepository;
pub use movie::MovieRepository;
