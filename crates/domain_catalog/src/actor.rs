//! Actor entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::biography::Biography;
use crate::movie::Movie;

/// An actor in the catalog
///
/// Owns zero or more movies and at most one biography. Deleting an actor
/// deletes both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Actor {
    /// Store-assigned identity; `0` until the actor has been saved
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Private notes that are never exposed through the public actor view
    pub sensitive_information: String,
    /// Movies owned by this actor, when loaded
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<Movie>>,
    /// The actor's biography, when loaded
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<Biography>,
}

impl Actor {
    /// Creates an unsaved actor
    ///
    /// # Arguments
    ///
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `sensitive_information` - Private notes about the actor
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        sensitive_information: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            sensitive_information: sensitive_information.into(),
            movies: None,
            biography: None,
        }
    }

    /// Sets an explicit identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Returns "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns a copy of the actor's own columns, without loaded relations
    pub fn without_relations(&self) -> Self {
        Self {
            movies: None,
            biography: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_actor_is_unsaved_and_unloaded() {
        let actor = Actor::new("Ryan", "Gosling", "Actually has a girlfriend");

        assert_eq!(actor.id, 0);
        assert!(actor.movies.is_none());
        assert!(actor.biography.is_none());
    }

    #[test]
    fn test_without_relations_strips_loaded_data() {
        let mut actor = Actor::new("Chuck", "Norris", "").with_id(1);
        actor.movies = Some(vec![Movie::new("The Matrix", "which pill?", 1)]);

        let bare = actor.without_relations();
        assert_eq!(bare.id, 1);
        assert!(bare.movies.is_none());
    }
}
