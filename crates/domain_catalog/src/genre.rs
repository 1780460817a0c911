//! Genre entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::movie::Movie;

/// A genre, associated with any number of movies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    /// Movies in this genre, when loaded
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<Movie>>,
}

impl Genre {
    /// Creates an unsaved genre
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            movies: None,
        }
    }

    /// Sets an explicit identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
