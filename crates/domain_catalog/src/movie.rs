//! Movie entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie, owned by exactly one actor
///
/// Genre membership is stored as an association and is read from the genre
/// side (`Genre::movies`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Owning actor; must reference an existing actor when saved
    pub actor_id: i64,
}

impl Movie {
    /// Creates an unsaved movie owned by `actor_id`
    pub fn new(name: impl Into<String>, description: impl Into<String>, actor_id: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            actor_id,
        }
    }

    /// Sets an explicit identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
