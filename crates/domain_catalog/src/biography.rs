//! Biography entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An actor's biography
///
/// Each actor has at most one; `actor_id` is unique across biographies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Biography {
    pub id: i64,
    pub description: String,
    pub actor_id: i64,
}

impl Biography {
    /// Creates an unsaved biography for `actor_id`
    pub fn new(description: impl Into<String>, actor_id: i64) -> Self {
        Self {
            id: 0,
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
