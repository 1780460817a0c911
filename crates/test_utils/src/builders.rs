//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Ids default to 0 so the store assigns them on save.

use domain_catalog::{Actor, Genre, Movie};

/// Builder for constructing test actors
pub struct TestActorBuilder {
    id: i64,
    first_name: String,
    last_name: String,
    sensitive_information: String,
}

impl Default for TestActorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestActorBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: 0,
            first_name: "Keanu".to_string(),
            last_name: "Reeves".to_string(),
            sensitive_information: "Has a secret".to_string(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets both name parts
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_sensitive_information(mut self, info: impl Into<String>) -> Self {
        self.sensitive_information = info.into();
        self
    }

    /// Builds the actor
    pub fn build(self) -> Actor {
        Actor::new(self.first_name, self.last_name, self.sensitive_information).with_id(self.id)
    }
}

/// Builder for constructing test movies
pub struct TestMovieBuilder {
    id: i64,
    name: String,
    description: String,
    actor_id: i64,
}

impl TestMovieBuilder {
    /// Creates a builder for a movie starring `actor_id`
    pub fn new(actor_id: i64) -> Self {
        Self {
            id: 0,
            name: "John Wick".to_string(),
            description: "It was his dog".to_string(),
            actor_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds the movie
    pub fn build(self) -> Movie {
        Movie::new(self.name, self.description, self.actor_id).with_id(self.id)
    }
}

/// Builds a genre with a store-assigned id
pub fn test_genre(name: &str) -> Genre {
    Genre::new(name)
}
