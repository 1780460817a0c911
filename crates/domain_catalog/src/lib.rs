//! Movie Catalog Domain
//!
//! This crate defines the entities of the movie catalog: actors, the movies
//! they appear in, genres, and actor biographies.
//!
//! # Relationship Model
//!
//! - An **Actor** owns many movies and at most one biography
//! - A **Movie** belongs to exactly one actor and to any number of genres
//! - A **Genre** groups any number of movies
//! - A **Biography** belongs to exactly one actor
//!
//! Relationship fields (`Actor::movies`, `Actor::biography`, `Genre::movies`)
//! are never read from the entity's own row. They stay `None` unless a query
//! explicitly loads them, so `None` means "not loaded" rather than "empty".
//!
//! # Example
//!
//! ```rust
//! use domain_catalog::{Actor, Movie};
//!
//! let actor = Actor::new("Chuck", "Norris", "Did not actually walk on the moon");
//! assert_eq!(actor.full_name(), "Chuck Norris");
//! assert!(actor.movies.is_none());
//!
//! let movie = Movie::new("The Matrix", "which pill?", 1);
//! assert_eq!(movie.actor_id, 1);
//! ```

pub mod actor;
pub mod movie;
pub mod genre;
pub mod biography;

pub use actor::Actor;
pub use movie::Movie;
pub use genre::Genre;
pub use biography::Biography;
