//! Custom Test Assertions
//!
//! Assertion helpers for catalog entities that give more meaningful failure
//! messages than comparing whole structs.

use domain_catalog::{Actor, Movie};

/// Asserts that `actors` are exactly the given full names, in order
pub fn assert_actor_names(actors: &[Actor], expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = actors
        .iter()
        .map(|actor| (actor.first_name.as_str(), actor.last_name.as_str()))
        .collect();

    assert_eq!(actual, expected, "Actor names differ");
}

/// Asserts that every actor has its movies loaded
pub fn assert_movies_loaded(actors: &[Actor]) {
    for actor in actors {
        assert!(
            actor.movies.is_some(),
            "Movies not loaded for actor {} ({})",
            actor.id,
            actor.full_name()
        );
    }
}

/// Asserts that no actor has any relationship loaded
pub fn assert_relations_unloaded(actors: &[Actor]) {
    for actor in actors {
        assert!(
            actor.movies.is_none() && actor.biography.is_none(),
            "Relationships unexpectedly loaded for actor {} ({})",
            actor.id,
            actor.full_name()
        );
    }
}

/// Asserts that `movies` have exactly the given ids, in order
pub fn assert_movie_ids(movies: &[Movie], expected: &[i64]) {
    let actual: Vec<i64> = movies.iter().map(|movie| movie.id).collect();

    assert_eq!(actual, expected, "Movie ids differ");
}
