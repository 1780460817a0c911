//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating catalog entities. Generated
//! entities always carry id 0 so the store assigns the key.

use domain_catalog::{Actor, Movie};
use proptest::prelude::*;

/// Strategy for a capitalized name part, e.g. "Keanu"
pub fn name_part_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,15}"
}

/// Strategy for free text, including quotes and non-ASCII letters
pub fn free_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 '\"?!.,éüß-]{0,80}"
}

/// Strategy for actors without an assigned id
pub fn actor_strategy() -> impl Strategy<Value = Actor> {
    (name_part_strategy(), name_part_strategy(), free_text_strategy())
        .prop_map(|(first, last, info)| Actor::new(first, last, info))
}

/// Strategy for movies of the given actor without an assigned id
pub fn movie_strategy(actor_id: i64) -> impl Strategy<Value = Movie> {
    (name_part_strategy(), free_text_strategy())
        .prop_map(move |(name, description)| Movie::new(name, description, actor_id))
}
