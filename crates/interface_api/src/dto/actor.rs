//! Actor DTOs

use serde::Serialize;

use domain_catalog::{Actor, Biography, Movie};

/// Public view of an actor
///
/// Everything but the sensitive information. Relationships appear only when
/// the query loaded them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<Movie>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<Biography>,
}

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            first_name: actor.first_name,
            last_name: actor.last_name,
            movies: actor.movies,
            biography: actor.biography,
        }
    }
}

/// Maps every actor to its public view
pub fn to_dtos(actors: Vec<Actor>) -> Vec<ActorDto> {
    actors.into_iter().map(ActorDto::from).collect()
}
