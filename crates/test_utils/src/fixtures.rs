//! Pre-built Test Fixtures
//!
//! The seeded catalog, mirrored here so tests can state expectations without
//! reading them back from the database, plus the extra actors used by write
//! tests.

use domain_catalog::{Actor, Biography, Movie};
use infra_db::seed::{seed_actors, seed_biographies, seed_movies};

/// Fixture for the seeded catalog
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Number of seeded actors
    pub const ACTOR_COUNT: usize = 3;
    /// Number of seeded movies
    pub const MOVIE_COUNT: usize = 4;

    /// Seeded actors, relationships unloaded
    pub fn actors() -> Vec<Actor> {
        seed_actors()
    }

    /// Seeded movies
    pub fn movies() -> Vec<Movie> {
        seed_movies()
    }

    /// Seeded biographies
    pub fn biographies() -> Vec<Biography> {
        seed_biographies()
    }

    /// Chuck Norris, id 1, owner of movies 1 and 3 and the only biography
    pub fn chuck_norris() -> Actor {
        Actor::new(
            "Chuck",
            "Norris",
            "Did not actually walk on the moon without a spacesuit",
        )
        .with_id(1)
    }

    /// Ana DeArmas, id 3, owner of movie 4
    pub fn ana_de_armas() -> Actor {
        Actor::new("Ana", "DeArmas", "Is not answering my calls").with_id(3)
    }
}

/// Fixture for actors that are not in the seed
pub struct NewActorFixtures;

impl NewActorFixtures {
    /// Harrison Ford with the id the store will assign next
    pub fn harrison_ford() -> Actor {
        Actor::new("Harrison", "Ford", "Dies to Kylo Ren").with_id(4)
    }

    /// Margo Robbie with the id after Harrison Ford's
    pub fn margo_robbie() -> Actor {
        Actor::new(
            "Margo",
            "Robbie",
            "Was in the really bad version of the Expendables",
        )
        .with_id(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_actor_matches_seed() {
        assert_eq!(CatalogFixtures::actors()[0], CatalogFixtures::chuck_norris());
        assert_eq!(CatalogFixtures::actors()[2], CatalogFixtures::ana_de_armas());
        assert_eq!(CatalogFixtures::actors().len(), CatalogFixtures::ACTOR_COUNT);
        assert_eq!(CatalogFixtures::movies().len(), CatalogFixtures::MOVIE_COUNT);
    }
}
