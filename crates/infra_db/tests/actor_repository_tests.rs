//! Actor repository tests against the seeded in-memory catalog

use domain_catalog::Actor;
use infra_db::{DatabaseError, Repository};
use test_utils::{
    assert_actor_names, assert_movie_ids, assert_movies_loaded, assert_relations_unloaded,
    CatalogFixtures, NewActorFixtures, TestActorBuilder, TestDatabase,
};

/// More rows than SQLite allows bound variables in one statement (32766)
const LARGE_CATALOG: usize = 33_000;

#[tokio::test]
async fn get_all_returns_seeded_actors() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_all().await?;

    assert!(!actors.is_empty());
    assert_actor_names(
        &actors,
        &[("Chuck", "Norris"), ("Ryan", "Gosling"), ("Ana", "DeArmas")],
    );
    Ok(())
}

#[tokio::test]
async fn get_all_does_not_load_relationships() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_all().await?;

    assert_relations_unloaded(&actors);
    Ok(())
}

#[tokio::test]
async fn get_actors_with_movies_loads_every_actor() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;
    uow.actors().add(NewActorFixtures::harrison_ford());
    uow.save().await?;

    let actors = uow.actors().get_actors_with_movies().await?;

    assert_eq!(actors.len(), 4);
    assert_movies_loaded(&actors);
    assert_movie_ids(actors[0].movies.as_deref().unwrap_or_default(), &[1, 3]);
    assert_movie_ids(actors[1].movies.as_deref().unwrap_or_default(), &[2]);
    assert_eq!(actors[3].movies, Some(vec![]));
    Ok(())
}

#[tokio::test]
async fn get_actors_by_full_name_finds_match_with_movies() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_actors_by_full_name("Chuck", "Norris").await?;

    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].id, 1);
    assert_movie_ids(actors[0].movies.as_deref().unwrap_or_default(), &[1, 3]);
    Ok(())
}

#[tokio::test]
async fn get_actors_by_full_name_without_match_is_empty() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_actors_by_full_name("Chuck", "Yaeger").await?;

    assert!(actors.is_empty());
    Ok(())
}

#[tokio::test]
async fn get_actors_by_full_name_is_case_sensitive() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_actors_by_full_name("chuck", "norris").await?;

    assert!(actors.is_empty());
    Ok(())
}

#[tokio::test]
async fn get_actors_by_full_name_requires_whole_names() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    for (first, last) in [("Chuck", "Norr"), ("Chuc", "Norris"), ("Chuck ", "Norris")] {
        let actors = uow.actors().get_actors_by_full_name(first, last).await?;
        assert!(actors.is_empty(), "{first:?} {last:?} should not match");
    }
    Ok(())
}

#[tokio::test]
async fn get_actors_by_full_name_loads_only_matching_movies() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;
    uow.actors()
        .add(TestActorBuilder::new().with_name("Ryan", "Gosling").build());
    uow.save().await?;

    let actors = uow.actors().get_actors_by_full_name("Ryan", "Gosling").await?;

    assert_eq!(actors.len(), 2);
    assert_movie_ids(actors[0].movies.as_deref().unwrap_or_default(), &[2]);
    assert_eq!(actors[1].movies, Some(vec![]));
    Ok(())
}

#[tokio::test]
async fn eager_loading_handles_large_catalog() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;
    uow.actors()
        .add_range((0..LARGE_CATALOG).map(|_| TestActorBuilder::new().build()));
    uow.save().await?;

    let expected = CatalogFixtures::ACTOR_COUNT + LARGE_CATALOG;

    let with_movies = uow.actors().get_actors_with_movies().await?;
    assert_eq!(with_movies.len(), expected);
    assert_movie_ids(with_movies[0].movies.as_deref().unwrap_or_default(), &[1, 3]);
    assert_eq!(with_movies[expected - 1].movies, Some(vec![]));

    let with_biography = uow.actors().get_actors_with_biography().await?;
    assert_eq!(with_biography.len(), expected);
    assert!(with_biography[0].biography.is_some());
    assert!(with_biography[expected - 1].biography.is_none());
    Ok(())
}

#[tokio::test]
async fn get_actors_with_biography_loads_existing_biographies() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_actors_with_biography().await?;

    assert_eq!(actors.len(), CatalogFixtures::ACTOR_COUNT);
    let biography = actors[0].biography.as_ref().map(|b| b.description.as_str());
    assert_eq!(biography, Some("Early internet meme."));
    assert!(actors[1].biography.is_none());
    assert!(actors.iter().all(|actor| actor.movies.is_none()));
    Ok(())
}

#[tokio::test]
async fn get_by_id_returns_seeded_actor() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actor = uow.actors().get_by_id(1).await?;

    assert_eq!(actor, Some(CatalogFixtures::chuck_norris()));
    Ok(())
}

#[tokio::test]
async fn get_by_id_with_unknown_id_is_none() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    assert_eq!(uow.actors().get_by_id(-1).await?, None);
    assert_eq!(uow.actors().get_by_id(999).await?, None);
    Ok(())
}

#[tokio::test]
async fn find_filters_with_predicate() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow
        .actors()
        .find(|actor: &Actor| actor.last_name.starts_with('G'))
        .await?;

    assert_actor_names(&actors, &[("Ryan", "Gosling")]);
    Ok(())
}

#[tokio::test]
async fn remove_deletes_actor_on_save() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let chuck = uow.actors().get_by_id(1).await?.expect("seeded actor");
    uow.actors().remove(chuck);
    uow.save().await?;

    assert_eq!(uow.actors().get_by_id(1).await?, None);
    assert_eq!(uow.actors().get_all().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn remove_range_deletes_every_actor() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actors = uow.actors().get_all().await?;
    uow.actors().remove_range(actors);
    uow.save().await?;

    assert!(uow.actors().get_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn add_inserts_actor_with_next_id() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().add(NewActorFixtures::harrison_ford());
    uow.save().await?;

    let actor = uow.actors().get_by_id(4).await?;
    assert_eq!(actor, Some(NewActorFixtures::harrison_ford()));
    Ok(())
}

#[tokio::test]
async fn add_with_unassigned_id_gets_store_assigned_id() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().add(Actor::new("Harrison", "Ford", "Dies to Kylo Ren"));
    uow.save().await?;

    assert_eq!(uow.last_inserted_id::<Actor>(), Some(4));
    let actors = uow.actors().get_actors_by_full_name("Harrison", "Ford").await?;
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].id, 4);
    Ok(())
}

#[tokio::test]
async fn add_range_inserts_every_actor() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().add_range(vec![
        NewActorFixtures::harrison_ford(),
        NewActorFixtures::margo_robbie(),
    ]);
    uow.save().await?;

    assert_eq!(uow.actors().get_by_id(4).await?, Some(NewActorFixtures::harrison_ford()));
    assert_eq!(uow.actors().get_by_id(5).await?, Some(NewActorFixtures::margo_robbie()));
    assert_eq!(uow.inserted_ids::<Actor>(), vec![4, 5]);
    Ok(())
}

#[tokio::test]
async fn update_overwrites_actor() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let mut chuck = uow.actors().get_by_id(1).await?.expect("seeded actor");
    chuck.first_name = "Charles".to_string();
    uow.actors().update(chuck);
    uow.save().await?;

    let actors = uow.actors().get_actors_by_full_name("Charles", "Norris").await?;
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].id, 1);
    assert!(uow
        .actors()
        .get_actors_by_full_name("Chuck", "Norris")
        .await?
        .is_empty());
    Ok(())
}
