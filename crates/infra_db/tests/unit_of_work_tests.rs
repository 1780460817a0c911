//! Unit of work tests: atomic saves, staging, and cascades

use domain_catalog::{Actor, Biography, Movie};
use infra_db::{DatabaseError, Repository, UnitOfWork};
use proptest::prelude::*;
use test_utils::{
    actor_strategy, movie_strategy, CatalogFixtures, NewActorFixtures, TestActorBuilder,
    TestDatabase, TestMovieBuilder,
};

#[tokio::test]
async fn staged_changes_are_invisible_until_save() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().add(NewActorFixtures::harrison_ford());

    assert!(uow.has_changes());
    assert_eq!(uow.pending_changes(), 1);
    assert_eq!(uow.actors().get_by_id(4).await?, None);

    uow.save().await?;

    assert!(!uow.has_changes());
    assert!(uow.actors().get_by_id(4).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn save_without_changes_writes_nothing() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    assert_eq!(uow.save().await?, 0);
    Ok(())
}

#[tokio::test]
async fn save_commits_changes_across_repositories() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    let actor_id = NewActorFixtures::harrison_ford().id;
    uow.movies()
        .add(TestMovieBuilder::new(actor_id).with_name("Blade Runner").build());
    uow.actors().add(NewActorFixtures::harrison_ford());
    let written = uow.save().await?;

    assert_eq!(written, 2);
    assert_eq!(uow.movies().get_by_actor_id(actor_id).await?.len(), 1);
    assert_eq!(uow.last_inserted_id::<Movie>(), Some(5));
    Ok(())
}

#[tokio::test]
async fn failed_save_writes_nothing_and_keeps_changes() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().add(NewActorFixtures::harrison_ford());
    uow.actors()
        .update(TestActorBuilder::new().with_id(77).build());
    let result = uow.save().await;

    assert!(matches!(result, Err(DatabaseError::NotFound(_))));
    assert_eq!(uow.pending_changes(), 2);
    assert_eq!(uow.actors().get_by_id(4).await?, None);
    assert_eq!(uow.actors().get_all().await?.len(), CatalogFixtures::ACTOR_COUNT);
    Ok(())
}

#[tokio::test]
async fn partial_remove_range_rolls_back_everything() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().remove_range(vec![
        CatalogFixtures::chuck_norris(),
        TestActorBuilder::new().with_id(404).build(),
    ]);
    let result = uow.save().await;

    assert!(result.is_err_and(|e| e.is_not_found()));
    assert!(uow.actors().get_by_id(1).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn discarded_changes_are_never_written() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().add(NewActorFixtures::harrison_ford());
    assert_eq!(uow.discard_changes(), 1);
    assert_eq!(uow.save().await?, 0);

    assert_eq!(uow.actors().get_by_id(4).await?, None);
    Ok(())
}

#[tokio::test]
async fn dropping_unit_of_work_discards_unsaved_changes() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;

    {
        let mut uow = db.unit_of_work().await?;
        uow.actors().add(NewActorFixtures::harrison_ford());
    }

    let mut uow = db.unit_of_work().await?;
    assert_eq!(uow.actors().get_by_id(4).await?, None);
    Ok(())
}

#[tokio::test]
async fn saved_changes_are_visible_to_later_units_of_work() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;

    let mut uow = db.unit_of_work().await?;
    uow.actors().add(NewActorFixtures::margo_robbie());
    uow.save().await?;
    uow.dispose();

    let mut uow = UnitOfWork::begin(db.pool()).await?;
    assert_eq!(
        uow.actors().get_by_id(5).await?,
        Some(NewActorFixtures::margo_robbie())
    );
    Ok(())
}

#[tokio::test]
async fn deleting_actor_cascades_to_movies_and_biography() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors().remove(CatalogFixtures::chuck_norris());
    uow.save().await?;

    assert!(uow.movies().get_by_actor_id(1).await?.is_empty());
    assert!(uow.biographies().get_all().await?.is_empty());
    assert_eq!(uow.movies().get_all().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn duplicate_id_insert_is_rejected() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    let mut uow = db.unit_of_work().await?;

    uow.actors()
        .add(TestActorBuilder::new().with_id(1).build());
    let error = uow.save().await.expect_err("id 1 is taken");

    assert!(error.is_constraint_violation());
    Ok(())
}

#[tokio::test]
async fn empty_database_has_no_actors() -> Result<(), DatabaseError> {
    let db = TestDatabase::new().await?;
    let mut uow = db.unit_of_work().await?;

    assert!(uow.actors().get_all().await?.is_empty());
    assert!(uow.actors().get_actors_with_movies().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn seeding_twice_is_a_no_op() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;

    assert!(!infra_db::seed_catalog(db.pool()).await?);
    assert_eq!(db.count_rows("actors").await?, CatalogFixtures::ACTOR_COUNT as i64);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn saved_actor_and_movies_read_back_unchanged(
        actor in actor_strategy(),
        movies in proptest::collection::vec(movie_strategy(1), 0..4),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let db = TestDatabase::new().await.unwrap();
            let mut uow = db.unit_of_work().await.unwrap();

            uow.actors().add(actor.clone());
            uow.movies().add_range(movies.clone());
            uow.save().await.unwrap();

            let actor_id = uow.last_inserted_id::<Actor>().unwrap();
            let stored = uow.actors().get_by_id(actor_id).await.unwrap();
            prop_assert_eq!(stored, Some(actor.clone().with_id(actor_id)));

            let movie_ids = uow.inserted_ids::<Movie>();
            prop_assert_eq!(movie_ids.len(), movies.len());
            for (id, staged) in movie_ids.into_iter().zip(&movies) {
                let stored = uow.movies().get_by_id(id).await.unwrap();
                prop_assert_eq!(stored, Some(staged.clone().with_id(id)));
            }

            let owned = uow.movies().get_by_actor_id(actor_id).await.unwrap();
            prop_assert_eq!(owned.len(), movies.len());
            Ok::<(), TestCaseError>(())
        })?;
    }
}

#[tokio::test]
async fn reads_and_writes_classify_store_errors_alike() -> Result<(), DatabaseError> {
    let db = TestDatabase::seeded().await?;
    sqlx::query("DROP TABLE biographies").execute(db.pool()).await?;
    let mut uow = db.unit_of_work().await?;

    let read = uow.biographies().get_all().await.expect_err("table is gone");
    assert!(matches!(read, DatabaseError::QueryFailed(_)));

    uow.biographies()
        .add(Biography::new("Leading man.", 2));
    let write = uow.save().await.expect_err("table is gone");
    assert!(matches!(write, DatabaseError::QueryFailed(_)));

    assert!(!read.is_connection_error());
    assert!(!write.is_connection_error());
    Ok(())
}
