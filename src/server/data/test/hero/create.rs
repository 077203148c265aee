use super::*;

/// Tests creating a hero without matchups.
///
/// Verifies that the slug is derived from the name and the tier rank is stored for
/// sorting.
///
/// Expected: Ok with slug "zhuge-liang"
#[tokio::test]
async fn creates_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = HeroRepository::new(db)
        .create(&params("Zhuge Liang", &[], &[]))
        .await?;

    assert_eq!(hero.slug, "zhuge-liang");
    assert_eq!(hero.roles, vec!["Mage"]);
    assert!(hero.allies.is_empty());

    let stored = entity::prelude::Hero::find_by_id(hero.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.meta_tier_rank, MetaTier::A.rank());

    Ok(())
}

/// Tests creating a hero with allies and counters.
///
/// Expected: Ok with matchups populated from the referenced heroes in request order
#[tokio::test]
async fn creates_hero_with_matchups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ally = factory::hero::HeroFactory::new(db).name("Da Qiao").build().await?;
    let first = factory::create_hero(db).await?;
    let second = factory::create_hero(db).await?;

    let hero = HeroRepository::new(db)
        .create(&params("Zhou Yu", &[ally.id], &[second.id, first.id]))
        .await?;

    assert_eq!(hero.allies.len(), 1);
    assert_eq!(hero.allies[0].hero_id, ally.id);
    assert_eq!(hero.allies[0].slug, "da-qiao");
    assert_eq!(hero.allies[0].description, format!("note {}", ally.id));
    let counters: Vec<i32> = hero.counters.iter().map(|m| m.hero_id).collect();
    assert_eq!(counters, vec![second.id, first.id]);

    Ok(())
}

/// Tests a second insert of the same hero that skipped the service's name check.
///
/// Expected: the unique index rejects it and the error maps to a conflict
#[tokio::test]
async fn duplicate_insert_maps_to_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = HeroRepository::new(db);

    repo.create(&params("Lu Bu", &[], &[])).await?;
    let err = repo.create(&params("Lu Bu", &[], &[])).await.unwrap_err();

    assert!(is_unique_violation(&err));
    assert!(matches!(
        AppError::conflict_on_unique(err, "taken"),
        AppError::Conflict(message) if message == "taken"
    ));
    assert_eq!(entity::prelude::Hero::find().count(db).await?, 1);

    Ok(())
}
