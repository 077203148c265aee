use super::*;

/// Tests that deleting a hero removes matchups pointing at it from other heroes.
///
/// Expected: Ok(true), and the other hero no longer lists the deleted hero
#[tokio::test]
async fn removes_references_from_other_heroes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HeroRepository::new(db);
    let target = factory::create_hero(db).await?;
    let other = repo.create(&params("Marco Polo", &[target.id], &[target.id])).await?;
    factory::create_matchup(db, target.id, other.id, "counter").await?;

    assert!(repo.delete(target.id).await?);

    let other = repo.find_by_id(other.id).await?.unwrap();
    assert!(other.allies.is_empty());
    assert!(other.counters.is_empty());
    assert_eq!(entity::prelude::HeroMatchup::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a hero that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!HeroRepository::new(db).delete(42).await?);

    Ok(())
}
