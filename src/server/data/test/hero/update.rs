use super::*;

/// Tests updating a hero replaces its fields and matchups.
///
/// Expected: Ok(Some) with the new slug and only the new matchups
#[tokio::test]
async fn replaces_fields_and_matchups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_ally = factory::create_hero(db).await?;
    let new_ally = factory::create_hero(db).await?;
    let repo = HeroRepository::new(db);
    let hero = repo.create(&params("Xiao Qiao", &[old_ally.id], &[])).await?;

    let updated = repo
        .update(hero.id, &params("Xiao Qiao Prime", &[new_ally.id], &[]))
        .await?
        .unwrap();

    assert_eq!(updated.slug, "xiao-qiao-prime");
    assert_eq!(updated.created_at, hero.created_at);
    assert!(updated.updated_at >= hero.updated_at);
    assert_eq!(updated.allies.len(), 1);
    assert_eq!(updated.allies[0].hero_id, new_ally.id);
    assert_eq!(entity::prelude::HeroMatchup::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating a hero that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HeroRepository::new(db)
        .update(999, &params("Nobody", &[], &[]))
        .await?;

    assert!(result.is_none());

    Ok(())
}
