use super::*;

/// Tests that ids of deleted heroes are dropped when listing.
///
/// Expected: Only the remaining hero is populated
#[tokio::test]
async fn drops_unknown_heroes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_table(entity::prelude::Meta)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;
    factory::create_meta(db, "2.0", &[hero.id, 999]).await?;

    let metas = MetaRepository::new(db).list().await?;

    assert_eq!(metas.len(), 1);
    assert_eq!(metas[0].heroes.len(), 1);
    assert_eq!(metas[0].heroes[0].id, hero.id);

    Ok(())
}
