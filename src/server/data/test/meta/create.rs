use super::*;

/// Tests creating a meta snapshot populated with heroes.
///
/// Expected: Ok with hero summaries in the requested order
#[tokio::test]
async fn creates_populated_meta() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_table(entity::prelude::Meta)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_hero(db).await?;
    let second = factory::create_hero(db).await?;

    let meta = MetaRepository::new(db)
        .create(MetaParams {
            patch: "1.2.3".to_string(),
            hero_ids: vec![second.id, first.id],
        })
        .await?;

    let ids: Vec<i32> = meta.heroes.iter().map(|h| h.id).collect();
    assert_eq!(meta.patch, "1.2.3");
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests a partial update of the patch name.
///
/// Expected: Ok(Some) with the new patch and the same heroes
#[tokio::test]
async fn patches_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_table(entity::prelude::Meta)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::create_hero(db).await?;
    let existing = factory::create_meta(db, "1.0", &[hero.id]).await?;

    let meta = MetaRepository::new(db)
        .patch(
            existing.id,
            MetaPatch {
                patch: Some("1.1".to_string()),
                hero_ids: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(meta.patch, "1.1");
    assert_eq!(meta.heroes.len(), 1);
    assert!(meta.updated_at >= existing.updated_at);

    Ok(())
}
