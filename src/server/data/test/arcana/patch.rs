use super::*;

/// Tests that a patch changes only the fields it carries.
///
/// Expected: Ok(Some) with new tier and the original name and color
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Arcana)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::arcana::ArcanaFactory::new(db)
        .name("Fate")
        .color("green")
        .tier(3)
        .build()
        .await?;

    let patch = ArcanaPatch::from_dto(ArcanaPatchDto {
        tier: Some(2),
        ..Default::default()
    })
    .unwrap();
    let updated = ArcanaRepository::new(db)
        .patch(existing.id, patch)
        .await?
        .unwrap();

    assert_eq!(updated.tier, 2);
    assert_eq!(updated.name, "Fate");
    assert_eq!(updated.color, "green");

    Ok(())
}

/// Tests an empty patch.
///
/// Expected: Ok(Some) with the stored arcana unchanged
#[tokio::test]
async fn empty_patch_returns_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Arcana)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_arcana(db).await?;
    let updated = ArcanaRepository::new(db)
        .patch(existing.id, ArcanaPatch::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, existing.name);
    assert_eq!(updated.tier, existing.tier);

    Ok(())
}

/// Tests patching an arcana that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_arcana() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Arcana)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArcanaRepository::new(db)
        .patch(5, ArcanaPatch::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
