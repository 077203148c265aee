use super::*;

/// Tests creating an item with build links.
///
/// Expected: Ok with build path and upgrades in request order
#[tokio::test]
async fn creates_item_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_equipment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dagger = factory::create_equipment(db).await?;
    let gloves = factory::create_equipment(db).await?;
    let upgrade = factory::create_equipment(db).await?;

    let item = EquipmentRepository::new(db)
        .create(&params("Sky Splitter", &[gloves.id, dagger.id], &[upgrade.id]))
        .await?;

    assert_eq!(item.tier, "Epic");
    assert_eq!(item.build_path, vec![gloves.id, dagger.id]);
    assert_eq!(item.builds_into, vec![upgrade.id]);

    Ok(())
}

/// Tests updating an item rewrites its links.
///
/// Expected: Ok(Some) with only the new build path
#[tokio::test]
async fn update_replaces_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_equipment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::create_equipment(db).await?;
    let new = factory::create_equipment(db).await?;
    let repo = EquipmentRepository::new(db);
    let item = repo.create(&params("Axe", &[old.id], &[])).await?;

    let updated = repo
        .update(item.id, &params("Great Axe", &[new.id], &[]))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Great Axe");
    assert_eq!(updated.build_path, vec![new.id]);
    assert_eq!(entity::prelude::EquipmentBuildLink::find().count(db).await?, 1);

    Ok(())
}
