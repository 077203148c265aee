use super::*;

/// Tests that deleting an item removes links pointing at it.
///
/// Expected: Ok(true) and the other item's build path no longer lists it
#[tokio::test]
async fn removes_incoming_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_equipment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let component = factory::create_equipment(db).await?;
    let repo = EquipmentRepository::new(db);
    let item = repo.create(&params("Rapier", &[component.id], &[])).await?;
    factory::create_build_link(db, component.id, item.id, "builds_into").await?;

    assert!(repo.delete(component.id).await?);

    let item = repo.find_by_id(item.id).await?.unwrap();
    assert!(item.build_path.is_empty());
    assert_eq!(entity::prelude::EquipmentBuildLink::find().count(db).await?, 0);

    Ok(())
}
