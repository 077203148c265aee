use super::*;

/// Tests the category filter and name ordering.
///
/// Expected: Only Magic items, sorted by name, with their links loaded
#[tokio::test]
async fn filters_and_sorts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_equipment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wand = factory::equipment::EquipmentFactory::new(db)
        .name("Wand")
        .category("Magic")
        .build()
        .await?;
    let book = factory::equipment::EquipmentFactory::new(db)
        .name("Book")
        .category("Magic")
        .build()
        .await?;
    factory::equipment::EquipmentFactory::new(db)
        .name("Boots")
        .category("Movement")
        .build()
        .await?;
    factory::create_build_link(db, wand.id, book.id, "build_path").await?;

    let filter = EquipmentFilter::parse(Some("Magic"), None).unwrap();
    let items = EquipmentRepository::new(db).list(filter).await?;
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, vec!["Book", "Wand"]);
    assert_eq!(items[1].build_path, vec![book.id]);
    assert_eq!(items[1].attributes.attack, 20.0);

    Ok(())
}
