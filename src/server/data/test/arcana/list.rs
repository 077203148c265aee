use super::*;

/// Tests the default ordering of color, tier, then name.
///
/// Expected: blue before green before red, tiers ascending within a color
#[tokio::test]
async fn orders_by_color_tier_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Arcana)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, color, tier) in [
        ("Red Two", "red", 2),
        ("Blue Three", "blue", 3),
        ("Green One", "green", 1),
        ("Blue One", "blue", 1),
    ] {
        factory::arcana::ArcanaFactory::new(db)
            .name(name)
            .color(color)
            .tier(tier)
            .build()
            .await?;
    }

    let arcana = ArcanaRepository::new(db)
        .list(&ArcanaListQuery::default())
        .await?;
    let names: Vec<_> = arcana.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, vec!["Blue One", "Blue Three", "Green One", "Red Two"]);

    Ok(())
}

/// Tests the color and tier filters.
///
/// Expected: Only tier 3 red arcana
#[tokio::test]
async fn filters_by_color_and_tier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Arcana)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::arcana::ArcanaFactory::new(db).name("A").build().await?;
    factory::arcana::ArcanaFactory::new(db).name("B").tier(2).build().await?;
    factory::arcana::ArcanaFactory::new(db)
        .name("C")
        .color("blue")
        .build()
        .await?;

    let query = ArcanaListQuery::parse(Some("red"), Some("3"), Some("name")).unwrap();
    let arcana = ArcanaRepository::new(db).list(&query).await?;

    assert_eq!(arcana.len(), 1);
    assert_eq!(arcana[0].name, "A");

    Ok(())
}
