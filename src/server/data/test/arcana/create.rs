use super::*;

/// Tests creating an arcana.
///
/// Expected: Ok with color stored lowercase and attributes defaulted
#[tokio::test]
async fn creates_arcana() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Arcana)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = ArcanaParams::from_dto(ArcanaInputDto {
        name: "Mutation".to_string(),
        color: "blue".to_string(),
        tier: Some(3),
        image: "/uploads/mutation.png".to_string(),
        description: "Magic penetration.".to_string(),
        effects: vec!["+6.4 magic pierce".to_string()],
        ..Default::default()
    })
    .unwrap();

    let arcana = ArcanaRepository::new(db).create(params).await?;

    assert_eq!(arcana.color, "blue");
    assert_eq!(arcana.tier, 3);
    assert_eq!(arcana.effects, vec!["+6.4 magic pierce"]);
    assert_eq!(arcana.attributes.magic_penetration, 0.0);

    Ok(())
}
