use super::*;

/// Tests reading a hero by slug with populated matchups.
///
/// Expected: Ok(Some) with the counter populated with name, slug and roles
#[tokio::test]
async fn populates_matchups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::HeroFactory::new(db).name("Li Bai").build().await?;
    let counter = factory::hero::HeroFactory::new(db)
        .name("Zhang Fei")
        .roles(&["Tank", "Support"])
        .build()
        .await?;
    factory::create_matchup(db, hero.id, counter.id, "counter").await?;

    let found = HeroRepository::new(db).find_by_slug("li-bai").await?.unwrap();

    assert_eq!(found.id, hero.id);
    assert_eq!(found.counters.len(), 1);
    assert_eq!(found.counters[0].name, "Zhang Fei");
    assert_eq!(found.counters[0].slug, "zhang-fei");
    assert_eq!(found.counters[0].roles, vec!["Tank", "Support"]);

    Ok(())
}

/// Tests lookup of a slug no hero uses.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_hero(db).await?;

    assert!(HeroRepository::new(db).find_by_slug("ghost").await?.is_none());

    Ok(())
}
