use super::*;

/// Tests paging math over the full hero list.
///
/// Expected: 5 heroes at limit 2 give 3 pages with 1 item on the last page
#[tokio::test]
async fn pages_through_heroes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Angela", "Baili", "Cao Cao", "Diaochan", "Ernest"] {
        factory::hero::HeroFactory::new(db).name(name).build().await?;
    }

    let repo = HeroRepository::new(db);
    let page = repo
        .get_paginated(&HeroListQuery::default(), PageParams { page: 3, limit: 2 })
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Ernest");

    Ok(())
}

/// Tests role, lane and search filters.
///
/// Expected: Only heroes matching every filter are returned
#[tokio::test]
async fn filters_by_role_lane_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hero::HeroFactory::new(db)
        .name("Arli")
        .roles(&["Assassin"])
        .lanes(&["Jungle"])
        .build()
        .await?;
    factory::hero::HeroFactory::new(db)
        .name("Arthur")
        .roles(&["Fighter", "Tank"])
        .lanes(&["Top"])
        .build()
        .await?;
    factory::hero::HeroFactory::new(db)
        .name("Zhong Kui")
        .roles(&["Tank"])
        .lanes(&["Support"])
        .build()
        .await?;

    let repo = HeroRepository::new(db);
    let query = HeroListQuery::parse(Some("ar"), Some("Tank"), None, None, None).unwrap();
    let page = repo.get_paginated(&query, PageParams::default()).await?;
    let names: Vec<_> = page.items.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Arthur"]);

    let query = HeroListQuery::parse(None, None, Some("Support"), None, None).unwrap();
    let page = repo.get_paginated(&query, PageParams::default()).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Zhong Kui");

    Ok(())
}

/// Tests the meta tier ordering.
///
/// Expected: S+ before S before B, ties broken by higher win rate
#[tokio::test]
async fn sorts_by_meta_tier_then_win_rate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, tier, win_rate) in [
        ("Low B", "B", 60.0),
        ("Low S", "S", 49.0),
        ("High S", "S", 55.0),
        ("Top", "S+", 40.0),
    ] {
        factory::hero::HeroFactory::new(db)
            .name(name)
            .meta_tier(tier)
            .win_rate(win_rate)
            .build()
            .await?;
    }

    let query = HeroListQuery {
        sort: HeroSort::MetaTier,
        ..Default::default()
    };
    let page = HeroRepository::new(db)
        .get_paginated(&query, PageParams::default())
        .await?;
    let names: Vec<_> = page.items.iter().map(|h| h.name.as_str()).collect();

    assert_eq!(names, vec!["Top", "High S", "Low S", "Low B"]);

    Ok(())
}

/// Tests search terms made of `LIKE` wildcard characters.
///
/// Expected: `%` and `_` match literally, so neither hero is returned
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hero::HeroFactory::new(db).name("Lu Bu").build().await?;
    factory::hero::HeroFactory::new(db).name("Arthur").build().await?;

    let repo = HeroRepository::new(db);
    for term in ["%", "_", "\\"] {
        let query = HeroListQuery::parse(Some(term), None, None, None, None).unwrap();
        let page = repo.get_paginated(&query, PageParams::default()).await?;
        assert_eq!(page.total, 0, "search {:?}", term);
    }

    let query = HeroListQuery::parse(Some("u b"), None, None, None, None).unwrap();
    let page = repo.get_paginated(&query, PageParams::default()).await?;
    assert_eq!(page.total, 1);

    Ok(())
}
