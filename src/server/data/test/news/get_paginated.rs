use super::*;

/// Tests default ordering and the category filter.
///
/// Expected: Newest first, only posts in the requested category
#[tokio::test]
async fn filters_by_category_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::news::NewsFactory::new(db)
        .title("Old event")
        .category("events")
        .published_at(now - Duration::days(2))
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .title("New event")
        .category("events")
        .published_at(now)
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .title("Guide")
        .build()
        .await?;

    let query = NewsListQuery::parse(Some("events"), None, None, None).unwrap();
    let page = NewsRepository::new(db)
        .get_paginated(&query, PageParams::default())
        .await?;
    let titles: Vec<_> = page.items.iter().map(|n| n.title.as_str()).collect();

    assert_eq!(page.total, 2);
    assert_eq!(titles, vec!["New event", "Old event"]);

    Ok(())
}

/// Tests searching content and filtering by author.
///
/// Expected: Only the matching author's post whose content contains the term
#[tokio::test]
async fn searches_content_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news::NewsFactory::new(db)
        .title("Jungle tips")
        .content("Clear the red buff first.")
        .author("Mentor")
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .title("Lane tips")
        .content("Buff timers matter.")
        .author("Someone")
        .build()
        .await?;

    let query = NewsListQuery::parse(None, Some("Mentor"), Some("buff"), Some("title")).unwrap();
    let page = NewsRepository::new(db)
        .get_paginated(&query, PageParams::default())
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "Jungle tips");

    Ok(())
}

/// Tests search terms containing `LIKE` wildcard characters.
///
/// Expected: `%` only matches the post that contains a percent sign, `_` matches none
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news::NewsFactory::new(db)
        .title("50% off skins")
        .content("Discounts all week.")
        .build()
        .await?;
    factory::news::NewsFactory::new(db)
        .title("Patch notes")
        .content("Balance changes.")
        .build()
        .await?;

    let repo = NewsRepository::new(db);

    let percent = NewsListQuery::parse(None, None, Some("%"), None).unwrap();
    let page = repo.get_paginated(&percent, PageParams::default()).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "50% off skins");

    let underscore = NewsListQuery::parse(None, None, Some("_"), None).unwrap();
    let page = repo.get_paginated(&underscore, PageParams::default()).await?;
    assert_eq!(page.total, 0);

    Ok(())
}
