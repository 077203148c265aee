use super::*;

/// Tests creating a news post with defaults.
///
/// Expected: Ok with default category, author and a publish time set
#[tokio::test]
async fn creates_news_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let news = NewsRepository::new(db)
        .create(params("Season 5"), "season-5".to_string())
        .await?;

    assert_eq!(news.slug, "season-5");
    assert_eq!(news.category, "guides");
    assert_eq!(news.author, "BlogHok");
    assert!(news.published_at >= before);

    Ok(())
}

/// Tests inserting two posts under the same slug.
///
/// Expected: the second insert fails with a unique index violation
#[tokio::test]
async fn duplicate_slug_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = NewsRepository::new(db);

    repo.create(params("Season 5"), "season-5".to_string()).await?;
    let err = repo
        .create(params("Season 5 again"), "season-5".to_string())
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err));

    Ok(())
}
