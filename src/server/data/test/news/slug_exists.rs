use super::*;

/// Tests slug collision checks with and without an excluded post.
///
/// Expected: The post's own slug only counts as taken for other posts
#[tokio::test]
async fn excludes_the_post_being_updated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::news::NewsFactory::new(db)
        .slug("patch-notes")
        .build()
        .await?;
    let repo = NewsRepository::new(db);

    assert!(repo.slug_exists("patch-notes", None).await?);
    assert!(!repo.slug_exists("patch-notes", Some(news.id)).await?);
    assert!(!repo.slug_exists("patch-notes-2", None).await?);

    Ok(())
}
