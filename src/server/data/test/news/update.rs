use super::*;

/// Tests that an update without a publish time keeps the stored one.
///
/// Expected: Ok(Some) with new title and unchanged published_at
#[tokio::test]
async fn keeps_published_at_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let published_at = Utc::now() - Duration::days(3);
    let existing = factory::news::NewsFactory::new(db)
        .published_at(published_at)
        .build()
        .await?;

    let updated = NewsRepository::new(db)
        .update(existing.id, params("Renamed"), "renamed".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, "renamed");
    assert_eq!(updated.published_at, existing.published_at);

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsRepository::new(db)
        .update(7, params("Nothing"), "nothing".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
