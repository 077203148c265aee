use super::*;

/// Tests listing the tables of a freshly built schema.
///
/// Expected: Only the created tables, sorted, without SQLite internals
#[tokio::test]
async fn lists_created_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HealthRepository::new(db);
    repo.ping().await?;
    let tables = repo.table_names().await?;

    assert_eq!(tables, vec!["news", "user"]);

    Ok(())
}
