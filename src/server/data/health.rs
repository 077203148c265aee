//! Database introspection for the health endpoints.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement};

#[derive(Debug, FromQueryResult)]
struct TableName {
    name: String,
}

pub struct HealthRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    /// Names of the user tables in the SQLite schema, sorted.
    pub async fn table_names(&self) -> Result<Vec<String>, DbErr> {
        let statement = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        );

        let rows = TableName::find_by_statement(statement).all(self.db).await?;

        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}
