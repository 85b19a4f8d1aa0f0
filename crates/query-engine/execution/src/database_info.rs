//! Checks that the database is reachable and holds the table the queries expect.

use sqlx::sqlite::SqlitePool;

use query_engine_metadata::metadata::{ScalarType, TableInfo};

use crate::error::Error;

/// Check that we can run a query at all.
pub async fn health_check(pool: &SqlitePool) -> Result<(), Error> {
    let mut connection = pool.acquire().await?;
    sqlx::query("SELECT 1").execute(&mut *connection).await?;
    Ok(())
}

/// Compare the columns of the table in the database with the metadata.
///
/// Missing columns are an error. Columns declared with another type affinity are only logged,
/// since the queries cast every column they output.
pub async fn check_schema(pool: &SqlitePool, table: &TableInfo) -> Result<(), Error> {
    let mut connection = pool.acquire().await?;
    let columns: Vec<(String, String)> =
        sqlx::query_as("SELECT name, type FROM pragma_table_info(?1)")
            .bind(&table.table_name)
            .fetch_all(&mut *connection)
            .await?;

    let mut missing = vec![];
    for expected in table.columns.values() {
        match columns.iter().find(|(name, _)| *name == expected.name) {
            None => missing.push(expected.name.clone()),
            Some((_, declared)) => {
                let affinity = ScalarType::from_declared_type(declared);
                if affinity != Some(expected.r#type) {
                    tracing::warn!(
                        table = %table.table_name,
                        column = %expected.name,
                        %declared,
                        expected = %expected.r#type,
                        "column is declared with an unexpected type"
                    );
                }
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::SchemaMismatch {
            table: table.table_name.clone(),
            missing,
        })
    }
}
