use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;

/// Open (creating if needed) the SQLite database and run migrations
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    // In-memory databases have no file to create
    if !database_url.contains(":memory:") && !sqlx::Sqlite::database_exists(database_url).await? {
        info!(database_url, "Creating database");
        sqlx::Sqlite::create_database(database_url).await?;
    }

    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        5
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(sqlx::Error::from)?;

    Ok(pool)
}
