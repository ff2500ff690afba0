use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::PreferenceRecord;

/// Insert or overwrite a preference value
///
/// Runs against the pool or an open transaction.
pub async fn set_preference<'e, E>(executor: E, namespace: &str, key: &str, value: &str) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO preferences (namespace, key, value) VALUES (?, ?, ?)
        ON CONFLICT (namespace, key)
        DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(namespace)
    .bind(key)
    .bind(value)
    .execute(executor)
    .await?;

    Ok(())
}

/// Get a preference value, `None` if it was never set
pub async fn get_preference<'e, E>(executor: E, namespace: &str, key: &str) -> Result<Option<String>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let value: Option<String> =
        sqlx::query_scalar("SELECT value FROM preferences WHERE namespace = ? AND key = ?")
            .bind(namespace)
            .bind(key)
            .fetch_optional(executor)
            .await?;

    Ok(value)
}

/// Every preference stored in a namespace, ordered by key
pub async fn list_namespace(pool: &SqlitePool, namespace: &str) -> Result<Vec<PreferenceRecord>> {
    let preferences = sqlx::query_as::<_, PreferenceRecord>(
        "SELECT namespace, key, value, updated_at FROM preferences WHERE namespace = ? ORDER BY key",
    )
    .bind(namespace)
    .fetch_all(pool)
    .await?;

    Ok(preferences)
}

/// Delete a preference; returns whether it existed
pub async fn remove_preference(pool: &SqlitePool, namespace: &str, key: &str) -> Result<bool> {
    let affected = sqlx::query("DELETE FROM preferences WHERE namespace = ? AND key = ?")
        .bind(namespace)
        .bind(key)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected > 0)
}

/// Delete every preference in a namespace
pub async fn clear_namespace(pool: &SqlitePool, namespace: &str) -> Result<u64> {
    let affected = sqlx::query("DELETE FROM preferences WHERE namespace = ?")
        .bind(namespace)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected)
}
