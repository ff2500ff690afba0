use sqlx::SqlitePool;

use super::preference_controller::{
    clear_namespace, get_preference, list_namespace, set_preference,
};
use crate::error::{GourmetError, Result};
use crate::models::api::UserData;

pub const AUTH_PREFS: &str = "auth_prefs";

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_ID_KEY: &str = "user_id";
const USER_NAME_KEY: &str = "user_name";
const USER_EMAIL_KEY: &str = "user_email";

pub async fn save_login_details(
    pool: &SqlitePool,
    access_token: &str,
    refresh_token: &str,
    user_id: &str,
) -> Result<()> {
    let mut tx = pool.begin().await?;

    for (key, value) in [
        (ACCESS_TOKEN_KEY, access_token),
        (REFRESH_TOKEN_KEY, refresh_token),
        (USER_ID_KEY, user_id),
    ] {
        sqlx::query(
            r#"
            INSERT INTO preferences (namespace, key, value) VALUES (?, ?, ?)
            ON CONFLICT (namespace, key)
            DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(AUTH_PREFS)
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

pub async fn get_access_token(pool: &SqlitePool) -> Result<Option<String>> {
    get_preference(pool, AUTH_PREFS, ACCESS_TOKEN_KEY).await
}

pub async fn get_refresh_token(pool: &SqlitePool) -> Result<Option<String>> {
    get_preference(pool, AUTH_PREFS, REFRESH_TOKEN_KEY).await
}

pub async fn get_user_id(pool: &SqlitePool) -> Result<Option<String>> {
    get_preference(pool, AUTH_PREFS, USER_ID_KEY).await
}

/// The logged-in user id, or [`GourmetError::NotLoggedIn`]
pub async fn require_user_id(pool: &SqlitePool) -> Result<String> {
    get_user_id(pool).await?.ok_or(GourmetError::NotLoggedIn)
}

/// Cache the profile fetched from the backend
pub async fn save_user_data(pool: &SqlitePool, user: &UserData) -> Result<()> {
    set_preference(pool, AUTH_PREFS, USER_ID_KEY, &user.id).await?;
    set_preference(pool, AUTH_PREFS, USER_NAME_KEY, &user.name).await?;
    set_preference(pool, AUTH_PREFS, USER_EMAIL_KEY, &user.email).await?;
    Ok(())
}

/// The cached profile, if one was saved for the current user
pub async fn get_user_profile(pool: &SqlitePool) -> Result<Option<UserData>> {
    let mut id = None;
    let mut name = None;
    let mut email = None;
    for preference in list_namespace(pool, AUTH_PREFS).await? {
        match preference.key.as_str() {
            USER_ID_KEY => id = Some(preference.value),
            USER_NAME_KEY => name = Some(preference.value),
            USER_EMAIL_KEY => email = Some(preference.value),
            _ => {}
        }
    }

    Ok(match (id, name, email) {
        (Some(id), Some(name), Some(email)) => Some(UserData { id, name, email }),
        _ => None,
    })
}

/// Forget tokens and cached profile
pub async fn clear_session(pool: &SqlitePool) -> Result<()> {
    clear_namespace(pool, AUTH_PREFS).await?;
    Ok(())
}
