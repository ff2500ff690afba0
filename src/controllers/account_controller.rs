use sqlx::SqlitePool;
use tracing::info;

use super::session_controller::{
    clear_session, require_user_id, save_login_details, save_user_data,
};
use crate::api_client::ApiClient;
use crate::error::Result;
use crate::models::api::{
    CreatePostRequest, ForgotPasswordRequest, LoginRequest, MessageResponse, SignUpRequest,
    UpdateProfileRequest, UserData, VerifyOtpRequest, share_post_content,
};
use crate::models::{RecipeRecord, RecipeRequest};

/// Sign in and remember the issued tokens; returns the user id
pub async fn login(api: &ApiClient, pool: &SqlitePool, email: &str, password: &str) -> Result<String> {
    let response = api
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    save_login_details(
        pool,
        &response.access_token,
        &response.refresh_token,
        &response.user_id,
    )
    .await?;
    info!(user_id = %response.user_id, "Logged in");

    Ok(response.user_id)
}

pub async fn sign_up(
    api: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<MessageResponse> {
    api.sign_up(&SignUpRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    })
    .await
}

/// Ask the backend to email a one-time password
pub async fn request_password_reset(api: &ApiClient, email: &str) -> Result<MessageResponse> {
    api.forgot_password(&ForgotPasswordRequest {
        email: email.to_string(),
    })
    .await
}

/// Verify the one-time password for the stored user
pub async fn verify_otp(api: &ApiClient, pool: &SqlitePool, otp: &str) -> Result<MessageResponse> {
    let user_id = require_user_id(pool).await?;
    api.verify_otp(
        &user_id,
        &VerifyOtpRequest {
            otp: otp.to_string(),
        },
    )
    .await
}

/// Fetch the current user's profile and cache it locally
pub async fn fetch_profile(api: &ApiClient, pool: &SqlitePool) -> Result<UserData> {
    let user_id = require_user_id(pool).await?;
    let response = api.get_user(&user_id).await?;
    save_user_data(pool, &response.user).await?;
    Ok(response.user)
}

pub async fn update_profile(
    api: &ApiClient,
    pool: &SqlitePool,
    name: &str,
    email: &str,
) -> Result<UserData> {
    let user_id = require_user_id(pool).await?;
    let response = api
        .update_profile(
            &user_id,
            &UpdateProfileRequest {
                name: name.to_string(),
                email: email.to_string(),
            },
        )
        .await?;
    save_user_data(pool, &response.user).await?;
    Ok(response.user)
}

/// Delete the account on the backend, then forget the local session
pub async fn delete_account(api: &ApiClient, pool: &SqlitePool) -> Result<()> {
    let user_id = require_user_id(pool).await?;
    api.delete_user(&user_id).await?;
    clear_session(pool).await?;
    info!(user_id = %user_id, "Account deleted");
    Ok(())
}

pub async fn logout(pool: &SqlitePool) -> Result<()> {
    clear_session(pool).await
}

/// Toggle a server-side bookmark for a favourite recipe
pub async fn toggle_bookmark(
    api: &ApiClient,
    pool: &SqlitePool,
    recipe_id: &str,
    recipe: &RecipeRecord,
) -> Result<()> {
    let user_id = require_user_id(pool).await?;
    api.toggle_bookmark(&user_id, recipe_id, recipe).await
}

/// Publish a recipe on the community feed as the logged-in user
pub async fn share_recipe(
    api: &ApiClient,
    pool: &SqlitePool,
    recipe: &RecipeRecord,
    request: &RecipeRequest,
) -> Result<()> {
    let author_id = require_user_id(pool).await?;
    api.create_post(&CreatePostRequest {
        content: share_post_content(recipe, request),
        author_id,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GourmetError;
    use crate::models::test_fixtures::test_db;
    use rstest::*;

    // Nothing listens here; the login check must fail before any request is sent
    fn unreachable_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9")
    }

    #[rstest]
    #[tokio::test]
    async fn test_share_recipe_requires_login(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        let result = share_recipe(
            &unreachable_api(),
            &pool,
            &RecipeRecord::default(),
            &RecipeRequest::new(vec![]),
        )
        .await;

        assert!(matches!(result, Err(GourmetError::NotLoggedIn)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_bookmark_requires_login(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        let result =
            toggle_bookmark(&unreachable_api(), &pool, "r1", &RecipeRecord::default()).await;

        assert!(matches!(result, Err(GourmetError::NotLoggedIn)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_verify_otp_requires_stored_user(#[future] test_db: SqlitePool) {
        let pool = test_db.await;

        let result = verify_otp(&unreachable_api(), &pool, "123456").await;

        assert!(matches!(result, Err(GourmetError::NotLoggedIn)));
    }
}
