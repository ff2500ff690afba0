//! HTTP client for the recipe community backend.
//!
//! Authentication, profile management, bookmarks and community posts all go
//! through [`ApiClient`]. Responses outside the 2xx range surface as
//! [`GourmetError::Api`].

use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{GourmetError, Result};
use crate::models::RecipeRecord;
use crate::models::api::{
    CommunityPost, CreatePostRequest, ForgotPasswordRequest, GetUserResponse, LoginRequest, LoginResponse,
    MessageResponse, SignUpRequest, UpdateProfileRequest, UpdateProfileResponse, VerifyOtpRequest,
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.base_url, path))
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .request(Method::POST, "auth/signin")
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<MessageResponse> {
        let response = self
            .request(Method::POST, "auth/signup")
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<MessageResponse> {
        let response = self
            .request(Method::POST, "auth/forgot-password")
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(skip(self, request))]
    pub async fn verify_otp(&self, user_id: &str, request: &VerifyOtpRequest) -> Result<MessageResponse> {
        let response = self
            .request(Method::POST, &format!("auth/verify-otp/{}", user_id))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> Result<GetUserResponse> {
        let response = self
            .request(Method::GET, &format!("user/{}", user_id))
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<UpdateProfileResponse> {
        let response = self
            .request(Method::PATCH, &format!("user/{}", user_id))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<MessageResponse> {
        let response = self
            .request(Method::DELETE, &format!("user/{}", user_id))
            .send()
            .await?;
        read_json(response).await
    }

    /// Add or remove a server-side bookmark for `recipe_id`
    #[instrument(skip(self, recipe))]
    pub async fn toggle_bookmark(
        &self,
        user_id: &str,
        recipe_id: &str,
        recipe: &RecipeRecord,
    ) -> Result<()> {
        let response = self
            .request(Method::POST, &format!("recipes/{}/toggle-bookmark", user_id))
            .query(&[("recipeId", recipe_id)])
            .json(recipe)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self, request), fields(author_id = %request.author_id))]
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<()> {
        let response = self
            .request(Method::POST, "posts")
            .json(request)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Every post on the community feed
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> Result<Vec<CommunityPost>> {
        let response = self.request(Method::GET, "posts").send().await?;
        read_json(response).await
    }
}

/// Turn a non-2xx response into [`GourmetError::Api`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;
    debug!(status = status.as_u16(), body = %body, "Backend request failed");

    // NestJS-style bodies carry a string or a list of strings in `message`
    let parsed = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message);
    let message = match parsed {
        Some(serde_json::Value::String(message)) => message,
        Some(serde_json::Value::Array(messages)) => messages
            .iter()
            .filter_map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => body,
    };

    Err(GourmetError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
