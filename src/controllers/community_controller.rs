use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{info, warn};

use super::session_controller::get_access_token;
use crate::api_client::ApiClient;
use crate::error::{GourmetError, Result};
use crate::models::api::{FeedEntry, UserData};

/// Load the community feed and resolve each post's author
///
/// Each author is fetched once. A failed author lookup leaves that entry
/// without an author instead of failing the whole feed.
pub async fn community_feed(api: &ApiClient, pool: &SqlitePool) -> Result<Vec<FeedEntry>> {
    if get_access_token(pool).await?.is_none() {
        return Err(GourmetError::NotLoggedIn);
    }

    let posts = api.list_posts().await?;
    info!(count = posts.len(), "Loaded community posts");

    let mut authors: HashMap<String, Option<UserData>> = HashMap::new();
    let mut feed = Vec::with_capacity(posts.len());

    for post in posts {
        if !authors.contains_key(&post.author) {
            let author = match api.get_user(&post.author).await {
                Ok(response) => Some(response.user),
                Err(e) => {
                    warn!(author = %post.author, error = %e, "Failed to load post author");
                    None
                }
            };
            authors.insert(post.author.clone(), author);
        }

        let author = authors.get(&post.author).cloned().flatten();
        feed.push(FeedEntry { post, author });
    }

    Ok(feed)
}
