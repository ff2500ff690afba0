use serde::{Deserialize, Serialize};

use super::UserData;
use crate::models::{RecipeRecord, RecipeRequest};

/// Body for publishing a community post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub author_id: String,
}

/// A post as listed on the community feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommunityPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    /// User id of the author
    pub author: String,
    /// Ids of the users who liked the post
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
}

/// A community post with its author resolved, when the author could be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub post: CommunityPost,
    pub author: Option<UserData>,
}

impl FeedEntry {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|author| author.name.as_str())
            .unwrap_or("Unknown cook")
    }
}

/// Flatten a recipe into the text blob shared on the community feed
pub fn share_post_content(recipe: &RecipeRecord, request: &RecipeRequest) -> String {
    let mut output = String::new();

    output.push_str(&format!("🍳 {}\n", recipe.name));
    output.push_str(&format!("\n👥 Serves: {}\n", recipe.servings));
    output.push_str(&format!("⏲️ Cooking Time: {}\n", recipe.cooking_time));

    output.push_str("\n📝 Ingredients:\n");
    for ingredient in &recipe.ingredients {
        output.push_str(&format!("• {}: {}\n", ingredient.name, ingredient.quantity));
    }

    output.push_str("\n📋 Instructions:\n");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, instruction));
    }

    if !recipe.nutrients.is_empty() {
        output.push_str("\n📊 Nutritional Information:\n");
        for (nutrient, value) in &recipe.nutrients {
            output.push_str(&format!("{}: {}\n", nutrient, value));
        }
    }

    output.push_str(&format!("\n🍽️ Cuisine: {}\n", request.cuisine));
    output.push_str(&format!("🥗 Meal Type: {}\n", request.meal_type));
    if !request.dietary_restrictions.is_empty() {
        output.push_str(&format!(
            "ℹ️ Dietary Restrictions: {}\n",
            request.dietary_restrictions
        ));
    }

    output
}
