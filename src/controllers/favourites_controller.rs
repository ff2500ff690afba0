use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::warn;
use uuid::Uuid;

use super::preference_controller::{get_preference, remove_preference, set_preference};
use crate::error::{GourmetError, Result};
use crate::models::RecipeRecord;

pub const RECIPE_PREFS: &str = "recipe_preferences";
pub const FAVORITE_RECIPES_KEY: &str = "favorite_recipes";

/// Save a recipe to favourites and return its id
/// A recipe without an id gets a fresh one; an existing favourite with the same id is replaced
///
/// The list is read and rewritten inside one `BEGIN IMMEDIATE` transaction.
pub async fn save_favorite_recipe(pool: &SqlitePool, recipe: &RecipeRecord) -> Result<String> {
    let id = recipe
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let stored = RecipeRecord {
        id: Some(id.clone()),
        ..recipe.clone()
    };

    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let mut recipes = load_favorites(&mut *tx).await?;
    match recipes.iter_mut().find(|r| r.id.as_deref() == Some(id.as_str())) {
        Some(existing) => *existing = stored,
        None => recipes.push(stored),
    }

    write_favorites(&mut *tx, &recipes).await?;
    tx.commit().await?;

    Ok(id)
}

/// All favourite recipes in the order they were saved
/// A stored value that no longer decodes is treated as an empty list
pub async fn get_favorite_recipes(pool: &SqlitePool) -> Result<Vec<RecipeRecord>> {
    load_favorites(pool).await
}

/// Fetch one favourite recipe by id
pub async fn get_favorite_recipe(pool: &SqlitePool, recipe_id: &str) -> Result<RecipeRecord> {
    get_favorite_recipes(pool)
        .await?
        .into_iter()
        .find(|r| r.id.as_deref() == Some(recipe_id))
        .ok_or_else(|| GourmetError::RecipeNotFound(recipe_id.to_string()))
}

/// Remove a favourite; returns whether anything was removed
pub async fn remove_favorite_recipe(pool: &SqlitePool, recipe_id: &str) -> Result<bool> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    let mut recipes = load_favorites(&mut *tx).await?;
    let before = recipes.len();
    recipes.retain(|r| r.id.as_deref() != Some(recipe_id));

    if recipes.len() == before {
        return Ok(false);
    }

    write_favorites(&mut *tx, &recipes).await?;
    tx.commit().await?;
    Ok(true)
}

pub async fn is_recipe_favorited(pool: &SqlitePool, recipe_id: &str) -> Result<bool> {
    Ok(get_favorite_recipes(pool)
        .await?
        .iter()
        .any(|r| r.id.as_deref() == Some(recipe_id)))
}

pub async fn clear_favorite_recipes(pool: &SqlitePool) -> Result<()> {
    remove_preference(pool, RECIPE_PREFS, FAVORITE_RECIPES_KEY).await?;
    Ok(())
}

async fn load_favorites<'e, E>(executor: E) -> Result<Vec<RecipeRecord>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let Some(json) = get_preference(executor, RECIPE_PREFS, FAVORITE_RECIPES_KEY).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&json) {
        Ok(recipes) => Ok(recipes),
        Err(e) => {
            warn!(error = %e, "Discarding undecodable favourite recipes");
            Ok(Vec::new())
        }
    }
}

async fn write_favorites<'e, E>(executor: E, recipes: &[RecipeRecord]) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let json = serde_json::to_string(recipes)?;
    set_preference(executor, RECIPE_PREFS, FAVORITE_RECIPES_KEY, &json).await
}
