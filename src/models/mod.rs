mod ingredient;
mod preference;
mod recipe;
mod recipe_request;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::{IngredientRecord, NOT_SPECIFIED};
pub use preference::PreferenceRecord;
pub use recipe::{
    COOKING_TIME_HEADER, DEFAULT_SERVINGS, Difficulty, INGREDIENTS_HEADER, INSTRUCTIONS_HEADER,
    NUTRITION_HEADER, RECIPE_NAME_HEADER, RecipeRecord, SERVINGS_HEADER, UNNAMED_RECIPE,
    determine_difficulty,
};
pub use recipe_request::RecipeRequest;
