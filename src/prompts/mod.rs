//! Prompt templates sent to the content generator.
//!
//! Templates live next to this file as plain text and are embedded at compile
//! time. Placeholders use the `{{NAME}}` form.
//!
//! The recipe template asks for exactly the section headers that
//! [`crate::parsers::parse_recipe_response`] reads, and the ingredient
//! templates ask for `Name: Quantity` lines, so changing either side means
//! changing the other.

use crate::error::{GourmetError, Result};
use crate::models::RecipeRequest;

pub const RECIPE_PROMPT: &str = include_str!("recipe.txt");
pub const INGREDIENTS_TEXT_PROMPT: &str = include_str!("ingredients_text.txt");
pub const INGREDIENTS_IMAGE_PROMPT: &str = include_str!("ingredients_image.txt");

/// Build the recipe generation prompt.
///
/// Fails with [`GourmetError::NoIngredients`] when the request lists nothing to cook with.
pub fn recipe_prompt(request: &RecipeRequest) -> Result<String> {
    if request.ingredients.is_empty() {
        return Err(GourmetError::NoIngredients);
    }

    let ingredients = request
        .ingredients
        .iter()
        .map(|ingredient| ingredient.to_prompt_fragment())
        .collect::<Vec<_>>()
        .join(", ");

    let dietary_restrictions = if request.dietary_restrictions.trim().is_empty() {
        "None"
    } else {
        request.dietary_restrictions.trim()
    };

    Ok(RECIPE_PROMPT
        .replace("{{CUISINE}}", &request.cuisine)
        .replace("{{MEAL_TYPE}}", &request.meal_type)
        .replace("{{INGREDIENTS}}", &ingredients)
        .replace("{{PERSONS}}", &request.number_of_persons.to_string())
        .replace("{{DIETARY_RESTRICTIONS}}", dietary_restrictions))
}

/// Prompt asking the generator to normalise a free-text ingredient list
pub fn ingredient_analysis_prompt(ingredient_text: &str) -> String {
    INGREDIENTS_TEXT_PROMPT.replace("{{INGREDIENTS}}", ingredient_text.trim())
}

/// Prompt sent alongside a photo of ingredients
pub fn ingredient_image_prompt() -> &'static str {
    INGREDIENTS_IMAGE_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        COOKING_TIME_HEADER, INGREDIENTS_HEADER, INSTRUCTIONS_HEADER, IngredientRecord,
        NUTRITION_HEADER, RECIPE_NAME_HEADER, SERVINGS_HEADER,
    };

    fn curry_request() -> RecipeRequest {
        RecipeRequest {
            ingredients: vec![
                IngredientRecord::new("Chicken", "500g"),
                IngredientRecord::new("Rice", ""),
            ],
            number_of_persons: 4,
            cuisine: "Indian".to_string(),
            dietary_restrictions: "Nut free".to_string(),
            meal_type: "Dinner".to_string(),
        }
    }

    #[test]
    fn test_recipe_prompt_fills_placeholders() {
        let prompt = recipe_prompt(&curry_request()).expect("Failed to build prompt");

        assert!(prompt.starts_with("Generate a Indian Dinner recipe"));
        assert!(prompt.contains("these ingredients: Chicken (500g), Rice (Not specified)"));
        assert!(prompt.contains("- Serves: 4 people"));
        assert!(prompt.contains("dietary restrictions: Nut free"));
        assert!(prompt.contains("quantities for 4 people"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_recipe_prompt_requests_parser_headers() {
        let prompt = recipe_prompt(&curry_request()).expect("Failed to build prompt");

        for header in [
            RECIPE_NAME_HEADER,
            SERVINGS_HEADER,
            COOKING_TIME_HEADER,
            INGREDIENTS_HEADER,
            INSTRUCTIONS_HEADER,
            NUTRITION_HEADER,
        ] {
            assert!(
                prompt.lines().any(|line| line == header),
                "Prompt should request header {}",
                header
            );
        }
    }

    #[test]
    fn test_recipe_prompt_without_restrictions() {
        let mut request = curry_request();
        request.dietary_restrictions = "  ".to_string();

        let prompt = recipe_prompt(&request).expect("Failed to build prompt");

        assert!(prompt.contains("dietary restrictions: None"));
    }

    #[test]
    fn test_recipe_prompt_requires_ingredients() {
        let request = RecipeRequest::new(vec![]);

        let result = recipe_prompt(&request);

        assert!(matches!(result, Err(GourmetError::NoIngredients)));
    }

    #[test]
    fn test_ingredient_prompts_request_name_quantity_lines() {
        let prompt = ingredient_analysis_prompt(" 2 eggs, some milk ");

        assert!(prompt.starts_with("Analyze the following ingredient list: 2 eggs, some milk\n"));
        assert!(prompt.contains("Ingredient Name: Quantity"));
        assert!(ingredient_image_prompt().contains("Ingredient Name: Quantity"));
    }
}
