use tracing::{info, warn};

use crate::error::{GourmetError, Result};
use crate::generator::{ContentGenerator, ImageInput};
use crate::models::{IngredientRecord, RecipeRecord, RecipeRequest};
use crate::parsers::{
    ParseStatus, parse_ingredients_response, parse_recipe_response_detailed,
};
use crate::prompts::{ingredient_analysis_prompt, ingredient_image_prompt, recipe_prompt};

/// Ask the generator to turn a free-text ingredient list into records
/// Blank input returns an empty list without calling the generator
pub async fn identify_ingredients_from_text(
    generator: &dyn ContentGenerator,
    ingredient_text: &str,
) -> Result<Vec<IngredientRecord>> {
    if ingredient_text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let response = generator
        .generate(&ingredient_analysis_prompt(ingredient_text))
        .await?;

    Ok(parse_ingredients_response(&response))
}

/// Identify ingredients visible in a photo
pub async fn identify_ingredients_from_image(
    generator: &dyn ContentGenerator,
    image: &ImageInput,
) -> Result<Vec<IngredientRecord>> {
    let response = generator
        .generate_with_image(ingredient_image_prompt(), image)
        .await?;

    Ok(parse_ingredients_response(&response))
}

/// Generate a recipe for the request and parse it
/// Fails with [`GourmetError::UnparseableResponse`] when nothing recognisable came back
pub async fn generate_recipe(
    generator: &dyn ContentGenerator,
    request: &RecipeRequest,
) -> Result<RecipeRecord> {
    let prompt = recipe_prompt(request)?;

    info!(
        model = generator.model_name(),
        ingredients = request.ingredients.len(),
        "Generating recipe"
    );
    let response = generator.generate(&prompt).await?;

    let parsed = parse_recipe_response_detailed(&response);
    match parsed.status() {
        ParseStatus::Parsed => {}
        ParseStatus::PartiallyParsed { missing } => {
            let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
            warn!(missing = %missing.join(", "), "Generated recipe is missing sections");
        }
        ParseStatus::Unparseable => {
            warn!(chars = response.len(), "Generated recipe could not be parsed");
            return Err(GourmetError::UnparseableResponse);
        }
    }

    Ok(parsed.recipe)
}
