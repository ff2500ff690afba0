use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::IngredientRecord;

pub const RECIPE_NAME_HEADER: &str = "Recipe Name:";
pub const SERVINGS_HEADER: &str = "Servings:";
pub const COOKING_TIME_HEADER: &str = "Cooking Time:";
pub const INGREDIENTS_HEADER: &str = "Ingredients:";
pub const INSTRUCTIONS_HEADER: &str = "Instructions:";
pub const NUTRITION_HEADER: &str = "Nutritional Information:";

pub const UNNAMED_RECIPE: &str = "Unnamed Recipe";
pub const DEFAULT_SERVINGS: u32 = 2;

/// A generated (and possibly favourited) recipe.
///
/// Field names serialize in camelCase so stored favourites keep the same
/// layout as the backend's bookmark payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub ingredients: Vec<IngredientRecord>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: u32,
    pub nutrients: IndexMap<String, String>,
    pub image_url: String,
}

impl Default for RecipeRecord {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            cooking_time: String::new(),
            servings: DEFAULT_SERVINGS,
            nutrients: IndexMap::new(),
            image_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// Classify a recipe by how many steps it takes
pub fn determine_difficulty(recipe: &RecipeRecord) -> Difficulty {
    match recipe.instructions.len() {
        0..=3 => Difficulty::Easy,
        4..=6 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

impl RecipeRecord {
    pub fn difficulty(&self) -> Difficulty {
        determine_difficulty(self)
    }

    /// Render the recipe in the sectioned text layout the recipe parser reads.
    pub fn to_response_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", RECIPE_NAME_HEADER, self.name));
        output.push_str(&format!("{} {}\n", SERVINGS_HEADER, self.servings));
        output.push_str(&format!("{} {}\n", COOKING_TIME_HEADER, self.cooking_time));

        output.push_str(&format!("\n{}\n", INGREDIENTS_HEADER));
        for ingredient in &self.ingredients {
            output.push_str(&format!(
                "- {} ({})\n",
                ingredient.name, ingredient.quantity
            ));
        }

        output.push_str(&format!("\n{}\n", INSTRUCTIONS_HEADER));
        for (index, instruction) in self.instructions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, instruction));
        }

        output.push_str(&format!("\n{}\n", NUTRITION_HEADER));
        for (nutrient, value) in &self.nutrients {
            output.push_str(&format!("{}: {}\n", nutrient, value));
        }

        output
    }
}
