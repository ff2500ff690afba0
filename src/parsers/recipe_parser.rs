use std::fmt;

use indexmap::IndexMap;

use super::ingredient_parser::parse_ingredient_line;
use crate::models::{
    COOKING_TIME_HEADER, DEFAULT_SERVINGS, INGREDIENTS_HEADER, INSTRUCTIONS_HEADER,
    IngredientRecord, NOT_SPECIFIED, NUTRITION_HEADER, RECIPE_NAME_HEADER, RecipeRecord,
    SERVINGS_HEADER, UNNAMED_RECIPE,
};

/// A section of a generated recipe that the parser looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeSection {
    Name,
    Servings,
    CookingTime,
    Ingredients,
    Instructions,
    Nutrients,
}

impl fmt::Display for RecipeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecipeSection::Name => "name",
            RecipeSection::Servings => "servings",
            RecipeSection::CookingTime => "cooking time",
            RecipeSection::Ingredients => "ingredients",
            RecipeSection::Instructions => "instructions",
            RecipeSection::Nutrients => "nutrients",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    Parsed,
    PartiallyParsed { missing: Vec<RecipeSection> },
    Unparseable,
}

/// A parsed recipe together with the sections that fell back to defaults
#[derive(Debug, Clone)]
pub struct RecipeParse {
    pub recipe: RecipeRecord,
    pub missing: Vec<RecipeSection>,
}

impl RecipeParse {
    /// Unparseable means no name, no ingredients and no instructions were found.
    pub fn status(&self) -> ParseStatus {
        let lost = |section| self.missing.contains(&section);

        if lost(RecipeSection::Name)
            && lost(RecipeSection::Ingredients)
            && lost(RecipeSection::Instructions)
        {
            ParseStatus::Unparseable
        } else if self.missing.is_empty() {
            ParseStatus::Parsed
        } else {
            ParseStatus::PartiallyParsed {
                missing: self.missing.clone(),
            }
        }
    }
}

/// Parse a sectioned recipe response, silently defaulting every missing field
pub fn parse_recipe_response(response: &str) -> RecipeRecord {
    parse_recipe_response_detailed(response).recipe
}

/// Parse a sectioned recipe response and report which sections were missing
pub fn parse_recipe_response_detailed(response: &str) -> RecipeParse {
    let lines: Vec<&str> = response.lines().collect();
    let mut missing = Vec::new();

    let name = header_value(&lines, RECIPE_NAME_HEADER).unwrap_or_else(|| {
        missing.push(RecipeSection::Name);
        UNNAMED_RECIPE
    });

    let servings = header_value(&lines, SERVINGS_HEADER)
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            missing.push(RecipeSection::Servings);
            DEFAULT_SERVINGS
        });

    let cooking_time = header_value(&lines, COOKING_TIME_HEADER).unwrap_or_else(|| {
        missing.push(RecipeSection::CookingTime);
        NOT_SPECIFIED
    });

    let ingredients_start = header_index(&lines, INGREDIENTS_HEADER);
    let instructions_start = header_index(&lines, INSTRUCTIONS_HEADER);
    let nutrition_start = header_index(&lines, NUTRITION_HEADER);

    let ingredients: Vec<IngredientRecord> = match (ingredients_start, instructions_start) {
        (Some(start), Some(end)) if start < end => lines[start + 1..end]
            .iter()
            .filter_map(|line| line.strip_prefix("- "))
            .map(parse_ingredient_line)
            .collect(),
        _ => Vec::new(),
    };
    if ingredients.is_empty() {
        missing.push(RecipeSection::Ingredients);
    }

    let instructions: Vec<String> = match instructions_start {
        Some(start) => {
            let end = nutrition_start.unwrap_or(lines.len());
            if start < end {
                lines[start + 1..end]
                    .iter()
                    .filter_map(|line| strip_step_number(line))
                    .map(str::to_string)
                    .collect()
            } else {
                Vec::new()
            }
        }
        None => Vec::new(),
    };
    if instructions.is_empty() {
        missing.push(RecipeSection::Instructions);
    }

    // Later duplicates overwrite earlier values
    let mut nutrients = IndexMap::new();
    if let Some(start) = nutrition_start {
        for (key, value) in lines[start + 1..]
            .iter()
            .filter_map(|line| line.split_once(':'))
        {
            nutrients.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    if nutrients.is_empty() {
        missing.push(RecipeSection::Nutrients);
    }

    RecipeParse {
        recipe: RecipeRecord {
            id: None,
            name: name.to_string(),
            ingredients,
            instructions,
            cooking_time: cooking_time.to_string(),
            servings,
            nutrients,
            image_url: String::new(),
        },
        missing,
    }
}

/// Value after the first line that starts with `header`
fn header_value<'a>(lines: &[&'a str], header: &str) -> Option<&'a str> {
    lines
        .iter()
        .find_map(|&line| line.strip_prefix(header))
        .map(str::trim)
}

fn header_index(lines: &[&str], header: &str) -> Option<usize> {
    lines.iter().position(|line| line.starts_with(header))
}

/// `12. Stir well` -> `Stir well`; `None` if the line is not a numbered step
fn strip_step_number(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest.strip_prefix('.').map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::chicken_curry_response;
    use rstest::*;

    #[test]
    fn test_parse_name_only() {
        let recipe = parse_recipe_response("Recipe Name: Tomato Soup");

        assert_eq!(recipe.name, "Tomato Soup");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.cooking_time, "Not specified");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.nutrients.is_empty());
        assert_eq!(recipe.id, None);
    }

    #[rstest]
    fn test_parse_complete_recipe(chicken_curry_response: &str) {
        let recipe = parse_recipe_response(chicken_curry_response);

        assert_eq!(recipe.name, "Chicken Curry");
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.cooking_time, "30 minutes");
        assert_eq!(
            recipe.ingredients,
            vec![
                IngredientRecord::new("Chicken", "500g"),
                IngredientRecord::new("Rice", "2 cups"),
            ]
        );
        assert_eq!(recipe.instructions, vec!["Cook rice", "Cook chicken"]);
        assert_eq!(recipe.nutrients.len(), 1);
        assert_eq!(recipe.nutrients["Calories"], "400");
    }

    #[rstest]
    #[case("Servings: several")]
    #[case("Servings:")]
    #[case("Servings: -3")]
    #[case("Servings: 4 people")]
    fn test_parse_non_numeric_servings_defaults_to_two(#[case] line: &str) {
        let recipe = parse_recipe_response(&format!("Recipe Name: Stew\n{}", line));

        assert_eq!(recipe.servings, 2);
    }

    #[test]
    fn test_parse_empty_response_uses_defaults() {
        let parsed = parse_recipe_response_detailed("");

        assert_eq!(parsed.recipe.name, "Unnamed Recipe");
        assert_eq!(parsed.recipe.servings, 2);
        assert_eq!(parsed.recipe.cooking_time, "Not specified");
        assert_eq!(parsed.status(), ParseStatus::Unparseable);
    }

    #[test]
    fn test_parse_first_header_wins() {
        let recipe = parse_recipe_response("Recipe Name: First\nRecipe Name: Second");

        assert_eq!(recipe.name, "First");
    }

    #[test]
    fn test_parse_header_must_start_line() {
        let recipe = parse_recipe_response("  Recipe Name: Indented\n**Recipe Name:** Bold");

        assert_eq!(recipe.name, "Unnamed Recipe");
    }

    #[test]
    fn test_parse_ingredients_require_instructions_header() {
        let response = "Recipe Name: Salad\nIngredients:\n- Lettuce (1 head)\n";

        let recipe = parse_recipe_response(response);

        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_parse_ingredients_ignore_non_bullet_lines() {
        let response = "Ingredients:\nYou will need:\n- Lettuce (1 head)\n* Tomato (2)\n-Cucumber\nInstructions:\n";

        let recipe = parse_recipe_response(response);

        assert_eq!(recipe.ingredients, vec![IngredientRecord::new("Lettuce", "1 head")]);
    }

    #[test]
    fn test_parse_ingredients_after_instructions_is_empty() {
        let response = "Instructions:\n1. Chop\nIngredients:\n- Lettuce (1 head)\n";

        let recipe = parse_recipe_response(response);

        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, vec!["Chop"]);
    }

    #[test]
    fn test_parse_instructions_run_to_end_without_nutrition() {
        let response = "Instructions:\n1. Boil water\nThen wait.\n2.Add pasta\n10. Serve\n";

        let recipe = parse_recipe_response(response);

        assert_eq!(recipe.instructions, vec!["Boil water", "Add pasta", "Serve"]);
    }

    #[test]
    fn test_parse_instructions_stop_at_nutrition() {
        let response = "Instructions:\n1. Mix\nNutritional Information:\n2. Not a step: really\n";

        let recipe = parse_recipe_response(response);

        assert_eq!(recipe.instructions, vec!["Mix"]);
        assert_eq!(recipe.nutrients["2. Not a step"], "really");
    }

    #[test]
    fn test_parse_instructions_after_nutrition_is_empty() {
        let response = "Nutritional Information:\nFat: 3g\nInstructions:\n1. Mix\n";

        let recipe = parse_recipe_response(response);

        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_parse_nutrients_last_duplicate_wins() {
        let response = "Nutritional Information:\nProtein: 10g\nCalories: 300\nProtein: 12g\nEnjoy!\n";

        let recipe = parse_recipe_response(response);

        assert_eq!(recipe.nutrients.len(), 2);
        assert_eq!(recipe.nutrients["Protein"], "12g");
        assert_eq!(recipe.nutrients["Calories"], "300");
    }

    #[test]
    fn test_parse_nutrients_keep_text_after_second_colon() {
        let recipe = parse_recipe_response("Nutritional Information:\nRatio: 1:2\n");

        assert_eq!(recipe.nutrients["Ratio"], "1:2");
    }

    #[rstest]
    fn test_parse_windows_line_endings(chicken_curry_response: &str) {
        let response = chicken_curry_response.replace('\n', "\r\n");

        let recipe = parse_recipe_response(&response);

        assert_eq!(recipe.name, "Chicken Curry");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.instructions, vec!["Cook rice", "Cook chicken"]);
    }

    #[rstest]
    fn test_parse_status_complete(chicken_curry_response: &str) {
        let parsed = parse_recipe_response_detailed(chicken_curry_response);

        assert_eq!(parsed.status(), ParseStatus::Parsed);
    }

    #[test]
    fn test_parse_status_partial() {
        let parsed = parse_recipe_response_detailed("Recipe Name: Tomato Soup");

        assert_eq!(
            parsed.status(),
            ParseStatus::PartiallyParsed {
                missing: vec![
                    RecipeSection::Servings,
                    RecipeSection::CookingTime,
                    RecipeSection::Ingredients,
                    RecipeSection::Instructions,
                    RecipeSection::Nutrients,
                ]
            }
        );
    }

    #[rstest]
    fn test_formatted_recipe_parses_back_unchanged(chicken_curry_response: &str) {
        let mut recipe = parse_recipe_response(chicken_curry_response);
        recipe.ingredients.push(IngredientRecord::new("Salt", NOT_SPECIFIED));
        recipe.ingredients.push(IngredientRecord::new("Egg", "1 (large)"));
        recipe
            .ingredients
            .push(IngredientRecord::new("Flour (all-purpose)", "2 cups"));
        recipe
            .nutrients
            .insert("Protein".to_string(), "25g".to_string());

        let reparsed = parse_recipe_response(&recipe.to_response_text());

        assert_eq!(reparsed, recipe);
    }
}
