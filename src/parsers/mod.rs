mod ingredient_parser;
mod recipe_parser;

pub use ingredient_parser::{parse_ingredient_line, parse_ingredients_response};
pub use recipe_parser::{
    ParseStatus, RecipeParse, RecipeSection, parse_recipe_response, parse_recipe_response_detailed,
};
