use super::IngredientRecord;

/// What the user asked for when generating a recipe
#[derive(Debug, Clone)]
pub struct RecipeRequest {
    pub ingredients: Vec<IngredientRecord>,
    pub number_of_persons: u32,
    pub cuisine: String,
    pub dietary_restrictions: String,
    pub meal_type: String,
}

impl RecipeRequest {
    pub fn new(ingredients: Vec<IngredientRecord>) -> Self {
        Self {
            ingredients,
            number_of_persons: 2,
            cuisine: "Any".to_string(),
            dietary_restrictions: String::new(),
            meal_type: "Dinner".to_string(),
        }
    }
}
