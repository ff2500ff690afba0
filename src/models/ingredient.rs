use serde::{Deserialize, Serialize};

/// Placeholder used whenever a quantity (or another textual field) is missing
/// from a generated response.
pub const NOT_SPECIFIED: &str = "Not specified";

/// A single ingredient with a free-form quantity, e.g. `Rice: 2 cups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: String,
}

fn default_quantity() -> String {
    NOT_SPECIFIED.to_string()
}

impl IngredientRecord {
    /// Build a record, substituting [`NOT_SPECIFIED`] for an empty quantity.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        let quantity = quantity.into();
        Self {
            name: name.into(),
            quantity: if quantity.is_empty() {
                default_quantity()
            } else {
                quantity
            },
        }
    }

    /// Format as `name (quantity)`, the shape used inside generation prompts.
    pub fn to_prompt_fragment(&self) -> String {
        format!("{} ({})", self.name, self.quantity)
    }
}
