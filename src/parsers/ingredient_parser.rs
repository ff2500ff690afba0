use crate::models::IngredientRecord;

/// Parse an ingredient identification response made of `Name: Quantity` lines.
///
/// Lines without a colon are dropped. Everything after the first colon is the
/// quantity, so `Time: 10:30` yields the quantity `10:30`.
pub fn parse_ingredients_response(response: &str) -> Vec<IngredientRecord> {
    response
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(name, quantity)| IngredientRecord::new(name.trim(), quantity.trim()))
        .collect()
}

/// Parse the body of a bulleted recipe ingredient, e.g. `Chicken (500g)`.
///
/// When the line ends with `)`, the quantity is the group that closing
/// parenthesis balances, so `Egg (1 (large))` keeps `1 (large)` and
/// `Flour (all-purpose) (2 cups)` keeps `Flour (all-purpose)` as the name.
/// Otherwise the last `(` opens the quantity and text after its `)` is ignored.
pub fn parse_ingredient_line(text: &str) -> IngredientRecord {
    let text = text.trim();

    if let Some(inner) = text.strip_suffix(')') {
        if let Some(open) = matching_open_paren(inner) {
            return IngredientRecord::new(text[..open].trim(), inner[open + 1..].trim());
        }
    }

    match text.rfind('(') {
        Some(open) => {
            let annotation = &text[open + 1..];
            let quantity = match annotation.find(')') {
                Some(close) => &annotation[..close],
                None => annotation,
            };
            IngredientRecord::new(text[..open].trim(), quantity.trim())
        }
        None => IngredientRecord::new(text, ""),
    }
}

/// Index of the `(` balancing a `)` that follows `text`
fn matching_open_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in text.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' if depth == 0 => return Some(index),
            '(' => depth -= 1,
            _ => {}
        }
    }
    None
}
