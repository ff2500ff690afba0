use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all model and controller tests
/// to ensure consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    // Create an in-memory SQLite database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A well-formed generated recipe covering every section
#[fixture]
pub fn chicken_curry_response() -> &'static str {
    "Recipe Name: Chicken Curry
Servings: 4
Cooking Time: 30 minutes

Ingredients:
- Chicken (500g)
- Rice (2 cups)

Instructions:
1. Cook rice
2. Cook chicken

Nutritional Information:
Calories: 400
"
}
