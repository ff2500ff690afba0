use thiserror::Error;

#[derive(Error, Debug)]
pub enum GourmetError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("No recipe generated")]
    EmptyResponse,

    #[error("No ingredients provided")]
    NoIngredients,

    #[error("The recipe response could not be understood")]
    UnparseableResponse,

    #[error("User not logged in")]
    NotLoggedIn,

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GourmetError>;
