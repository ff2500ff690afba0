//! Command-line front end for the recipe assistant.
//!
//! ```bash
//! # Identify ingredients from a photo or a free-text list
//! gourmet identify --image fridge.jpg
//! gourmet identify --text "two eggs, a bit of flour and some milk"
//!
//! # Generate a recipe and keep it
//! gourmet generate -i "Chicken:500g" -i "Rice:2 cups" --persons 4 --cuisine Indian --save
//!
//! # Manage favourites
//! gourmet favourites list
//! gourmet favourites remove <id>
//! ```

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use gourmet::api_client::ApiClient;
use gourmet::config::Config;
use gourmet::controllers;
use gourmet::db;
use gourmet::generator::ImageInput;
use gourmet::models::{IngredientRecord, RecipeRecord, RecipeRequest};
use sqlx::SqlitePool;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gourmet", about = "Recipe assistant: identify ingredients, generate recipes, keep favourites")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Backend API base URL override
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Identify ingredients from text or a photo
    Identify {
        #[arg(long, conflicts_with = "image", required_unless_present = "image")]
        text: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Generate a recipe from ingredients
    Generate {
        /// Ingredient as NAME or NAME:QUANTITY, repeatable
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,
        #[arg(long, default_value_t = 2)]
        persons: u32,
        #[arg(long, default_value = "Any")]
        cuisine: String,
        #[arg(long, default_value = "")]
        diet: String,
        #[arg(long, default_value = "Dinner")]
        meal: String,
        /// Save the generated recipe to favourites
        #[arg(long)]
        save: bool,
        /// Share the generated recipe on the community feed
        #[arg(long)]
        share: bool,
    },
    /// Manage favourite recipes
    Favourites {
        #[command(subcommand)]
        action: FavouritesCommand,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Request a password reset code by email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Verify a one-time code
    VerifyOtp { otp: String },
    /// Show the community feed
    Community,
    /// Manage the logged-in profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[derive(Subcommand)]
enum FavouritesCommand {
    List,
    Show { id: String },
    Remove { id: String },
    /// Toggle a server-side bookmark for a favourite
    Bookmark { id: String },
    Clear,
}

#[derive(Subcommand)]
enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    Delete,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    let mut config = Config::from_env();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }

    let pool = db::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    let api = ApiClient::new(&config.api_base_url);

    match cli.command {
        Command::Identify { text, image } => identify(&config, text, image).await?,
        Command::Generate {
            ingredients,
            persons,
            cuisine,
            diet,
            meal,
            save,
            share,
        } => {
            let request = RecipeRequest {
                ingredients: ingredients.iter().map(|s| parse_ingredient_arg(s)).collect(),
                number_of_persons: persons,
                cuisine,
                dietary_restrictions: diet,
                meal_type: meal,
            };
            generate(&config, &api, &pool, &request, save, share).await?;
        }
        Command::Favourites { action } => favourites(&api, &pool, action).await?,
        Command::Login { email, password } => {
            let user_id = controllers::login(&api, &pool, &email, &password).await?;
            println!("Logged in as {}", user_id);
        }
        Command::Logout => {
            controllers::logout(&pool).await?;
            println!("Logged out.");
        }
        Command::Signup {
            name,
            email,
            password,
            confirm_password,
        } => {
            let response =
                controllers::sign_up(&api, &name, &email, &password, &confirm_password).await?;
            println!("{}", message_or(&response.message, "Account created successfully"));
        }
        Command::ForgotPassword { email } => {
            let response = controllers::request_password_reset(&api, &email).await?;
            println!("{}", message_or(&response.message, "Reset code sent"));
        }
        Command::VerifyOtp { otp } => {
            let response = controllers::verify_otp(&api, &pool, &otp).await?;
            println!("{}", message_or(&response.message, "Code verified"));
        }
        Command::Profile { action } => profile(&api, &pool, action).await?,
        Command::Community => community(&api, &pool).await?,
    }

    Ok(())
}

async fn identify(config: &Config, text: Option<String>, image: Option<PathBuf>) -> anyhow::Result<()> {
    let generator = config.gemini_generator()?;

    let ingredients = match (text, image) {
        (_, Some(path)) => {
            let image = ImageInput::from_path(&path)
                .await
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            controllers::identify_ingredients_from_image(&generator, &image).await?
        }
        (Some(text), None) => controllers::identify_ingredients_from_text(&generator, &text).await?,
        (None, None) => bail!("Provide --text or --image"),
    };

    if ingredients.is_empty() {
        println!("No ingredients identified.");
    }
    for ingredient in &ingredients {
        println!("{}: {}", ingredient.name, ingredient.quantity);
    }

    Ok(())
}

async fn generate(
    config: &Config,
    api: &ApiClient,
    pool: &SqlitePool,
    request: &RecipeRequest,
    save: bool,
    share: bool,
) -> anyhow::Result<()> {
    let generator = config.gemini_generator()?;
    let recipe = controllers::generate_recipe(&generator, request)
        .await
        .context("Failed to generate recipe")?;

    print_recipe(&recipe);

    if save {
        let id = controllers::save_favorite_recipe(pool, &recipe).await?;
        println!("\nRecipe saved to favourites with ID: {}", id);
    }

    if share {
        controllers::share_recipe(api, pool, &recipe, request)
            .await
            .context("Failed to share recipe")?;
        println!("Recipe shared successfully!");
    }

    Ok(())
}

async fn favourites(api: &ApiClient, pool: &SqlitePool, action: FavouritesCommand) -> anyhow::Result<()> {
    match action {
        FavouritesCommand::List => {
            let recipes = controllers::get_favorite_recipes(pool).await?;
            if recipes.is_empty() {
                println!("No favourite recipes yet.");
            }
            for recipe in &recipes {
                println!(
                    "{}  {} ({} servings, {}, {})",
                    recipe.id.as_deref().unwrap_or("-"),
                    recipe.name,
                    recipe.servings,
                    recipe.cooking_time,
                    recipe.difficulty()
                );
            }
        }
        FavouritesCommand::Show { id } => {
            let recipe = controllers::get_favorite_recipe(pool, &id).await?;
            print_recipe(&recipe);
        }
        FavouritesCommand::Remove { id } => {
            if controllers::remove_favorite_recipe(pool, &id).await? {
                println!("Recipe removed from favourites");
            } else {
                println!("No favourite recipe with ID {}", id);
            }
        }
        FavouritesCommand::Bookmark { id } => {
            let recipe = controllers::get_favorite_recipe(pool, &id).await?;
            controllers::toggle_bookmark(api, pool, &id, &recipe).await?;
            println!("Bookmark toggled for {}", recipe.name);
        }
        FavouritesCommand::Clear => {
            controllers::clear_favorite_recipes(pool).await?;
            println!("Favourites cleared.");
        }
    }

    Ok(())
}

async fn profile(api: &ApiClient, pool: &SqlitePool, action: ProfileCommand) -> anyhow::Result<()> {
    match action {
        ProfileCommand::Show => {
            let user = controllers::fetch_profile(api, pool).await?;
            println!("{} <{}>", user.name, user.email);
        }
        ProfileCommand::Update { name, email } => {
            let user = controllers::update_profile(api, pool, &name, &email).await?;
            println!("Profile updated: {} <{}>", user.name, user.email);
        }
        ProfileCommand::Delete => {
            controllers::delete_account(api, pool).await?;
            println!("Account deleted.");
        }
    }

    Ok(())
}

async fn community(api: &ApiClient, pool: &SqlitePool) -> anyhow::Result<()> {
    let feed = controllers::community_feed(api, pool)
        .await
        .context("Failed to load community feed")?;

    if feed.is_empty() {
        println!("No posts available.");
    }
    for entry in &feed {
        println!(
            "{}  👍 {}  👎 {}",
            entry.author_name(),
            entry.post.likes.len(),
            entry.post.dislikes.len()
        );
        println!("{}\n", entry.post.content.trim_end());
    }

    Ok(())
}

/// `Rice:2 cups` -> (Rice, 2 cups); a bare name has no quantity
fn parse_ingredient_arg(arg: &str) -> IngredientRecord {
    match arg.split_once(':') {
        Some((name, quantity)) => IngredientRecord::new(name.trim(), quantity.trim()),
        None => IngredientRecord::new(arg.trim(), ""),
    }
}

fn message_or<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.is_empty() { fallback } else { message }
}

fn print_recipe(recipe: &RecipeRecord) {
    println!("{}", recipe.name);
    println!("\nServings: {}", recipe.servings);
    println!("Cooking Time: {}", recipe.cooking_time);
    println!("Difficulty: {}", recipe.difficulty());

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  • {}: {}", ingredient.name, ingredient.quantity);
    }

    println!("\nInstructions:");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, instruction);
    }

    if !recipe.nutrients.is_empty() {
        println!("\nNutritional Information:");
        for (nutrient, value) in &recipe.nutrients {
            println!("  {}: {}", nutrient, value);
        }
    }
}
