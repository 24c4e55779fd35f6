pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod search;

pub use api::MealDbClient;
pub use builder::{FindResult, Query, RecipeFinder, RecipeFinderBuilder};
pub use config::ApiConfig;
pub use error::FindError;
pub use model::{IngredientPair, Meal, MealSummary, MealsResponse};
pub use render::{ingredient_line, recipe_link, render_meal, Link};
pub use search::{find_by_ingredients, tokenize};

/// Fetch one random recipe using the ambient configuration.
pub async fn random_recipe() -> Result<Meal, FindError> {
    let client = MealDbClient::new(&ApiConfig::load()?);
    client.random().await
}

/// Find the recipes that use every ingredient in a raw comma-separated
/// list, using the ambient configuration.
pub async fn find_recipes(ingredients: &str) -> Result<Vec<Meal>, FindError> {
    let client = MealDbClient::new(&ApiConfig::load()?);
    find_by_ingredients(&client, ingredients).await
}
