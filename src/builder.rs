use std::time::Duration;

use crate::api::MealDbClient;
use crate::config::ApiConfig;
use crate::error::FindError;
use crate::model::Meal;
use crate::search::find_by_ingredients;

/// Represents the query to run against TheMealDB
#[derive(Debug, Clone)]
pub enum Query {
    /// Fetch one arbitrary recipe
    Random,
    /// Find the recipes matching all ingredients in a raw comma-separated list
    Ingredients(String),
}

/// Result of a recipe lookup
#[derive(Debug, Clone)]
pub enum FindResult {
    /// The single record from the random endpoint
    Random(Meal),
    /// All records whose ingredients were covered by the query
    Matches(Vec<Meal>),
}

/// Builder for configuring and executing recipe lookups
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    query: Option<Query>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Ask for one random recipe
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().random();
    /// ```
    pub fn random(mut self) -> Self {
        self.query = Some(Query::Random);
        self
    }

    /// Ask for the recipes matching every ingredient in a comma-separated list
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().ingredients("chicken, rice");
    /// ```
    pub fn ingredients(mut self, raw: impl Into<String>) -> Self {
        self.query = Some(Query::Ingredients(raw.into()));
        self
    }

    /// Override the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .random()
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build and execute the lookup
    ///
    /// # Errors
    /// Returns `FindError` if:
    /// - No query was specified
    /// - Any upstream call fails
    /// - The query legitimately matches nothing (`FindError::is_no_match`)
    pub async fn build(self) -> Result<FindResult, FindError> {
        let query = self.query.ok_or_else(|| {
            FindError::Builder(
                "No query specified. Use .random() or .ingredients()".to_string(),
            )
        })?;

        let mut config = ApiConfig::default();
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs();
        }
        let client = MealDbClient::new(&config);

        match query {
            Query::Random => Ok(FindResult::Random(client.random().await?)),
            Query::Ingredients(raw) => Ok(FindResult::Matches(
                find_by_ingredients(&client, &raw).await?,
            )),
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for recipe lookups
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
