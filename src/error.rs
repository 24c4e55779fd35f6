use thiserror::Error;

/// Errors that can occur while fetching or searching for recipes
#[derive(Error, Debug)]
pub enum FindError {
    /// Network or HTTP-level failure on any upstream call
    #[error("Request to TheMealDB failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose meals list was null or empty where a record
    /// was required (the random and search-by-name endpoints)
    #[error("Empty response from {endpoint}")]
    EmptyResponse { endpoint: &'static str },

    /// No usable ingredient tokens in the user input
    #[error("No ingredients given")]
    NoIngredients,

    /// The filter endpoint returned no recipes for one ingredient
    #[error("No recipes found with the ingredient: {0}")]
    NoneForIngredient(String),

    /// Every ingredient matched something, but no recipe matched them all
    #[error("No recipes found with the specified ingredients")]
    NoCommonRecipes,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FindError {
    /// True for outcomes that are legitimately empty rather than broken.
    ///
    /// Callers render these as warnings and keep going; everything else is
    /// a failure of the request itself.
    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            FindError::NoIngredients
                | FindError::NoneForIngredient(_)
                | FindError::NoCommonRecipes
        )
    }
}
