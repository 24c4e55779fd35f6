use crate::config::ApiConfig;
use crate::error::FindError;
use crate::model::{Meal, MealSummary, MealsResponse};
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for TheMealDB's three read-only endpoints.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    /// Fetch one arbitrary recipe from the random endpoint.
    ///
    /// The endpoint is documented to return exactly one record; an empty
    /// list is treated as a broken response rather than indexed blindly.
    pub async fn random(&self) -> Result<Meal, FindError> {
        let url = format!("{}/random.php", self.base_url);
        debug!("GET {}", url);
        let response: MealsResponse<Meal> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .records()
            .into_iter()
            .next()
            .ok_or(FindError::EmptyResponse {
                endpoint: "random.php",
            })
    }

    /// List the recipes that use one ingredient. Empty means no matches.
    pub async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, FindError> {
        let url = format!("{}/filter.php", self.base_url);
        debug!("GET {} i={}", url, ingredient);
        let response: MealsResponse<MealSummary> = self
            .client
            .get(&url)
            .query(&[("i", ingredient)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.records())
    }

    /// Look up a recipe's full record by name, taking the first match.
    pub async fn search_by_name(&self, name: &str) -> Result<Option<Meal>, FindError> {
        let url = format!("{}/search.php", self.base_url);
        debug!("GET {} s={}", url, name);
        let response: MealsResponse<Meal> = self
            .client
            .get(&url)
            .query(&[("s", name)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.records().into_iter().next())
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}
