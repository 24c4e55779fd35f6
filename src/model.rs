use serde::Deserialize;
use std::collections::HashMap;

/// Response envelope shared by every TheMealDB endpoint.
///
/// The API signals "no matches" either with `"meals": null` or by leaving
/// the key out entirely; both deserialize to `None` here.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct MealsResponse<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

impl<T> MealsResponse<T> {
    /// The matched records, empty when the API reported no matches.
    pub fn records(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// The slim record returned by the filter-by-ingredient endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// One full recipe record as returned by the random and search endpoints.
///
/// The API spreads up to 20 ingredient/measure pairs over numbered fields
/// (`strIngredient1`..`strIngredient20`); those land in the flattened map
/// and come back out through [`Meal::ingredient_pairs`]. A field holding
/// `null`, a missing field, and a field holding only whitespace all mean
/// the same thing: not present.
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: String,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Option<String>>,
}

/// One present ingredient slot, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientPair {
    pub name: String,
    pub measure: Option<String>,
}

impl Meal {
    /// Link to the original recipe write-up, if the record carries one.
    pub fn source(&self) -> Option<&str> {
        non_blank(&self.source)
    }

    /// Link to the recipe video, if the record carries one.
    pub fn youtube(&self) -> Option<&str> {
        non_blank(&self.youtube)
    }

    /// The present ingredient/measure pairs in slot order (1 through 20).
    ///
    /// A slot whose ingredient is absent or blank is skipped entirely,
    /// measure included.
    pub fn ingredient_pairs(&self) -> Vec<IngredientPair> {
        (1..=20)
            .filter_map(|i| {
                let name = self.slot(&format!("strIngredient{i}"))?;
                let measure = self.slot(&format!("strMeasure{i}"));
                Some(IngredientPair {
                    name: name.to_string(),
                    measure: measure.map(str::to_string),
                })
            })
            .collect()
    }

    fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).and_then(non_blank)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
