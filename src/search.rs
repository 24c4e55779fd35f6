use crate::api::MealDbClient;
use crate::error::FindError;
use crate::model::Meal;
use log::debug;
use std::collections::HashSet;

/// Split a raw ingredient string on commas, trimming each piece and
/// dropping the empty ones.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find every recipe that uses all of the given ingredients.
///
/// Each ingredient is queried against the filter endpoint in the order the
/// user supplied it; the recipe-name sets are intersected as they arrive.
/// A token with no matches at all ends the search right there with
/// [`FindError::NoneForIngredient`] and the remaining tokens are never
/// queried. Names that survive the intersection are resolved to full
/// records through the search endpoint. The order of the returned records
/// follows the name set's iteration order and is not meaningful.
pub async fn find_by_ingredients(
    client: &MealDbClient,
    input: &str,
) -> Result<Vec<Meal>, FindError> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(FindError::NoIngredients);
    }

    let mut common: Option<HashSet<String>> = None;
    for token in &tokens {
        let matches = client.filter_by_ingredient(token).await?;
        if matches.is_empty() {
            return Err(FindError::NoneForIngredient(token.clone()));
        }

        let names: HashSet<String> = matches.into_iter().map(|m| m.name).collect();
        debug!("{} matched {} recipe(s)", token, names.len());
        common = Some(match common {
            None => names,
            Some(set) => set.intersection(&names).cloned().collect(),
        });
    }

    // Tokenize returned at least one token, so the set was seeded.
    let common = common.unwrap_or_default();
    debug!("{} recipe(s) in the intersection", common.len());
    if common.is_empty() {
        return Err(FindError::NoCommonRecipes);
    }

    let mut recipes = Vec::with_capacity(common.len());
    for name in &common {
        let meal = client
            .search_by_name(name)
            .await?
            .ok_or(FindError::EmptyResponse {
                endpoint: "search.php",
            })?;
        recipes.push(meal);
    }

    Ok(recipes)
}
