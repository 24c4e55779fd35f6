use mockito::{Matcher, Mock, Server, ServerGuard};
use recipe_finder::{find_by_ingredients, FindError, MealDbClient};

fn filter_body(names: &[&str]) -> String {
    let meals: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"strMeal": "{}", "strMealThumb": "https://example.com/{}.jpg", "idMeal": "{}"}}"#,
                name,
                i,
                i + 1
            )
        })
        .collect();
    format!(r#"{{"meals": [{}]}}"#, meals.join(","))
}

fn search_body(name: &str) -> String {
    format!(
        r#"{{"meals": [{{"idMeal": "42", "strMeal": "{}", "strInstructions": "Cook it.",
            "strIngredient1": "Chicken", "strMeasure1": "1 lb"}}]}}"#,
        name
    )
}

fn mock_filter(server: &mut ServerGuard, ingredient: &str, names: &[&str]) -> Mock {
    server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), ingredient.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(filter_body(names))
}

fn mock_search(server: &mut ServerGuard, name: &str) -> Mock {
    server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), name.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body(name))
}

#[tokio::test]
async fn finds_the_recipes_common_to_all_ingredients() {
    let mut server = Server::new_async().await;
    let chicken = mock_filter(
        &mut server,
        "chicken",
        &["Chicken Curry", "Chicken Fried Rice"],
    )
    .create_async()
    .await;
    let rice = mock_filter(&mut server, "rice", &["Chicken Fried Rice", "Rice Pudding"])
        .create_async()
        .await;
    let resolve = mock_search(&mut server, "Chicken Fried Rice")
        .expect(1)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let recipes = find_by_ingredients(&client, "chicken,rice").await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Chicken Fried Rice");
    chicken.assert_async().await;
    rice.assert_async().await;
    resolve.assert_async().await;
}

#[tokio::test]
async fn first_empty_ingredient_short_circuits_the_rest() {
    let mut server = Server::new_async().await;
    let tofu = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "tofu".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .expect(1)
        .create_async()
        .await;
    let rice = mock_filter(&mut server, "rice", &["Rice Pudding"])
        .expect(0)
        .create_async()
        .await;
    let resolve = server
        .mock("GET", "/search.php")
        .expect(0)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = find_by_ingredients(&client, "tofu, rice").await.unwrap_err();

    match err {
        FindError::NoneForIngredient(token) => assert_eq!(token, "tofu"),
        other => panic!("expected NoneForIngredient, got {:?}", other),
    }
    tofu.assert_async().await;
    rice.assert_async().await;
    resolve.assert_async().await;
}

#[tokio::test]
async fn intersection_is_commutative() {
    // Same underlying data queried in both orders yields the same name set.
    let mut server = Server::new_async().await;
    let _chicken = mock_filter(
        &mut server,
        "chicken",
        &["Chicken Curry", "Chicken Fried Rice"],
    )
    .expect(2)
    .create_async()
    .await;
    let _rice = mock_filter(
        &mut server,
        "rice",
        &["Rice Pudding", "Chicken Fried Rice", "Chicken Curry"],
    )
    .expect(2)
    .create_async()
    .await;
    let _curry = mock_search(&mut server, "Chicken Curry")
        .expect(2)
        .create_async()
        .await;
    let _fried_rice = mock_search(&mut server, "Chicken Fried Rice")
        .expect(2)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let forward = find_by_ingredients(&client, "chicken,rice").await.unwrap();
    let reverse = find_by_ingredients(&client, "rice,chicken").await.unwrap();

    // The result list order is unspecified, so compare as sorted name sets.
    let mut forward: Vec<String> = forward.into_iter().map(|m| m.name).collect();
    let mut reverse: Vec<String> = reverse.into_iter().map(|m| m.name).collect();
    forward.sort();
    reverse.sort();
    assert_eq!(forward, vec!["Chicken Curry", "Chicken Fried Rice"]);
    assert_eq!(forward, reverse);
}

#[tokio::test]
async fn disjoint_ingredient_matches_are_no_common_recipes() {
    let mut server = Server::new_async().await;
    let _chicken = mock_filter(&mut server, "chicken", &["Chicken Curry"])
        .create_async()
        .await;
    let _rice = mock_filter(&mut server, "rice", &["Rice Pudding"])
        .create_async()
        .await;
    let resolve = server
        .mock("GET", "/search.php")
        .expect(0)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = find_by_ingredients(&client, "chicken,rice").await.unwrap_err();

    assert!(matches!(err, FindError::NoCommonRecipes));
    assert!(err.is_no_match());
    resolve.assert_async().await;
}

#[tokio::test]
async fn empty_input_makes_no_network_calls() {
    let mut server = Server::new_async().await;
    let filter = server
        .mock("GET", "/filter.php")
        .expect(0)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = find_by_ingredients(&client, " , ,, ").await.unwrap_err();

    assert!(matches!(err, FindError::NoIngredients));
    assert!(err.is_no_match());
    filter.assert_async().await;
}

#[tokio::test]
async fn transport_failure_aborts_the_whole_search() {
    let mut server = Server::new_async().await;
    let _chicken = mock_filter(&mut server, "chicken", &["Chicken Curry"])
        .create_async()
        .await;
    let _rice = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "rice".into()))
        .with_status(500)
        .create_async()
        .await;
    let resolve = server
        .mock("GET", "/search.php")
        .expect(0)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = find_by_ingredients(&client, "chicken,rice").await.unwrap_err();

    assert!(matches!(err, FindError::Transport(_)));
    assert!(!err.is_no_match());
    resolve.assert_async().await;
}

#[tokio::test]
async fn surviving_name_that_resolves_to_nothing_is_an_empty_response() {
    // The filter and search endpoints can disagree; never index blindly.
    let mut server = Server::new_async().await;
    let _chicken = mock_filter(&mut server, "chicken", &["Chicken Curry"])
        .create_async()
        .await;
    let _resolve = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "Chicken Curry".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url());
    let err = find_by_ingredients(&client, "chicken").await.unwrap_err();

    assert!(matches!(
        err,
        FindError::EmptyResponse {
            endpoint: "search.php"
        }
    ));
    assert!(!err.is_no_match());
}
