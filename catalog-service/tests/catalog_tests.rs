mod common;

use common::TestApp;
use reqwest::StatusCode;

async fn get_json(app: &TestApp, path: &str) -> serde_json::Value {
    let response = app.get(path).send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_list_recipes_default_sorting() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/recipes").await;

    assert_eq!(body["data"]["total"], 4);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["page_size"], 10);

    let names: Vec<&str> = body["data"]["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Chicken Stir Fry",
            "Garlic Rice",
            "Scrambled Eggs",
            "Tomato Soup"
        ]
    );
}

#[tokio::test]
async fn test_list_recipes_filters() {
    let app = TestApp::spawn().await;

    let by_category = get_json(&app, "/api/recipes?category=Dinner").await;
    assert_eq!(by_category["data"]["total"], 2);

    let by_difficulty = get_json(&app, "/api/recipes?difficulty=easy").await;
    assert_eq!(by_difficulty["data"]["total"], 3);

    let by_max_time = get_json(&app, "/api/recipes?max_time=15").await;
    assert_eq!(by_max_time["data"]["total"], 1);
    assert_eq!(by_max_time["data"]["recipes"][0]["name"], "Scrambled Eggs");

    let by_search = get_json(&app, "/api/recipes?search=garlic").await;
    assert_eq!(by_search["data"]["total"], 1);
    assert_eq!(by_search["data"]["recipes"][0]["name"], "Garlic Rice");
}

#[tokio::test]
async fn test_list_recipes_pagination() {
    let app = TestApp::spawn().await;

    let first = get_json(&app, "/api/recipes?limit=3&page=1").await;
    assert_eq!(first["data"]["total"], 4);
    assert_eq!(first["data"]["total_pages"], 2);
    assert_eq!(first["data"]["has_next"], true);
    assert_eq!(first["data"]["recipes"].as_array().unwrap().len(), 3);

    let second = get_json(&app, "/api/recipes?limit=3&page=2").await;
    assert_eq!(second["data"]["has_next"], false);
    assert_eq!(second["data"]["recipes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_recipes_sorting() {
    let app = TestApp::spawn().await;

    let by_servings = get_json(&app, "/api/recipes?sort=servings&order=desc").await;
    assert_eq!(by_servings["data"]["recipes"][0]["name"], "Garlic Rice");

    let by_total_time = get_json(&app, "/api/recipes?sort=total_time").await;
    assert_eq!(
        by_total_time["data"]["recipes"][0]["name"],
        "Scrambled Eggs"
    );

    // Unknown sort keys quietly fall back to name ordering.
    let unknown_sort = get_json(&app, "/api/recipes?sort=nonsense").await;
    assert_eq!(
        unknown_sort["data"]["recipes"][0]["name"],
        "Chicken Stir Fry"
    );
}

#[tokio::test]
async fn test_recipe_details() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/recipes/1").await;
    assert_eq!(body["data"]["recipe"]["name"], "Tomato Soup");

    let ingredients = body["data"]["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 3);
    assert!(ingredients
        .iter()
        .any(|i| i["name"] == "Tomato" && i["unit"] == "large"));

    let missing = app.get("/api/recipes/999").send().await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let bad_id = app.get("/api/recipes/soup").send().await.unwrap();
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_recipes_by_ingredients_partial() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/recipes/find-by-ingredients?ingredients=1,2,3").await;
    let matches = body["data"].as_array().unwrap();

    // Full match first, then ties ranked by smaller recipes.
    let ids: Vec<i64> = matches.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    assert_eq!(matches[0]["matched_ingredients_count"], 3);
    assert_eq!(matches[0]["total_ingredients_count"], 3);
    assert_eq!(matches[0]["match_score"], 1.0);
}

#[tokio::test]
async fn test_find_recipes_by_ingredients_exact() {
    let app = TestApp::spawn().await;

    let body = get_json(
        &app,
        "/api/recipes/find-by-ingredients?ingredients=1,2,3&match_type=exact",
    )
    .await;
    let matches = body["data"].as_array().unwrap();

    // Only Tomato Soup is fully covered by {1, 2, 3}.
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["id"], 1);
}

#[tokio::test]
async fn test_find_recipes_by_ingredients_rejects_bad_input() {
    let app = TestApp::spawn().await;

    let missing = app
        .get("/api/recipes/find-by-ingredients")
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let unparseable = app
        .get("/api/recipes/find-by-ingredients?ingredients=a,b")
        .send()
        .await
        .unwrap();
    assert_eq!(unparseable.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shopping_list() {
    let app = TestApp::spawn().await;

    let full = get_json(&app, "/api/recipes/shopping-list/2").await;
    assert_eq!(full["data"]["recipe_id"], 2);
    assert_eq!(full["data"]["shopping_list"].as_array().unwrap().len(), 4);

    // Owned ingredients drop out.
    let partial = get_json(&app, "/api/recipes/shopping-list/2?have_ingredients=2,5").await;
    let names: Vec<&str> = partial["data"]["shopping_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Chicken Breast"));
    assert!(names.contains(&"Olive Oil"));

    // A recipe without ingredient lines is still a recipe.
    let empty = get_json(&app, "/api/recipes/shopping-list/4").await;
    assert_eq!(empty["data"]["shopping_list"].as_array().unwrap().len(), 0);

    let missing = app
        .get("/api/recipes/shopping-list/999")
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_ingredients() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/ingredients").await;
    assert_eq!(body["data"]["total"], 6);
    assert_eq!(body["data"]["ingredients"][0]["name"], "Chicken Breast");

    let by_category = get_json(&app, "/api/ingredients?category=Vegetables").await;
    assert_eq!(by_category["data"]["total"], 3);

    let by_calories = get_json(&app, "/api/ingredients?sort=calories&order=desc").await;
    assert_eq!(by_calories["data"]["ingredients"][0]["name"], "Olive Oil");

    let by_search = get_json(&app, "/api/ingredients?search=rice").await;
    assert_eq!(by_search["data"]["total"], 1);
}

#[tokio::test]
async fn test_ingredient_details() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/ingredients/3").await;
    assert_eq!(body["data"]["ingredient"]["name"], "Garlic");

    let recipe_names: Vec<&str> = body["data"]["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(recipe_names.len(), 2);
    assert!(recipe_names.contains(&"Tomato Soup"));
    assert!(recipe_names.contains(&"Garlic Rice"));

    let missing = app.get("/api/ingredients/999").send().await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/categories").await;

    assert_eq!(body["data"]["ingredient_categories"]["Vegetables"], 3);
    assert_eq!(body["data"]["ingredient_categories"]["Protein"], 1);
    assert_eq!(body["data"]["recipe_categories"]["Dinner"], 2);
    assert_eq!(body["data"]["recipe_categories"]["Breakfast"], 1);
}

#[tokio::test]
async fn test_stats() {
    let app = TestApp::spawn().await;

    let body = get_json(&app, "/api/stats").await;

    assert_eq!(body["data"]["total_ingredients"], 6);
    assert_eq!(body["data"]["total_recipes"], 4);
    assert_eq!(body["data"]["difficulty_distribution"]["easy"], 3);
    assert_eq!(body["data"]["difficulty_distribution"]["medium"], 1);
    // (10 + 15 + 5 + 5) / 4
    assert_eq!(body["data"]["avg_prep_time"], 8.75);
}
