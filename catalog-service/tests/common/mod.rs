use std::sync::Arc;

use auth::Authenticator;
use catalog_service::domain::ingredient::service::IngredientService;
use catalog_service::domain::recipe::service::RecipeService;
use catalog_service::domain::stats::service::StatsService;
use catalog_service::domain::user::service::UserService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::inbound::http::router::AppState;
use catalog_service::outbound::repositories::SqliteIngredientRepository;
use catalog_service::outbound::repositories::SqliteRecipeRepository;
use catalog_service::outbound::repositories::SqliteStatsRepository;
use catalog_service::outbound::repositories::SqliteUserRepository;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory
/// database.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Same secret as the server; lets tests inspect and forge tokens.
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        seed_catalog(&pool).await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET, 24));

        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let recipe_repository = Arc::new(SqliteRecipeRepository::new(pool.clone()));
        let ingredient_repository = Arc::new(SqliteIngredientRepository::new(pool.clone()));
        let stats_repository = Arc::new(SqliteStatsRepository::new(pool));

        let state = AppState {
            user_service: Arc::new(UserService::new(
                user_repository,
                Arc::clone(&authenticator),
            )),
            recipe_service: Arc::new(RecipeService::new(recipe_repository)),
            ingredient_service: Arc::new(IngredientService::new(ingredient_repository)),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            authenticator,
        };

        let router = create_router(state);
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Server task failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(TEST_SECRET, 24),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user and return the response body.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> serde_json::Value {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }

    /// Register a user and return just the access token.
    pub async fn register_for_token(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> String {
        let body = self.register(username, email, password).await;
        body["data"]["token"]
            .as_str()
            .expect("Registration returned no token")
            .to_string()
    }
}

/// Small fixed catalog the tests can make exact assertions about.
async fn seed_catalog(pool: &SqlitePool) {
    let ingredients = [
        (1, "Tomato", "Vegetables", 18, "Fresh red tomatoes"),
        (2, "Onion", "Vegetables", 40, "Sweet yellow onions"),
        (3, "Garlic", "Vegetables", 149, "Fresh garlic cloves"),
        (4, "Chicken Breast", "Protein", 165, "Boneless chicken breast"),
        (5, "Rice", "Grains", 130, "Long grain white rice"),
        (6, "Olive Oil", "Seasonings", 884, "Extra virgin olive oil"),
    ];
    for (id, name, category, calories, description) in ingredients {
        sqlx::query(
            "INSERT INTO ingredients (id, name, category, calories_per_100g, description) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(category)
        .bind(calories)
        .bind(description)
        .execute(pool)
        .await
        .expect("Failed to seed ingredients");
    }

    let recipes = [
        (
            1,
            "Tomato Soup",
            "Dinner",
            10,
            20,
            4,
            "easy",
            "1. Simmer everything",
            "Simple tomato soup",
        ),
        (
            2,
            "Chicken Stir Fry",
            "Dinner",
            15,
            12,
            4,
            "medium",
            "1. Stir fry chicken and vegetables",
            "Quick chicken stir fry",
        ),
        (
            3,
            "Garlic Rice",
            "Side",
            5,
            25,
            6,
            "easy",
            "1. Toast garlic, add rice and cook",
            "Fragrant garlic rice",
        ),
        (
            4,
            "Scrambled Eggs",
            "Breakfast",
            5,
            5,
            2,
            "easy",
            "1. Whisk and cook gently",
            "Fluffy scrambled eggs",
        ),
    ];
    for (id, name, category, prep, cook, servings, difficulty, instructions, description) in recipes
    {
        sqlx::query(
            "INSERT INTO recipes (id, name, category, prep_time_minutes, cook_time_minutes, \
             servings, difficulty, instructions, description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(category)
        .bind(prep)
        .bind(cook)
        .bind(servings)
        .bind(difficulty)
        .bind(instructions)
        .bind(description)
        .execute(pool)
        .await
        .expect("Failed to seed recipes");
    }

    // Recipe 4 deliberately has no ingredient lines.
    let links = [
        (1, 1, 4.0, "large", "ripe"),
        (1, 2, 1.0, "medium", "diced"),
        (1, 3, 2.0, "cloves", "minced"),
        (2, 4, 1.0, "lb", "cut into strips"),
        (2, 2, 1.0, "large", "sliced"),
        (2, 6, 2.0, "tbsp", "for cooking"),
        (2, 5, 2.0, "cups", "cooked"),
        (3, 3, 4.0, "cloves", "minced"),
        (3, 5, 1.5, "cups", "long grain"),
        (3, 6, 2.0, "tbsp", ""),
    ];
    for (recipe_id, ingredient_id, quantity, unit, notes) in links {
        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, unit, notes) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(recipe_id)
        .bind(ingredient_id)
        .bind(quantity)
        .bind(unit)
        .bind(notes)
        .execute(pool)
        .await
        .expect("Failed to seed recipe ingredients");
    }
}
