use std::sync::Arc;

use auth::Authenticator;
use catalog_service::config::Config;
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
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    anyhow::ensure!(
        !config.jwt.secret.is_empty(),
        "jwt.secret must be configured (JWT__SECRET)"
    );

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(max_connections = 5, database = "sqlite", "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

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

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
