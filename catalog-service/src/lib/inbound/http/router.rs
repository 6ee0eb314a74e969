use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_liked_recipe::add_liked_recipe;
use super::handlers::change_password::change_password;
use super::handlers::delete_account::delete_account;
use super::handlers::find_recipes_by_ingredients::find_recipes_by_ingredients;
use super::handlers::get_categories::get_categories;
use super::handlers::get_ingredient::get_ingredient;
use super::handlers::get_liked_recipes::get_liked_recipes;
use super::handlers::get_profile::get_profile;
use super::handlers::get_recipe::get_recipe;
use super::handlers::get_shopping_list::get_shopping_list;
use super::handlers::get_stats::get_stats;
use super::handlers::list_ingredients::list_ingredients;
use super::handlers::list_recipes::list_recipes;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::remove_liked_recipe::remove_liked_recipe;
use super::handlers::update_profile::update_profile;
use super::middleware::optional_auth;
use super::middleware::require_auth;
use crate::domain::ingredient::service::IngredientService;
use crate::domain::recipe::service::RecipeService;
use crate::domain::stats::service::StatsService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::SqliteIngredientRepository;
use crate::outbound::repositories::SqliteRecipeRepository;
use crate::outbound::repositories::SqliteStatsRepository;
use crate::outbound::repositories::SqliteUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub recipe_service: Arc<RecipeService<SqliteRecipeRepository>>,
    pub ingredient_service: Arc<IngredientService<SqliteIngredientRepository>>,
    pub stats_service: Arc<StatsService<SqliteStatsRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/recipes/shopping-list/:recipe_id", get(get_shopping_list))
        .route("/api/ingredients", get(list_ingredients))
        .route("/api/ingredients/:ingredient_id", get(get_ingredient))
        .route("/api/categories", get(get_categories))
        .route("/api/stats", get(get_stats));

    let optional_auth_routes = Router::new()
        .route("/api/recipes", get(list_recipes))
        .route("/api/recipes/find-by-ingredients", get(find_recipes_by_ingredients))
        .route("/api/recipes/:recipe_id", get(get_recipe))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth,
        ));

    let protected_routes = Router::new()
        .route("/api/user/profile", get(get_profile))
        .route("/api/user/profile", put(update_profile))
        .route("/api/user/password", put(change_password))
        .route("/api/user/account", delete(delete_account))
        .route("/api/user/liked-recipes", get(get_liked_recipes))
        .route("/api/user/liked-recipes", post(add_liked_recipe))
        .route(
            "/api/user/liked-recipes/:recipe_id",
            delete(remove_liked_recipe),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(optional_auth_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
