use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::RecipeFilter;
use crate::domain::recipe::models::RecipeListQuery;
use crate::domain::recipe::models::RecipePage;
use crate::domain::recipe::models::RecipeSort;
use crate::domain::recipe::models::SortOrder;
use crate::domain::recipe::ports::RecipeServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_recipes(
    State(state): State<AppState>,
    viewer: Option<Extension<AuthenticatedUser>>,
    Query(params): Query<RecipeListParams>,
) -> Result<ApiSuccess<RecipePage>, ApiError> {
    let viewer = viewer.map(|Extension(authenticated)| authenticated.user_id);

    state
        .recipe_service
        .list_recipes(params.into_query(), viewer)
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page))
}

/// Raw query parameters for recipe listing.
///
/// Unparseable values fall back to defaults instead of rejecting the
/// request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeListParams {
    search: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    max_time: Option<String>,
    sort: Option<String>,
    order: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

impl RecipeListParams {
    fn into_query(self) -> RecipeListQuery {
        RecipeListQuery {
            filter: RecipeFilter {
                search: normalize(self.search),
                category: normalize(self.category),
                difficulty: normalize(self.difficulty),
                max_time: parse_positive(self.max_time.as_deref()),
            },
            sort: RecipeSort::parse(self.sort.as_deref().unwrap_or_default()),
            order: SortOrder::parse(self.order.as_deref().unwrap_or_default()),
            page: parse_positive(self.page.as_deref()).unwrap_or(1),
            limit: parse_positive(self.limit.as_deref()).unwrap_or(10),
        }
    }
}

/// Trim a text parameter and drop it entirely when blank.
pub(super) fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a numeric parameter, keeping only values greater than zero.
pub(super) fn parse_positive(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse().ok()).filter(|n| *n > 0)
}
