use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::list_recipes::normalize;
use super::list_recipes::parse_positive;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::ingredient::models::IngredientFilter;
use crate::domain::ingredient::models::IngredientListQuery;
use crate::domain::ingredient::models::IngredientPage;
use crate::domain::ingredient::models::IngredientSort;
use crate::domain::ingredient::ports::IngredientServicePort;
use crate::domain::recipe::models::SortOrder;
use crate::inbound::http::router::AppState;

pub async fn list_ingredients(
    State(state): State<AppState>,
    Query(params): Query<IngredientListParams>,
) -> Result<ApiSuccess<IngredientPage>, ApiError> {
    state
        .ingredient_service
        .list_ingredients(params.into_query())
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page))
}

/// Raw query parameters for ingredient listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientListParams {
    search: Option<String>,
    category: Option<String>,
    sort: Option<String>,
    order: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

impl IngredientListParams {
    fn into_query(self) -> IngredientListQuery {
        IngredientListQuery {
            filter: IngredientFilter {
                search: normalize(self.search),
                category: normalize(self.category),
            },
            sort: IngredientSort::parse(self.sort.as_deref().unwrap_or_default()),
            order: SortOrder::parse(self.order.as_deref().unwrap_or_default()),
            page: parse_positive(self.page.as_deref()).unwrap_or(1),
            limit: parse_positive(self.limit.as_deref()).unwrap_or(10),
        }
    }
}
