use serde::Serialize;

use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::SortOrder;

/// A catalog ingredient.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub calories_per_100g: i64,
    pub description: String,
}

/// An ingredient together with the recipes that use it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IngredientDetails {
    pub ingredient: Ingredient,
    pub recipes: Vec<Recipe>,
}

/// Row filters for ingredient listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientFilter {
    /// Substring match over name and description.
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Whitelisted sort keys for ingredient listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngredientSort {
    #[default]
    Name,
    Calories,
}

impl IngredientSort {
    pub fn parse(s: &str) -> Self {
        match s {
            "calories" => Self::Calories,
            _ => Self::Name,
        }
    }

    pub fn order_by(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Calories => "calories_per_100g",
        }
    }
}

/// Normalized listing request: filters plus sort and pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientListQuery {
    pub filter: IngredientFilter,
    pub sort: IngredientSort,
    pub order: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl Default for IngredientListQuery {
    fn default() -> Self {
        Self {
            filter: IngredientFilter::default(),
            sort: IngredientSort::default(),
            order: SortOrder::default(),
            page: 1,
            limit: 10,
        }
    }
}

/// One page of ingredients plus the pagination envelope.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IngredientPage {
    pub ingredients: Vec<Ingredient>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub has_next: bool,
}
