use std::collections::BTreeMap;

use serde::Serialize;

/// Per-category row counts for both catalog tables.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCounts {
    pub ingredient_categories: BTreeMap<String, i64>,
    pub recipe_categories: BTreeMap<String, i64>,
}

/// Aggregate catalog statistics.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogStats {
    pub total_ingredients: i64,
    pub total_recipes: i64,
    pub avg_prep_time: f64,
    pub avg_cook_time: f64,
    pub difficulty_distribution: BTreeMap<String, i64>,
}
