use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::models::MatchMode;
use crate::domain::recipe::models::MatchedRecipe;
use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeDetails;
use crate::domain::recipe::models::RecipeFilter;
use crate::domain::recipe::models::RecipeIngredient;
use crate::domain::recipe::models::RecipeListQuery;
use crate::domain::recipe::models::RecipePage;
use crate::domain::recipe::models::ShoppingList;
use crate::domain::user::models::UserId;

/// Port for recipe catalog operations.
///
/// `viewer` carries the authenticated identity of the request, if any;
/// it only ever adds the per-user `is_liked` flag and never restricts
/// what is returned.
#[async_trait]
pub trait RecipeServicePort: Send + Sync + 'static {
    /// List recipes with filtering, sorting, and pagination.
    async fn list_recipes(
        &self,
        query: RecipeListQuery,
        viewer: Option<UserId>,
    ) -> Result<RecipePage, RecipeError>;

    /// Fetch one recipe with its ingredient lines.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    async fn recipe_details(
        &self,
        id: i64,
        viewer: Option<UserId>,
    ) -> Result<RecipeDetails, RecipeError>;

    /// Rank recipes against a set of available ingredients.
    async fn find_by_ingredients(
        &self,
        ingredient_ids: &[i64],
        mode: MatchMode,
        limit: i64,
    ) -> Result<Vec<MatchedRecipe>, RecipeError>;

    /// Ingredient lines still needed for a recipe, minus the `have`
    /// set.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    async fn shopping_list(
        &self,
        recipe_id: i64,
        have: &HashSet<i64>,
    ) -> Result<ShoppingList, RecipeError>;
}

/// Persistence operations for the recipe catalog.
#[async_trait]
pub trait RecipeRepository: Send + Sync + 'static {
    /// Count recipes matching the filter.
    async fn count(&self, filter: &RecipeFilter) -> Result<i64, RecipeError>;

    /// Fetch one page of recipes matching the query.
    async fn list(
        &self,
        query: &RecipeListQuery,
        viewer: Option<UserId>,
        offset: i64,
    ) -> Result<Vec<Recipe>, RecipeError>;

    /// Fetch a recipe by id.
    async fn find_by_id(&self, id: i64, viewer: Option<UserId>)
        -> Result<Option<Recipe>, RecipeError>;

    /// Check whether a recipe exists.
    async fn exists(&self, id: i64) -> Result<bool, RecipeError>;

    /// Fetch the ingredient lines of a recipe.
    async fn ingredients_for(&self, recipe_id: i64) -> Result<Vec<RecipeIngredient>, RecipeError>;

    /// Rank recipes against an ingredient set.
    async fn find_by_ingredients(
        &self,
        ingredient_ids: &[i64],
        mode: MatchMode,
        limit: i64,
    ) -> Result<Vec<MatchedRecipe>, RecipeError>;
}
