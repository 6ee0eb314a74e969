use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::models::Ingredient;
use crate::domain::ingredient::models::IngredientDetails;
use crate::domain::ingredient::models::IngredientFilter;
use crate::domain::ingredient::models::IngredientListQuery;
use crate::domain::ingredient::models::IngredientPage;
use crate::domain::recipe::models::Recipe;

/// Port for ingredient catalog operations.
#[async_trait]
pub trait IngredientServicePort: Send + Sync + 'static {
    /// List ingredients with filtering, sorting, and pagination.
    async fn list_ingredients(
        &self,
        query: IngredientListQuery,
    ) -> Result<IngredientPage, IngredientError>;

    /// Fetch one ingredient with the recipes that use it.
    ///
    /// # Errors
    /// * `NotFound` - Ingredient does not exist
    async fn ingredient_details(&self, id: i64) -> Result<IngredientDetails, IngredientError>;
}

/// Persistence operations for the ingredient catalog.
#[async_trait]
pub trait IngredientRepository: Send + Sync + 'static {
    /// Count ingredients matching the filter.
    async fn count(&self, filter: &IngredientFilter) -> Result<i64, IngredientError>;

    /// Fetch one page of ingredients matching the query.
    async fn list(
        &self,
        query: &IngredientListQuery,
        offset: i64,
    ) -> Result<Vec<Ingredient>, IngredientError>;

    /// Fetch an ingredient by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, IngredientError>;

    /// Fetch the recipes that use an ingredient.
    async fn recipes_using(&self, ingredient_id: i64) -> Result<Vec<Recipe>, IngredientError>;
}
