use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::models::MatchMode;
use crate::domain::recipe::models::MatchedRecipe;
use crate::domain::recipe::models::RecipeDetails;
use crate::domain::recipe::models::RecipeListQuery;
use crate::domain::recipe::models::RecipePage;
use crate::domain::recipe::models::ShoppingList;
use crate::domain::recipe::ports::RecipeRepository;
use crate::domain::recipe::ports::RecipeServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for recipe catalog operations.
pub struct RecipeService<RR>
where
    RR: RecipeRepository,
{
    repository: Arc<RR>,
}

impl<RR> RecipeService<RR>
where
    RR: RecipeRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> RecipeServicePort for RecipeService<RR>
where
    RR: RecipeRepository,
{
    async fn list_recipes(
        &self,
        query: RecipeListQuery,
        viewer: Option<UserId>,
    ) -> Result<RecipePage, RecipeError> {
        let total = self.repository.count(&query.filter).await?;

        let total_pages = (total + query.limit - 1) / query.limit;
        let has_next = query.page < total_pages;
        let offset = (query.page - 1) * query.limit;

        let recipes = self.repository.list(&query, viewer, offset).await?;

        Ok(RecipePage {
            recipes,
            total,
            page: query.page,
            page_size: query.limit,
            total_pages,
            has_next,
        })
    }

    async fn recipe_details(
        &self,
        id: i64,
        viewer: Option<UserId>,
    ) -> Result<RecipeDetails, RecipeError> {
        let recipe = self
            .repository
            .find_by_id(id, viewer)
            .await?
            .ok_or(RecipeError::NotFound(id))?;

        let ingredients = self.repository.ingredients_for(id).await?;

        Ok(RecipeDetails {
            recipe,
            ingredients,
        })
    }

    async fn find_by_ingredients(
        &self,
        ingredient_ids: &[i64],
        mode: MatchMode,
        limit: i64,
    ) -> Result<Vec<MatchedRecipe>, RecipeError> {
        self.repository
            .find_by_ingredients(ingredient_ids, mode, limit)
            .await
    }

    async fn shopping_list(
        &self,
        recipe_id: i64,
        have: &HashSet<i64>,
    ) -> Result<ShoppingList, RecipeError> {
        if !self.repository.exists(recipe_id).await? {
            return Err(RecipeError::NotFound(recipe_id));
        }

        let items = self
            .repository
            .ingredients_for(recipe_id)
            .await?
            .into_iter()
            .filter(|line| !have.contains(&line.ingredient_id))
            .collect();

        Ok(ShoppingList { recipe_id, items })
    }
}
