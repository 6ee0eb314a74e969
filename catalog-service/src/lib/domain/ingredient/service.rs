use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::models::IngredientDetails;
use crate::domain::ingredient::models::IngredientListQuery;
use crate::domain::ingredient::models::IngredientPage;
use crate::domain::ingredient::ports::IngredientRepository;
use crate::domain::ingredient::ports::IngredientServicePort;

/// Domain service implementation for ingredient catalog operations.
pub struct IngredientService<IR>
where
    IR: IngredientRepository,
{
    repository: Arc<IR>,
}

impl<IR> IngredientService<IR>
where
    IR: IngredientRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> IngredientServicePort for IngredientService<IR>
where
    IR: IngredientRepository,
{
    async fn list_ingredients(
        &self,
        query: IngredientListQuery,
    ) -> Result<IngredientPage, IngredientError> {
        let total = self.repository.count(&query.filter).await?;

        let total_pages = (total + query.limit - 1) / query.limit;
        let has_next = query.page < total_pages;
        let offset = (query.page - 1) * query.limit;

        let ingredients = self.repository.list(&query, offset).await?;

        Ok(IngredientPage {
            ingredients,
            total,
            page: query.page,
            page_size: query.limit,
            total_pages,
            has_next,
        })
    }

    async fn ingredient_details(&self, id: i64) -> Result<IngredientDetails, IngredientError> {
        let ingredient = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(IngredientError::NotFound(id))?;

        let recipes = self.repository.recipes_using(id).await?;

        Ok(IngredientDetails {
            ingredient,
            recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::ingredient::models::Ingredient;
    use crate::domain::ingredient::models::IngredientFilter;
    use crate::domain::recipe::models::Recipe;

    mock! {
        pub TestIngredientRepository {}

        #[async_trait]
        impl IngredientRepository for TestIngredientRepository {
            async fn count(&self, filter: &IngredientFilter) -> Result<i64, IngredientError>;
            async fn list(&self, query: &IngredientListQuery, offset: i64) -> Result<Vec<Ingredient>, IngredientError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, IngredientError>;
            async fn recipes_using(&self, ingredient_id: i64) -> Result<Vec<Recipe>, IngredientError>;
        }
    }

    #[tokio::test]
    async fn test_details_not_found() {
        let mut repository = MockTestIngredientRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_recipes_using().times(0);

        let service = IngredientService::new(Arc::new(repository));

        let result = service.ingredient_details(5).await;
        assert!(matches!(result, Err(IngredientError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_list_empty_catalog() {
        let mut repository = MockTestIngredientRepository::new();

        repository.expect_count().times(1).returning(|_| Ok(0));
        repository
            .expect_list()
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = IngredientService::new(Arc::new(repository));

        let page = service
            .list_ingredients(IngredientListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
    }
}
