use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::QueryBuilder;
use sqlx::Row;
use sqlx::Sqlite;
use sqlx::SqlitePool;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::models::Ingredient;
use crate::domain::ingredient::models::IngredientFilter;
use crate::domain::ingredient::models::IngredientListQuery;
use crate::domain::ingredient::ports::IngredientRepository;
use crate::domain::recipe::models::Recipe;

impl<'r> sqlx::FromRow<'r, SqliteRow> for Ingredient {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            calories_per_100g: row.try_get("calories_per_100g")?,
            description: row.try_get("description")?,
        })
    }
}

pub struct SqliteIngredientRepository {
    pool: SqlitePool,
}

impl SqliteIngredientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &IngredientFilter) {
        let mut prefix = " WHERE ";

        if let Some(search) = &filter.search {
            let term = format!("%{}%", search);
            qb.push(prefix).push("(name LIKE ");
            qb.push_bind(term.clone());
            qb.push(" OR description LIKE ");
            qb.push_bind(term);
            qb.push(")");
            prefix = " AND ";
        }

        if let Some(category) = &filter.category {
            qb.push(prefix).push("category = ");
            qb.push_bind(category.clone());
        }
    }
}

fn db_err(e: sqlx::Error) -> IngredientError {
    IngredientError::DatabaseError(e.to_string())
}

#[async_trait]
impl IngredientRepository for SqliteIngredientRepository {
    async fn count(&self, filter: &IngredientFilter) -> Result<i64, IngredientError> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM ingredients");
        Self::push_filters(&mut qb, filter);

        qb.build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)
    }

    async fn list(
        &self,
        query: &IngredientListQuery,
        offset: i64,
    ) -> Result<Vec<Ingredient>, IngredientError> {
        let mut qb = QueryBuilder::new(
            "SELECT id, name, category, calories_per_100g, description FROM ingredients",
        );
        Self::push_filters(&mut qb, &query.filter);

        qb.push(" ORDER BY ");
        qb.push(query.sort.order_by());
        qb.push(" ");
        qb.push(query.order.sql());

        qb.push(" LIMIT ");
        qb.push_bind(query.limit);
        qb.push(" OFFSET ");
        qb.push_bind(offset);

        qb.build_query_as::<Ingredient>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, IngredientError> {
        sqlx::query_as::<_, Ingredient>(
            "SELECT id, name, category, calories_per_100g, description \
             FROM ingredients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)
    }

    async fn recipes_using(&self, ingredient_id: i64) -> Result<Vec<Recipe>, IngredientError> {
        sqlx::query_as::<_, Recipe>(
            "SELECT r.id, r.name, r.category, r.prep_time_minutes, r.cook_time_minutes, \
             r.servings, r.difficulty, r.instructions, r.description \
             FROM recipe_ingredients ri \
             JOIN recipes r ON ri.recipe_id = r.id \
             WHERE ri.ingredient_id = ?",
        )
        .bind(ingredient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)
    }
}
