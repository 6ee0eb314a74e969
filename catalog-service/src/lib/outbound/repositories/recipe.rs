use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::QueryBuilder;
use sqlx::Row;
use sqlx::Sqlite;
use sqlx::SqlitePool;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::models::MatchMode;
use crate::domain::recipe::models::MatchedRecipe;
use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeFilter;
use crate::domain::recipe::models::RecipeIngredient;
use crate::domain::recipe::models::RecipeListQuery;
use crate::domain::recipe::ports::RecipeRepository;
use crate::domain::user::models::UserId;

const RECIPE_COLUMNS: &str =
    "id, name, category, prep_time_minutes, cook_time_minutes, servings, difficulty, \
     instructions, description";

impl<'r> sqlx::FromRow<'r, SqliteRow> for Recipe {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            prep_time_minutes: row.try_get("prep_time_minutes")?,
            cook_time_minutes: row.try_get("cook_time_minutes")?,
            servings: row.try_get("servings")?,
            difficulty: row.try_get("difficulty")?,
            instructions: row.try_get("instructions")?,
            description: row.try_get("description")?,
            // Only selected for authenticated viewers; absent column
            // means anonymous.
            is_liked: row.try_get("is_liked").ok(),
        })
    }
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for RecipeIngredient {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            ingredient_id: row.try_get("ingredient_id")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            unit: row.try_get("unit")?,
            notes: row.try_get("notes")?,
        })
    }
}

impl<'r> sqlx::FromRow<'r, SqliteRow> for MatchedRecipe {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let matched: i64 = row.try_get("matched_ingredients_count")?;
        let total: i64 = row.try_get("total_ingredients_count")?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            prep_time_minutes: row.try_get("prep_time_minutes")?,
            cook_time_minutes: row.try_get("cook_time_minutes")?,
            servings: row.try_get("servings")?,
            difficulty: row.try_get("difficulty")?,
            instructions: row.try_get("instructions")?,
            description: row.try_get("description")?,
            matched_ingredients_count: matched,
            total_ingredients_count: total,
            match_score: if total > 0 {
                matched as f64 / total as f64
            } else {
                0.0
            },
        })
    }
}

pub struct SqliteRecipeRepository {
    pool: SqlitePool,
}

impl SqliteRecipeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append the optional per-viewer liked flag to a recipe SELECT.
    fn push_is_liked(qb: &mut QueryBuilder<'_, Sqlite>, viewer: Option<UserId>) {
        if let Some(viewer) = viewer {
            qb.push(
                ", EXISTS(SELECT 1 FROM user_liked_recipes ulr \
                 WHERE ulr.recipe_id = recipes.id AND ulr.user_id = ",
            );
            qb.push_bind(viewer.to_string());
            qb.push(") AS is_liked");
        }
    }

    fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &RecipeFilter) {
        let mut prefix = " WHERE ";

        if let Some(search) = &filter.search {
            let term = format!("%{}%", search);
            qb.push(prefix).push("(name LIKE ");
            qb.push_bind(term.clone());
            qb.push(" OR instructions LIKE ");
            qb.push_bind(term.clone());
            qb.push(" OR description LIKE ");
            qb.push_bind(term);
            qb.push(")");
            prefix = " AND ";
        }

        if let Some(category) = &filter.category {
            qb.push(prefix).push("category = ");
            qb.push_bind(category.clone());
            prefix = " AND ";
        }

        if let Some(difficulty) = &filter.difficulty {
            qb.push(prefix).push("difficulty = ");
            qb.push_bind(difficulty.clone());
            prefix = " AND ";
        }

        if let Some(max_time) = filter.max_time {
            qb.push(prefix)
                .push("(prep_time_minutes + cook_time_minutes) <= ");
            qb.push_bind(max_time);
        }
    }
}

fn db_err(e: sqlx::Error) -> RecipeError {
    RecipeError::DatabaseError(e.to_string())
}

#[async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn count(&self, filter: &RecipeFilter) -> Result<i64, RecipeError> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM recipes");
        Self::push_filters(&mut qb, filter);

        qb.build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)
    }

    async fn list(
        &self,
        query: &RecipeListQuery,
        viewer: Option<UserId>,
        offset: i64,
    ) -> Result<Vec<Recipe>, RecipeError> {
        let mut qb = QueryBuilder::new(format!("SELECT {}", RECIPE_COLUMNS));
        Self::push_is_liked(&mut qb, viewer);
        qb.push(" FROM recipes");
        Self::push_filters(&mut qb, &query.filter);

        qb.push(" ORDER BY ");
        qb.push(query.sort.order_by());
        qb.push(" ");
        qb.push(query.order.sql());

        qb.push(" LIMIT ");
        qb.push_bind(query.limit);
        qb.push(" OFFSET ");
        qb.push_bind(offset);

        qb.build_query_as::<Recipe>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)
    }

    async fn find_by_id(
        &self,
        id: i64,
        viewer: Option<UserId>,
    ) -> Result<Option<Recipe>, RecipeError> {
        let mut qb = QueryBuilder::new(format!("SELECT {}", RECIPE_COLUMNS));
        Self::push_is_liked(&mut qb, viewer);
        qb.push(" FROM recipes WHERE id = ");
        qb.push_bind(id);

        qb.build_query_as::<Recipe>()
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)
    }

    async fn exists(&self, id: i64) -> Result<bool, RecipeError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(exists != 0)
    }

    async fn ingredients_for(&self, recipe_id: i64) -> Result<Vec<RecipeIngredient>, RecipeError> {
        sqlx::query_as::<_, RecipeIngredient>(
            "SELECT ri.ingredient_id, i.name, ri.quantity, ri.unit, ri.notes \
             FROM recipe_ingredients ri \
             JOIN ingredients i ON ri.ingredient_id = i.id \
             WHERE ri.recipe_id = ?",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)
    }

    async fn find_by_ingredients(
        &self,
        ingredient_ids: &[i64],
        mode: MatchMode,
        limit: i64,
    ) -> Result<Vec<MatchedRecipe>, RecipeError> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb = QueryBuilder::new(
            "SELECT r.id, r.name, r.category, r.prep_time_minutes, r.cook_time_minutes, \
             r.servings, r.difficulty, r.instructions, r.description, \
             COUNT(ri.ingredient_id) AS matched_ingredients_count, \
             (SELECT COUNT(*) FROM recipe_ingredients WHERE recipe_id = r.id) \
             AS total_ingredients_count \
             FROM recipes r \
             JOIN recipe_ingredients ri ON r.id = ri.recipe_id \
             WHERE ri.ingredient_id IN (",
        );

        let mut ids = qb.separated(", ");
        for ingredient_id in ingredient_ids {
            ids.push_bind(*ingredient_id);
        }
        ids.push_unseparated(")");

        qb.push(" GROUP BY r.id");

        if mode == MatchMode::Exact {
            qb.push(
                " HAVING COUNT(ri.ingredient_id) = \
                 (SELECT COUNT(*) FROM recipe_ingredients WHERE recipe_id = r.id)",
            );
        }

        qb.push(" ORDER BY matched_ingredients_count DESC, total_ingredients_count ASC LIMIT ");
        qb.push_bind(limit);

        qb.build_query_as::<MatchedRecipe>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)
    }
}
