use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::recipe::models::Recipe;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_user(row: &SqliteRow) -> Result<User, UserError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let username: String = row.try_get("username").map_err(db_err)?;
        let email: String = row.try_get("email").map_err(db_err)?;
        let password_hash: String = row.try_get("password_hash").map_err(db_err)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(db_err)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(db_err)?;

        Ok(User {
            id: UserId::from_string(&id)?,
            username: Username::new(username)?,
            email: EmailAddress::new(email)?,
            password_hash,
            created_at,
            updated_at,
        })
    }
}

fn db_err(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            "INSERT INTO users (id, username, email, password_hash, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_error) = e.as_database_error() {
                // The service pre-checks, the unique constraints are
                // the backstop under concurrent registration.
                if db_error.is_unique_violation() {
                    return UserError::IdentityTaken;
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at, updated_at \
             FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(|r| Self::map_user(&r)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            "SELECT id, username, email, password_hash, created_at, updated_at \
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(|r| Self::map_user(&r)).transpose()
    }

    async fn identity_taken(
        &self,
        username: &str,
        email: &str,
        exclude: Option<UserId>,
    ) -> Result<bool, UserError> {
        let taken: i64 = match exclude {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM users \
                     WHERE (username = ? OR email = ?) AND id != ?)",
                )
                .bind(username)
                .bind(email)
                .bind(id.to_string())
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? OR email = ?)",
                )
                .bind(username)
                .bind(email)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(db_err)?;

        Ok(taken != 0)
    }

    async fn update_profile(
        &self,
        id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let result = sqlx::query("UPDATE users SET username = ?, email = ?, updated_at = ? WHERE id = ?")
            .bind(command.username.as_str())
            .bind(command.email.as_str())
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        self.find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_password_hash(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), UserError> {
        let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn liked_recipes(&self, id: UserId) -> Result<Vec<Recipe>, UserError> {
        sqlx::query_as::<_, Recipe>(
            "SELECT r.id, r.name, r.category, r.prep_time_minutes, r.cook_time_minutes, \
             r.servings, r.difficulty, r.instructions, r.description \
             FROM user_liked_recipes ulr \
             JOIN recipes r ON ulr.recipe_id = r.id \
             WHERE ulr.user_id = ?",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)
    }

    async fn add_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError> {
        let recipe_exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?)")
                .bind(recipe_id)
                .fetch_one(&self.pool)
                .await
                .map_err(db_err)?;
        if recipe_exists == 0 {
            return Err(UserError::RecipeNotFound(recipe_id));
        }

        sqlx::query("INSERT INTO user_liked_recipes (user_id, recipe_id) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_error) = e.as_database_error() {
                    if db_error.is_unique_violation() {
                        return UserError::AlreadyLiked(recipe_id);
                    }
                }
                UserError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    async fn remove_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError> {
        let result =
            sqlx::query("DELETE FROM user_liked_recipes WHERE user_id = ? AND recipe_id = ?")
                .bind(id.to_string())
                .bind(recipe_id)
                .execute(&self.pool)
                .await
                .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotLiked(recipe_id));
        }

        Ok(())
    }
}
