use async_trait::async_trait;

use crate::domain::recipe::models::Recipe;
use crate::domain::user::models::AuthSession;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations: account lifecycle,
/// authentication, and liked-recipe bookkeeping.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user and issue an access token.
    ///
    /// # Errors
    /// * `IdentityTaken` - Username or email already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<AuthSession, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password,
    ///   indistinguishable by design
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError>;

    /// Retrieve a user's profile.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn profile(&self, id: UserId) -> Result<User, UserError>;

    /// Update username and email.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `IdentityTaken` - Another user holds the username or email
    async fn update_profile(
        &self,
        id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Replace the stored password hash after verifying the current
    /// password.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `IncorrectPassword` - Current password does not match
    async fn change_password(
        &self,
        id: UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError>;

    /// Delete the account after verifying the password.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `IncorrectPassword` - Password does not match
    async fn delete_account(&self, id: UserId, password: &str) -> Result<(), UserError>;

    /// List the recipes the user has liked.
    async fn liked_recipes(&self, id: UserId) -> Result<Vec<Recipe>, UserError>;

    /// Add a recipe to the user's liked list.
    ///
    /// # Errors
    /// * `RecipeNotFound` - Recipe does not exist
    /// * `AlreadyLiked` - Recipe already in the list
    async fn add_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError>;

    /// Remove a recipe from the user's liked list.
    ///
    /// # Errors
    /// * `NotLiked` - Recipe was not in the list
    async fn remove_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `IdentityTaken` - Unique constraint on username or email hit
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Check whether a username or email is already held by a user
    /// other than `exclude`.
    async fn identity_taken(
        &self,
        username: &str,
        email: &str,
        exclude: Option<UserId>,
    ) -> Result<bool, UserError>;

    /// Update username and email, returning the stored row.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn update_profile(
        &self,
        id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Replace the stored password hash.
    async fn update_password_hash(&self, id: UserId, password_hash: &str)
        -> Result<(), UserError>;

    /// Remove the user and, via cascade, their liked-recipe rows.
    async fn delete(&self, id: UserId) -> Result<(), UserError>;

    /// List the recipes the user has liked.
    async fn liked_recipes(&self, id: UserId) -> Result<Vec<Recipe>, UserError>;

    /// Insert a liked-recipe row.
    ///
    /// # Errors
    /// * `RecipeNotFound` - Recipe does not exist
    /// * `AlreadyLiked` - Row already present
    async fn add_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError>;

    /// Delete a liked-recipe row.
    ///
    /// # Errors
    /// * `NotLiked` - Row was not present
    async fn remove_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError>;
}
