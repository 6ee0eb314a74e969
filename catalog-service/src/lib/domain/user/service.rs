use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::PasswordError;
use chrono::Utc;

use crate::domain::recipe::models::Recipe;
use crate::domain::user::models::AuthSession;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// The auth gateway of the system: bridges the password hasher and
/// token service to the user store, and is the single place where
/// authentication failures collapse into their opaque external forms.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<AuthSession, UserError> {
        let taken = self
            .repository
            .identity_taken(command.username.as_str(), command.email.as_str(), None)
            .await?;
        if taken {
            return Err(UserError::IdentityTaken);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let user = self.repository.create(user).await?;
        let token = self.authenticator.issue_token(&user.id.to_string())?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthSession { user, token })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError> {
        // Unknown email and wrong password end the same way: callers
        // must not learn which one happened.
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let user_id = user.id.to_string();
        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &user_id);

        let token = match result {
            Ok(authenticated) => authenticated.access_token,
            Err(AuthenticationError::InvalidCredentials) => {
                return Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::Password(PasswordError::MalformedHash(reason))) => {
                // Logged with full detail, reported like any other
                // failed login.
                tracing::warn!(user_id = %user.id, reason = %reason, "Stored password hash is undecodable");
                return Err(UserError::InvalidCredentials);
            }
            Err(AuthenticationError::Password(e)) => return Err(UserError::Password(e)),
            Err(AuthenticationError::Token(e)) => return Err(UserError::Token(e)),
        };

        Ok(AuthSession { user, token })
    }

    async fn profile(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_profile(
        &self,
        id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let taken = self
            .repository
            .identity_taken(command.username.as_str(), command.email.as_str(), Some(id))
            .await?;
        if taken {
            return Err(UserError::IdentityTaken);
        }

        self.repository.update_profile(id, command).await
    }

    async fn change_password(
        &self,
        id: UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError> {
        let user = self.profile(id).await?;

        let verified = self
            .authenticator
            .verify_password(&command.current_password, &user.password_hash)?;
        if !verified {
            return Err(UserError::IncorrectPassword);
        }

        let password_hash = self.authenticator.hash_password(&command.new_password)?;
        self.repository
            .update_password_hash(id, &password_hash)
            .await
    }

    async fn delete_account(&self, id: UserId, password: &str) -> Result<(), UserError> {
        let user = self.profile(id).await?;

        let verified = self
            .authenticator
            .verify_password(password, &user.password_hash)?;
        if !verified {
            return Err(UserError::IncorrectPassword);
        }

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "Account deleted");

        Ok(())
    }

    async fn liked_recipes(&self, id: UserId) -> Result<Vec<Recipe>, UserError> {
        self.repository.liked_recipes(id).await
    }

    async fn add_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError> {
        self.repository.add_liked_recipe(id, recipe_id).await
    }

    async fn remove_liked_recipe(&self, id: UserId, recipe_id: i64) -> Result<(), UserError> {
        self.repository.remove_liked_recipe(id, recipe_id).await
    }
}
