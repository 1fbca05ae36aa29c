use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult, Entity};
use crate::models::{CreateUser, User, UserResponse};
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a user. Email addresses are not required to be unique.
    #[instrument(skip(self, user_data), fields(email = %user_data.email))]
    pub async fn create_user(&self, user_data: CreateUser) -> ApiResult<UserResponse> {
        let user = User::new(user_data.email, user_data.name);
        self.users.insert_user(user.clone()).await?;

        info!(user_id = %user.id, "Created user");
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ApiResult<UserResponse> {
        self.users
            .find_user(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ApiError::not_found(Entity::User))
    }

    /// Fail with NotFound unless the user exists.
    pub async fn ensure_exists(&self, user_id: Uuid) -> ApiResult<()> {
        if self.users.user_exists(user_id).await? {
            Ok(())
        } else {
            Err(ApiError::not_found(Entity::User))
        }
    }

    /// Like [`Self::ensure_exists`], starting from a raw id.
    pub async fn resolve_id(&self, raw: &str) -> ApiResult<Uuid> {
        let user_id = super::parse_id(raw, Entity::User)?;
        self.ensure_exists(user_id).await?;
        Ok(user_id)
    }

    pub(crate) async fn find(&self, user_id: Uuid) -> ApiResult<User> {
        self.users
            .find_user(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found(Entity::User))
    }
}
