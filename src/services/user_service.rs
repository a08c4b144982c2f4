use crate::dto::user_dto::UserPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::repository::user_repository::UserRepository;

/// Business rules on top of the repository: existence checks and the email
/// uniqueness pre-check. Knows nothing about HTTP or SQL.
#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }

    pub async fn create_user(&self, payload: UserPayload) -> Result<User> {
        // Advisory pre-check; the UNIQUE constraint is the final arbiter
        // under concurrent writes.
        if self.repository.find_by_email(&payload.email).await?.is_some() {
            return Err(Error::Conflict("Email already in use".to_string()));
        }

        self.repository.create(&payload.name, &payload.email).await
    }

    pub async fn update_user(&self, id: i64, payload: UserPayload) -> Result<User> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        if payload.email != existing.email {
            if let Some(other) = self.repository.find_by_email(&payload.email).await? {
                if other.id != id {
                    return Err(Error::Conflict(
                        "Email already in use by another user".to_string(),
                    ));
                }
            }
        }

        self.repository
            .update(id, &payload.name, &payload.email)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }

    pub async fn delete_user(&self, id: i64) -> Result<User> {
        self.repository
            .remove(id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }
}
