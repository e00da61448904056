use super::domain::{ListParams, UserResponse};
use super::repository::UserRepository;
use crate::error::{AppError, Result};
use crate::messages::Message;
use crate::session::SessionFactory;
use crate::Injectable;
use std::sync::Arc;

/// Each operation is one session: open, apply, commit. Any error drops the
/// session uncommitted.
#[derive(Injectable)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    sessions: Arc<SessionFactory>,
}

impl UserService {
    pub async fn create(&self, name: String) -> Result<UserResponse> {
        let session = self.sessions.open().await?;
        let user = self.repository.insert(&session, name).await?;
        session.commit().await?;

        tracing::info!(user_id = user.id, "user created");
        Ok(user.into())
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<UserResponse>> {
        let session = self.sessions.open().await?;
        let users = self
            .repository
            .find_page(&session, params.offset(), params.page_size())
            .await?;
        session.commit().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserResponse> {
        let session = self.sessions.open().await?;
        let user = self
            .repository
            .find_by_id(&session, id)
            .await?
            .ok_or(AppError::NotFound(Message::UserNotFound))?;
        session.commit().await?;

        Ok(user.into())
    }

    /// Overwrite the name and return the row as stored
    pub async fn update(&self, id: i64, name: String) -> Result<UserResponse> {
        let session = self.sessions.open().await?;
        let user = self
            .repository
            .find_by_id(&session, id)
            .await?
            .ok_or(AppError::NotFound(Message::UserNotFound))?;
        let user = self.repository.rename(&session, user, name).await?;
        session.commit().await?;

        tracing::info!(user_id = id, "user updated");
        Ok(user.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let session = self.sessions.open().await?;
        let user = self
            .repository
            .find_by_id(&session, id)
            .await?
            .ok_or(AppError::NotFound(Message::UserNotFound))?;
        self.repository.delete(&session, user).await?;
        session.commit().await?;

        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
