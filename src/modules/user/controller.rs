use super::domain::{DeleteConfirmation, ListParams, UserPayload, UserResponse};
use super::service::UserService;
use crate::prelude::*;

#[controller(path = "/users")]
pub struct UserController {
    service: Arc<UserService>,
}

#[routes(UserController)]
impl UserController {
    #[post("/")]
    pub async fn create(&self, #[body] req: UserPayload) -> Result<Json<UserResponse>> {
        let user = self.service.create(req.name).await?;
        Ok(Json(user))
    }

    #[get("/")]
    pub async fn list(&self, #[query] params: ListParams) -> Result<Json<Vec<UserResponse>>> {
        let users = self.service.list(params).await?;
        Ok(Json(users))
    }

    #[get("/{id}")]
    pub async fn get_one(&self, #[param] id: i64) -> Result<Json<UserResponse>> {
        let user = self.service.get(id).await?;
        Ok(Json(user))
    }

    #[patch("/{id}")]
    pub async fn update(
        &self,
        #[param] id: i64,
        #[body] req: UserPayload,
    ) -> Result<Json<UserResponse>> {
        let user = self.service.update(id, req.name).await?;
        Ok(Json(user))
    }

    #[delete("/{id}")]
    pub async fn remove(&self, #[param] id: i64) -> Result<Json<DeleteConfirmation>> {
        self.service.delete(id).await?;
        Ok(Json(DeleteConfirmation::success()))
    }
}
