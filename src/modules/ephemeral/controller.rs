use super::model::{CreateUser, User, UserLookup};
use super::store::EphemeralUserStore;
use crate::prelude::*;

#[controller(path = "/dijkstra/users")]
pub struct EphemeralUserController {
    store: Arc<EphemeralUserStore>,
}

#[routes(EphemeralUserController)]
impl EphemeralUserController {
    #[post("/")]
    pub async fn create(&self, #[body] req: CreateUser) -> Json<User> {
        Json(self.store.create(req.name))
    }

    #[get("/")]
    pub async fn list(&self) -> Json<Vec<User>> {
        Json(self.store.list())
    }

    #[get("/{user_id}")]
    pub async fn get_one(&self, #[param] user_id: i64) -> Json<UserLookup> {
        Json(self.store.get(user_id).into())
    }
}
