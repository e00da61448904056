use super::entity::{self, Entity as Users};
use crate::Injectable;
use crate::session::Session;
use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

/// Storage operations on the `users` table.
///
/// Each call runs inside the caller's session; nothing is committed here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, session: &Session, name: String) -> Result<entity::Model, DbErr>;
    async fn find_by_id(&self, session: &Session, id: i64) -> Result<Option<entity::Model>, DbErr>;
    async fn find_page(
        &self,
        session: &Session,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<entity::Model>, DbErr>;
    async fn rename(
        &self,
        session: &Session,
        user: entity::Model,
        name: String,
    ) -> Result<entity::Model, DbErr>;
    async fn delete(&self, session: &Session, user: entity::Model) -> Result<(), DbErr>;
}

#[derive(Injectable)]
pub struct SeaOrmUserRepository;

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, session: &Session, name: String) -> Result<entity::Model, DbErr> {
        entity::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(session.connection())
        .await
    }

    async fn find_by_id(&self, session: &Session, id: i64) -> Result<Option<entity::Model>, DbErr> {
        Users::find_by_id(id).one(session.connection()).await
    }

    async fn find_page(
        &self,
        session: &Session,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<entity::Model>, DbErr> {
        Users::find()
            .order_by_asc(entity::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(session.connection())
            .await
    }

    async fn rename(
        &self,
        session: &Session,
        user: entity::Model,
        name: String,
    ) -> Result<entity::Model, DbErr> {
        let mut active: entity::ActiveModel = user.into();
        active.name = Set(name);
        active.update(session.connection()).await
    }

    async fn delete(&self, session: &Session, user: entity::Model) -> Result<(), DbErr> {
        Users::delete_by_id(user.id)
            .exec(session.connection())
            .await?;
        Ok(())
    }
}
