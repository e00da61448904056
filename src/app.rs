//! Composition root: container, lifecycle and router

use crate::config::{ServerConfig, Variant};
use crate::di::{Container, ContainerBuilder, DiError};
use crate::error::Result;
use crate::infrastructure::Database;
use crate::lifecycle::Application;
use crate::module::Module;
use crate::modules::ephemeral::EphemeralUserController;
use crate::modules::landing::LandingController;
use crate::modules::user::UserController;
use crate::modules::{EphemeralUserModule, PersistentModule};
use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Register the modules `variant` serves
///
/// The persistent modules need `conn`.
pub fn build_container(variant: Variant, conn: Option<DatabaseConnection>) -> Result<Container> {
    let mut container = match conn {
        Some(conn) => ContainerBuilder::new().register(conn).build(),
        None => Container::new(),
    };

    if variant.serves_ephemeral() {
        EphemeralUserModule::register(&mut container)?;
    }

    if variant.serves_persistent() {
        if !container.contains::<DatabaseConnection>() {
            return Err(DiError::ModuleRegistrationFailed {
                message: format!("{} requires a database connection", PersistentModule::name()),
            }
            .into());
        }
        PersistentModule::register(&mut container)?;
    }

    tracing::debug!(%variant, providers = container.len(), "container built");
    Ok(container)
}

/// Merge the routers of every registered controller
pub fn build_router(container: &Container, variant: Variant) -> Result<Router> {
    let mut router = Router::new();

    if variant.serves_ephemeral() {
        router = router.merge(EphemeralUserController::router::<()>(
            container.resolve::<EphemeralUserController>()?,
        ));
    }

    if variant.serves_persistent() {
        router = router
            .merge(LandingController::router::<()>(
                container.resolve::<LandingController>()?,
            ))
            .merge(UserController::router::<()>(container.resolve::<UserController>()?));
    }

    Ok(router.layer(TraceLayer::new_for_http()))
}

/// Connect, register, run init hooks and build the router
///
/// The database is only opened when the persistent variant is served.
pub async fn bootstrap(config: &ServerConfig) -> Result<(Application, Router)> {
    let database = if config.variant.serves_persistent() {
        Some(Arc::new(RwLock::new(
            Database::connect(&config.database).await?,
        )))
    } else {
        None
    };

    let conn = match &database {
        Some(database) => Some(database.read().await.connection().clone()),
        None => None,
    };

    let container = build_container(config.variant, conn)?;

    let mut builder = Application::builder()
        .container(container)
        .init_timeout(config.init_timeout);
    if let Some(database) = database {
        builder = builder.register_lifecycle(database, "Database");
    }
    let app = builder.build().await?;

    let router = build_router(app.container(), config.variant)?;
    Ok((app, router))
}
