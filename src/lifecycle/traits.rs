//! Lifecycle hook traits

use super::LifecycleError;
use async_trait::async_trait;

/// Called once at start-up, before the server accepts requests
///
/// The database provider uses it to create the `users` table when it is
/// missing.
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError>;
}

/// Called once after the server stopped accepting requests
///
/// Hooks run in reverse registration order, so a provider is torn down
/// before the providers it was initialized after.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError>;
}
