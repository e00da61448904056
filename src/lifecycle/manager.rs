//! Lifecycle Manager
//!
//! Keeps the registered hooks and runs them at start-up and shutdown.

use super::{LifecycleError, OnModuleDestroy, OnModuleInit, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

struct LifecycleHook<T: ?Sized> {
    service: Arc<RwLock<T>>,
    name: String,
}

impl<T: ?Sized> LifecycleHook<T> {
    fn new(service: Arc<RwLock<T>>, name: impl Into<String>) -> Self {
        Self {
            service,
            name: name.into(),
        }
    }
}

/// Runs init hooks in registration order and destroy hooks in reverse.
///
/// A failing init hook aborts start-up. A failing destroy hook is logged
/// and the remaining hooks still run.
#[derive(Default)]
pub struct LifecycleManager {
    on_init_hooks: Vec<LifecycleHook<dyn OnModuleInit>>,
    on_destroy_hooks: Vec<LifecycleHook<dyn OnModuleDestroy>>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_init<T>(&mut self, service: Arc<RwLock<T>>, name: impl Into<String>)
    where
        T: OnModuleInit + 'static,
    {
        self.on_init_hooks.push(LifecycleHook::new(service, name));
    }

    pub fn register_destroy<T>(&mut self, service: Arc<RwLock<T>>, name: impl Into<String>)
    where
        T: OnModuleDestroy + 'static,
    {
        self.on_destroy_hooks.push(LifecycleHook::new(service, name));
    }

    pub async fn call_module_init(&self) -> Result<()> {
        for hook in &self.on_init_hooks {
            tracing::debug!(service = %hook.name, "initializing");
            let mut service = hook.service.write().await;
            service.on_module_init().await.map_err(|e| {
                tracing::error!(service = %hook.name, error = %e, "OnModuleInit failed");
                LifecycleError::hook_failed(&hook.name, e.to_string())
            })?;
        }

        tracing::info!(hooks = self.on_init_hooks.len(), "OnModuleInit complete");
        Ok(())
    }

    pub async fn call_module_init_with_timeout(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.call_module_init())
            .await
            .map_err(|_| {
                LifecycleError::timeout("OnModuleInit", format!("Timeout after {:?}", timeout))
            })?
    }

    pub async fn call_module_destroy(&self) -> Result<()> {
        for hook in self.on_destroy_hooks.iter().rev() {
            tracing::debug!(service = %hook.name, "destroying");
            let mut service = hook.service.write().await;
            if let Err(e) = service.on_module_destroy().await {
                tracing::error!(service = %hook.name, error = %e, "OnModuleDestroy failed");
            }
        }

        tracing::info!(hooks = self.on_destroy_hooks.len(), "OnModuleDestroy complete");
        Ok(())
    }
}
