//! # userhub
//!
//! A small user-management HTTP service with two independent user stores:
//!
//! - an in-memory, ordered sequence served under `/dijkstra/users/`
//! - a relational `users` table (SeaORM) served under `/users/`, with a
//!   landing page at `/`
//!
//! Providers and controllers are wired through a dependency injection
//! container; `#[module]` declarations group them.
//!
//! ```rust,ignore
//! use userhub::app;
//! use userhub::config::{ConfigService, ServerConfig};
//!
//! let config = ServerConfig::from_service(&ConfigService::from_env())?;
//! let (application, router) = app::bootstrap(&config).await?;
//!
//! // axum::serve(listener, router)...
//!
//! application.shutdown().await?;
//! ```

extern crate self as userhub;

pub mod app;
pub mod config;
pub mod di;
pub mod error;
pub mod infrastructure;
pub mod lifecycle;
pub mod messages;
pub mod module;
pub mod modules;
pub mod session;

// Re-export core types
pub use di::{Container, ContainerBuilder, Injectable};
pub use error::{AppError, Result};
pub use module::Module;

// Re-export macros
pub use userhub_macro::{
    Injectable, body, controller, delete, get, module, param, patch, post, query, routes,
};

/// Prelude module for convenient imports
///
/// ```
/// use userhub::prelude::*;
/// ```
pub mod prelude {
    pub use crate::di::{Container, ContainerBuilder};
    pub use crate::error::{AppError, Result};
    pub use crate::lifecycle::{
        Application, ApplicationBuilder, LifecycleError, LifecycleManager, OnModuleDestroy,
        OnModuleInit, shutdown_signal,
    };
    pub use crate::module::Module;
    pub use crate::{
        Injectable, body, controller, delete, get, module, param, patch, post, query, routes,
    };
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Path, Query},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
