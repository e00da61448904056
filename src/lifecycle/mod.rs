//! Application lifecycle
//!
//! ```text
//! 1. Configuration loading
//! 2. Container creation, module registration
//! 3. OnModuleInit (each provider, in registration order)
//! 4. Server start
//!    [running]
//! 5. Shutdown signal (SIGTERM/SIGINT), server drains
//! 6. OnModuleDestroy (each provider, in reverse order)
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnModuleDestroy, OnModuleInit};
