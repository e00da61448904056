use crate::di::{Container, Result};

/// Trait for providers that can be built from the DI container
///
/// Usually implemented with `#[derive(Injectable)]`; providers without
/// dependencies (or with state that is not itself a provider) implement it
/// by hand.
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
