use crate::di::{Container, Result};

/// A group of providers and controllers registered together
///
/// Implemented by the `#[module]` macro.
///
/// # Example
/// ```ignore
/// #[module(
///     controllers = [EphemeralUserController],
///     providers = [EphemeralUserStore],
/// )]
/// pub struct EphemeralUserModule;
///
/// EphemeralUserModule::register(&mut container)?;
/// ```
pub trait Module {
    /// Name used in logs
    fn name() -> &'static str;

    /// Register all bindings, imports, providers and controllers of this module
    fn register(container: &mut Container) -> Result<()>;
}
