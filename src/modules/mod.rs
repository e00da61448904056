use crate::prelude::*;

pub mod ephemeral;
pub mod landing;
pub mod user;

pub use ephemeral::EphemeralUserModule;
pub use landing::LandingModule;
pub use user::UserModule;

/// Landing page and the persistent users API
///
/// Expects a `DatabaseConnection` to be registered before it.
#[module(imports = [LandingModule, UserModule])]
pub struct PersistentModule;
