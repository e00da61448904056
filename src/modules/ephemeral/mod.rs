//! In-memory users under `/dijkstra/users/`
//!
//! Nothing is persisted; the sequence lives as long as the process.

use crate::prelude::*;

mod controller;
pub mod model;
mod store;

pub use controller::EphemeralUserController;
pub use store::EphemeralUserStore;

#[module(
    controllers = [EphemeralUserController],
    providers = [EphemeralUserStore]
)]
pub struct EphemeralUserModule;
