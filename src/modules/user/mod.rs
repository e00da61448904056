//! Persistent users under `/users/`

use crate::prelude::*;
use crate::session::SessionFactory;

mod controller;
pub mod domain;
pub mod entity;
mod repository;
mod service;

pub use controller::UserController;
pub use repository::{SeaOrmUserRepository, UserRepository};
pub use service::UserService;

#[module(
    controllers = [UserController],
    providers = [SessionFactory, SeaOrmUserRepository, UserService],
    bindings = [(dyn UserRepository => SeaOrmUserRepository)],
)]
pub struct UserModule;
