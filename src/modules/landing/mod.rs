//! Static landing page at `/`

use crate::prelude::*;

mod controller;
pub mod page;

pub use controller::LandingController;
pub use page::LandingPage;

#[module(controllers = [LandingController], providers = [LandingPage])]
pub struct LandingModule;
