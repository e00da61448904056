mod builder;
mod container;
mod error;
mod injectable;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use error::{DiError, Result};
pub use injectable::Injectable;
