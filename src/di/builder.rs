use crate::di::Container;

/// Builder for constructing a dependency injection container
///
/// Infrastructure that modules depend on but cannot construct themselves,
/// such as the connection pool, is registered here before modules are
/// registered on the built container.
///
/// # Example
/// ```ignore
/// let mut container = ContainerBuilder::new()
///     .register(database.connection().clone())
///     .build();
/// PersistentModule::register(&mut container)?;
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
