use crate::di::{DiError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type AnyInstance = Arc<dyn Any + Send + Sync>;

/// Turns a registered implementation into an `Arc<dyn Trait>`, itself boxed
/// as `Arc<dyn Any>`. Returns `None` when the instance is not the bound type.
type CasterFn = Arc<dyn Fn(AnyInstance) -> Option<AnyInstance> + Send + Sync>;

struct TraitBinding {
    impl_id: TypeId,
    caster: CasterFn,
}

impl Clone for TraitBinding {
    fn clone(&self) -> Self {
        Self {
            impl_id: self.impl_id,
            caster: Arc::clone(&self.caster),
        }
    }
}

/// Thread-safe dependency injection container.
///
/// Every provider is a singleton: `resolve` hands out clones of one `Arc`,
/// so stateful providers such as the in-memory user store are shared by all
/// of their dependents.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyInstance>,
    bindings: DashMap<TypeId, TraitBinding>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_shared(Arc::new(instance))
    }

    /// Register an instance that is already shared elsewhere
    fn register_shared<T: 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        tracing::trace!(provider = std::any::type_name::<T>(), "provider registered");
        self.services.insert(TypeId::of::<T>(), instance as AnyInstance);
        self
    }

    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let caster: CasterFn = Arc::new(move |instance: AnyInstance| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyInstance)
        });

        self.bindings.insert(
            TypeId::of::<Trait>(),
            TraitBinding {
                impl_id: TypeId::of::<Impl>(),
                caster,
            },
        );
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self
            .services
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(DiError::not_found::<T>)?;

        instance
            .downcast::<T>()
            .map_err(|_| DiError::downcast_failed::<T>())
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let binding = self
            .bindings
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(DiError::not_found::<T>)?;

        let instance = self
            .services
            .get(&binding.impl_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DiError::DependencyNotFound {
                type_name: format!(
                    "implementation bound to '{}' is not registered",
                    std::any::type_name::<T>()
                ),
            })?;

        // The caster yields an Arc<dyn Any> wrapping the Arc<T>
        let wrapper = (binding.caster)(instance)
            .ok_or_else(DiError::downcast_failed::<T>)?
            .downcast::<Arc<T>>()
            .map_err(|_| DiError::downcast_failed::<T>())?;

        Ok(Arc::clone(wrapper.as_ref()))
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.bindings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting {
        text: &'static str,
    }

    trait Counter: Send + Sync {
        fn value(&self) -> i32;
    }

    struct FixedCounter {
        value: i32,
    }

    impl Counter for FixedCounter {
        fn value(&self) -> i32 {
            self.value
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut container = Container::new();
        container.register(Greeting { text: "hello" });
        let greeting = container.resolve::<Greeting>().unwrap();
        assert_eq!(greeting.text, "hello");
    }

    #[test]
    fn test_resolve_returns_shared_instance() {
        let mut container = Container::new();
        container.register(Greeting { text: "shared" });
        let first = container.resolve::<Greeting>().unwrap();
        let second = container.resolve::<Greeting>().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_register_and_resolve_trait() {
        let mut container = Container::new();
        container.register(FixedCounter { value: 99 });
        container.register_trait::<dyn Counter, FixedCounter, _>(|i| i as Arc<dyn Counter>);
        let counter = container.resolve_trait::<dyn Counter>().unwrap();
        assert_eq!(counter.value(), 99);
        assert!(container.contains::<dyn Counter>());
    }

    #[test]
    fn test_missing_dependency_is_reported() {
        let container = Container::new();
        let err = container.resolve::<Greeting>().err().unwrap();
        assert!(matches!(err, DiError::DependencyNotFound { .. }));
    }

    #[test]
    fn test_binding_without_implementation_is_reported() {
        let mut container = Container::new();
        container.register_trait::<dyn Counter, FixedCounter, _>(|i| i as Arc<dyn Counter>);
        let err = container.resolve_trait::<dyn Counter>().err().unwrap();
        assert!(matches!(err, DiError::DependencyNotFound { .. }));
    }
}
