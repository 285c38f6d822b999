//! # World
//!
//! The type-keyed collection of component storages. A `World` owns one
//! [`ComponentStorage`] per registered component type and routes typed
//! calls to it; entity ids themselves come from the process-wide
//! [`EntityRegistry`] and are shared freely between storages.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use super::component::Component;
use super::entity::{Entity, EntityRegistry};
use super::storage::ComponentStorage;

/// Container routing component operations to per-type storages.
///
/// Each component type must be registered exactly once before use;
/// registration order does not matter. Duplicate registration and access
/// to an unregistered type are programmer errors and abort.
///
/// A `World` is the sole mutator of the storages it owns. Consumers hold
/// only transient references obtained per-frame; any reference into a
/// storage dies at that storage's next structural mutation.
///
/// # Example
///
/// ```rust,ignore
/// let mut world = World::new();
/// world.register::<Health>();
///
/// let entity = world.create_entity();
/// world.create_component::<Health>(entity).points = 100;
/// assert!(world.components::<Health>().contains(entity));
/// ```
pub struct World {
    /// One type-erased storage per component type. `TypeId` is the
    /// compile-time type key; the concrete storage is recovered by
    /// downcast.
    storages: HashMap<TypeId, Box<dyn Any>>,
}

impl World {
    /// Creates a world with no registered component types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storages: HashMap::new(),
        }
    }

    /// Allocates a globally unique entity id.
    ///
    /// Delegates to [`EntityRegistry`]; the id is unique across every
    /// world in the process, not just this one.
    #[inline]
    #[must_use]
    pub fn create_entity(&self) -> Entity {
        EntityRegistry::create()
    }

    /// Registers storage for component type `C`.
    ///
    /// # Panics
    ///
    /// Panics if `C` is already registered; one storage per type.
    pub fn register<C: Component>(&mut self) -> &mut ComponentStorage<C> {
        let key = TypeId::of::<C>();
        assert!(
            !self.storages.contains_key(&key),
            "component type {} registered twice",
            type_name::<C>()
        );
        self.storages.insert(key, Box::new(ComponentStorage::<C>::new()));
        tracing::debug!("registered component storage for {}", type_name::<C>());
        self.storage_mut::<C>()
    }

    /// Returns the storage for component type `C`.
    ///
    /// # Panics
    ///
    /// Panics if `C` was never registered.
    #[must_use]
    pub fn components<C: Component>(&self) -> &ComponentStorage<C> {
        self.storages
            .get(&TypeId::of::<C>())
            .and_then(|storage| storage.downcast_ref())
            .unwrap_or_else(|| panic!("component type {} is not registered", type_name::<C>()))
    }

    /// Returns the storage for component type `C` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `C` was never registered.
    pub fn components_mut<C: Component>(&mut self) -> &mut ComponentStorage<C> {
        self.storage_mut::<C>()
    }

    /// Creates a default-initialized component of type `C` for `entity`.
    ///
    /// # Panics
    ///
    /// Panics if `C` is unregistered, `entity` is invalid, or `entity`
    /// already has a `C` (see [`ComponentStorage::create`]).
    pub fn create_component<C: Component>(&mut self, entity: Entity) -> &mut C {
        self.storage_mut::<C>().create(entity)
    }

    /// Gets `entity`'s component of type `C`, if present.
    ///
    /// # Panics
    ///
    /// Panics if `C` was never registered.
    #[must_use]
    pub fn get_component<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.components::<C>().get(entity)
    }

    /// Gets `entity`'s component of type `C` mutably, if present.
    ///
    /// # Panics
    ///
    /// Panics if `C` was never registered.
    pub fn get_component_mut<C: Component>(&mut self, entity: Entity) -> Option<&mut C> {
        self.storage_mut::<C>().get_mut(entity)
    }

    /// Removes `entity`'s component of type `C`; a no-op when absent.
    ///
    /// # Panics
    ///
    /// Panics if `C` was never registered.
    pub fn remove_component<C: Component>(&mut self, entity: Entity) {
        self.storage_mut::<C>().remove(entity);
    }

    fn storage_mut<C: Component>(&mut self) -> &mut ComponentStorage<C> {
        self.storages
            .get_mut(&TypeId::of::<C>())
            .and_then(|storage| storage.downcast_mut())
            .unwrap_or_else(|| panic!("component type {} is not registered", type_name::<C>()))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Health {
        points: u32,
    }

    impl Component for Health {}

    #[derive(Default)]
    struct Poise {
        points: u32,
    }

    impl Component for Poise {}

    #[test]
    fn test_register_and_route() {
        let mut world = World::new();
        world.register::<Health>();
        world.register::<Poise>();

        let entity = world.create_entity();
        world.create_component::<Health>(entity).points = 100;
        world.create_component::<Poise>(entity).points = 40;

        assert_eq!(world.get_component::<Health>(entity).map(|h| h.points), Some(100));
        assert_eq!(world.get_component::<Poise>(entity).map(|p| p.points), Some(40));
        assert_eq!(world.components::<Health>().count(), 1);
    }

    #[test]
    fn test_storages_are_independent() {
        let mut world = World::new();
        world.register::<Health>();
        world.register::<Poise>();

        let entity = world.create_entity();
        world.create_component::<Health>(entity);

        assert!(world.components::<Health>().contains(entity));
        assert!(!world.components::<Poise>().contains(entity));

        world.remove_component::<Health>(entity);
        assert!(!world.components::<Health>().contains(entity));
    }

    #[test]
    fn test_mutate_in_place() {
        let mut world = World::new();
        world.register::<Health>();

        let entity = world.create_entity();
        world.create_component::<Health>(entity);
        if let Some(health) = world.get_component_mut::<Health>(entity) {
            health.points = 7;
        }
        assert_eq!(world.get_component::<Health>(entity).map(|h| h.points), Some(7));
    }

    #[test]
    fn test_remove_absent_through_world_is_noop() {
        let mut world = World::new();
        world.register::<Health>();
        world.remove_component::<Health>(world.create_entity());
        assert_eq!(world.components::<Health>().count(), 0);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_register_panics() {
        let mut world = World::new();
        world.register::<Health>();
        world.register::<Health>();
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_unregistered_access_panics() {
        let world = World::new();
        let _ = world.components::<Health>();
    }

    #[test]
    #[should_panic(expected = "is not registered")]
    fn test_unregistered_create_panics() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.create_component::<Health>(entity);
    }
}
