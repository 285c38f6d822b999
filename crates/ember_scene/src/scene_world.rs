//! # Scene World
//!
//! One [`World`] with every scene component type registered, wrapped in
//! typed accessors so call sites never spell out the generic plumbing.
//! Also keeps the bits of editor state that are about entities rather
//! than components: the current selection and the main camera.

use ember_world::{ComponentStorage, Entity, World};

use crate::components::{Camera, Hierarchy, Light, Name, Transform};

/// Expands to the typed accessor surface for one scene component type:
/// storage getters, per-entity lookup, and removal.
macro_rules! scene_component_apis {
    ($component:ty, $storage:ident, $storage_mut:ident, $get:ident, $get_mut:ident, $remove:ident) => {
        /// Returns the storage holding every component of this type.
        #[inline]
        #[must_use]
        pub fn $storage(&self) -> &ComponentStorage<$component> {
            self.world.components::<$component>()
        }

        /// Returns the storage holding every component of this type,
        /// mutably.
        #[inline]
        pub fn $storage_mut(&mut self) -> &mut ComponentStorage<$component> {
            self.world.components_mut::<$component>()
        }

        /// Gets `entity`'s component of this type, if present.
        #[inline]
        #[must_use]
        pub fn $get(&self, entity: Entity) -> Option<&$component> {
            self.world.get_component::<$component>(entity)
        }

        /// Gets `entity`'s component of this type mutably, if present.
        #[inline]
        pub fn $get_mut(&mut self, entity: Entity) -> Option<&mut $component> {
            self.world.get_component_mut::<$component>(entity)
        }

        /// Removes `entity`'s component of this type; a no-op when
        /// absent.
        #[inline]
        pub fn $remove(&mut self, entity: Entity) {
            self.world.remove_component::<$component>(entity);
        }
    };
}

/// The world a scene runtime and its editor operate on.
///
/// Owns the [`World`], registers each scene component type exactly once
/// at construction, and runs the per-frame maintenance sweep in
/// [`SceneWorld::update`].
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = SceneWorld::new();
/// let entity = scene.create_entity();
/// scene.world_mut().create_component::<Name>(entity).set_name("Sponza");
/// scene.set_selected_entity(entity);
/// ```
pub struct SceneWorld {
    world: World,
    selected_entity: Entity,
    main_camera_entity: Entity,
}

impl SceneWorld {
    /// Creates a scene world with every scene component type registered.
    #[must_use]
    pub fn new() -> Self {
        let mut world = World::new();
        world.register::<Camera>();
        world.register::<Hierarchy>();
        world.register::<Light>();
        world.register::<Name>();
        world.register::<Transform>();

        Self {
            world,
            selected_entity: Entity::INVALID,
            main_camera_entity: Entity::INVALID,
        }
    }

    /// Returns the underlying world.
    #[inline]
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the underlying world mutably, for component creation and
    /// anything else the typed surface does not cover.
    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Allocates a new entity id.
    #[inline]
    #[must_use]
    pub fn create_entity(&self) -> Entity {
        self.world.create_entity()
    }

    /// Removes every scene component attached to `entity` and drops any
    /// selection or camera reference to it.
    ///
    /// The entity id itself stays valid forever; it simply no longer
    /// keys any data here.
    pub fn delete_entity(&mut self, entity: Entity) {
        self.remove_camera(entity);
        self.remove_hierarchy(entity);
        self.remove_light(entity);
        self.remove_name(entity);
        self.remove_transform(entity);

        if self.selected_entity == entity {
            self.selected_entity = Entity::INVALID;
        }
        if self.main_camera_entity == entity {
            self.main_camera_entity = Entity::INVALID;
        }
        tracing::debug!("deleted {entity} from scene");
    }

    /// Marks `entity` as the editor selection.
    #[inline]
    pub fn set_selected_entity(&mut self, entity: Entity) {
        self.selected_entity = entity;
    }

    /// Returns the selected entity, [`Entity::INVALID`] when none.
    #[inline]
    #[must_use]
    pub fn selected_entity(&self) -> Entity {
        self.selected_entity
    }

    /// Marks `entity` as the camera the frame renders through.
    #[inline]
    pub fn set_main_camera_entity(&mut self, entity: Entity) {
        self.main_camera_entity = entity;
    }

    /// Returns the main camera entity, [`Entity::INVALID`] when none.
    #[inline]
    #[must_use]
    pub fn main_camera_entity(&self) -> Entity {
        self.main_camera_entity
    }

    /// Per-frame maintenance: compacts every scene storage.
    ///
    /// This is the owner-driven garbage sweep; it amortizes a frame's
    /// worth of removals into one pass per storage and restores the
    /// gap-free arrays the GPU upload paths rely on. Any component
    /// references held across this call are invalidated.
    pub fn update(&mut self) {
        self.world.components_mut::<Camera>().clean_unused();
        self.world.components_mut::<Hierarchy>().clean_unused();
        self.world.components_mut::<Light>().clean_unused();
        self.world.components_mut::<Name>().clean_unused();
        self.world.components_mut::<Transform>().clean_unused();
    }

    scene_component_apis!(Camera, cameras, cameras_mut, camera, camera_mut, remove_camera);
    scene_component_apis!(
        Hierarchy,
        hierarchies,
        hierarchies_mut,
        hierarchy,
        hierarchy_mut,
        remove_hierarchy
    );
    scene_component_apis!(Light, lights, lights_mut, light, light_mut, remove_light);
    scene_component_apis!(Name, names, names_mut, name, name_mut, remove_name);
    scene_component_apis!(
        Transform,
        transforms,
        transforms_mut,
        transform,
        transform_mut,
        remove_transform
    );
}

impl Default for SceneWorld {
    fn default() -> Self {
        Self::new()
    }
}
