//! # Component Storage
//!
//! Dense, per-type component storage with deferred compaction.
//!
//! The storage keeps two index-aligned dense arrays (entity ids and
//! component values) plus a sparse map from entity to dense index:
//!
//! ```text
//! entities:        [e7, e2, e9]          <- dense, no gaps in memory
//! components:      [C7, C2, C9]          <- index-aligned with entities
//! entity_to_index: {e7:0, e2:1, e9:2}    <- sparse-to-dense mapping
//! unused_indexes:  []                    <- garbage slots awaiting reclaim
//! ```
//!
//! Removal only marks a slot as garbage; the arrays never shift until
//! [`ComponentStorage::clean_unused`] runs. That keeps removal O(1) and,
//! crucially, keeps every other entity's dense index valid.

use std::collections::HashMap;

use super::component::Component;
use super::entity::Entity;

/// Storage for every component of a single type.
///
/// Guarantees:
/// - O(1) amortized create, lookup, and remove by entity
/// - Component values stay contiguous for cache-friendly iteration
/// - Removing one entity's component never moves another entity's data
///
/// `capacity()` counts total dense slots (live + garbage) and only drops
/// back to `count()` when the owner calls [`Self::clean_unused`].
///
/// # Type Parameters
///
/// * `C` - The component type to store
///
/// # Example
///
/// ```rust,ignore
/// let mut storage: ComponentStorage<Health> = ComponentStorage::new();
/// storage.create(entity).points = 100;
/// ```
pub struct ComponentStorage<C: Component> {
    /// Dense array of owning entity ids, index-aligned with `components`.
    entities: Vec<Entity>,
    /// Dense array of component values.
    components: Vec<C>,
    /// Sparse-to-dense mapping; its key set is exactly the live entities.
    entity_to_index: HashMap<Entity, usize>,
    /// Dense indices holding stale data from removed components.
    unused_indexes: Vec<usize>,
}

impl<C: Component> ComponentStorage<C> {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            components: Vec::new(),
            entity_to_index: HashMap::new(),
            unused_indexes: Vec::new(),
        }
    }

    /// Checks whether `entity` currently has a live component here.
    #[inline]
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.entity_to_index.contains_key(&entity)
    }

    /// Returns the number of live components.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.entity_to_index.len()
    }

    /// Returns the total number of dense slots, live and garbage alike.
    ///
    /// Always `count() + pending garbage`; equal to `count()` right after
    /// [`Self::clean_unused`].
    ///
    /// # Panics
    ///
    /// Panics if the two dense arrays ever disagree in length. That can
    /// only happen through a bug in this module.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        assert_eq!(
            self.entities.len(),
            self.components.len(),
            "entity and component arrays out of step"
        );
        self.entities.len()
    }

    /// Returns the raw dense entity list.
    ///
    /// The slice may contain stale ids for slots whose component was
    /// removed but not yet compacted; filter with [`Self::contains`] when
    /// iterating. Per-frame render/UI loops walk this slice directly.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the dense component values as one contiguous slice.
    ///
    /// Index-aligned with [`Self::entities`] and, like it, containing
    /// stale values for garbage slots until compaction. Batch passes
    /// (uniform upload, whole-storage rebuilds) run [`Self::clean_unused`]
    /// first and then walk this slice gap-free.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.components
    }

    /// Returns the dense component values mutably, for batch processing.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.components
    }

    /// Gets the live component for `entity`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&C> {
        let index = *self.entity_to_index.get(&entity)?;
        Some(&self.components[index])
    }

    /// Gets the live component for `entity` mutably, if any.
    ///
    /// The returned reference is valid only until the next structural
    /// mutation (create past capacity, remove, or compaction).
    #[inline]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut C> {
        let index = *self.entity_to_index.get(&entity)?;
        Some(&mut self.components[index])
    }

    /// Creates a default-initialized component for `entity`.
    ///
    /// Reuses a garbage slot when one is pending, so a remove/create churn
    /// cycle does not grow the arrays. The caller populates the fields
    /// through the returned reference.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is [`Entity::INVALID`] or already has a
    /// component in this storage. Both are engine bugs at the call site,
    /// not runtime conditions.
    pub fn create(&mut self, entity: Entity) -> &mut C {
        assert!(
            entity.is_valid(),
            "cannot create a component for the invalid entity"
        );
        assert!(!self.contains(entity), "{entity} already has this component");

        if let Some(reused) = self.unused_indexes.pop() {
            self.entities[reused] = entity;
            self.components[reused] = C::default();
            self.entity_to_index.insert(entity, reused);
            return &mut self.components[reused];
        }

        let index = self.components.len();
        self.entity_to_index.insert(entity, index);
        self.entities.push(entity);
        self.components.push(C::default());
        &mut self.components[index]
    }

    /// Removes the component for `entity`; a no-op when absent.
    ///
    /// The dense slot is only marked as garbage. Shifting the arrays here
    /// would invalidate every index behind the slot, so reclamation waits
    /// for [`Self::clean_unused`].
    pub fn remove(&mut self, entity: Entity) {
        let Some(index) = self.entity_to_index.remove(&entity) else {
            return;
        };
        self.unused_indexes.push(index);
    }

    /// Reclaims every garbage slot, restoring `capacity() == count()`.
    ///
    /// Standard swap-and-pop compaction: holes are sorted ascending, then
    /// the dense arrays are scanned from the back. A live back element is
    /// swapped into the earliest remaining hole; a stale back element is
    /// simply popped. The scan stops once exactly one back element per
    /// hole has been consumed.
    ///
    /// Live component values survive with their entities; only their
    /// dense indices change. Callers must drop any component references
    /// across this call.
    pub fn clean_unused(&mut self) {
        if self.unused_indexes.is_empty() {
            return;
        }

        if self.entity_to_index.is_empty() {
            // Nothing is live; every slot is garbage.
            self.entities.clear();
            self.components.clear();
            self.unused_indexes.clear();
            tracing::trace!("storage fully cleared, no live components remained");
            return;
        }

        self.unused_indexes.sort_unstable();

        let holes = self.unused_indexes.len();
        let mut swaps = 0_usize;
        let mut skips = 0_usize;
        // The map is the liveness test for the whole scan, so index
        // remaps are buffered here and applied after the scan ends.
        let mut remapped: Vec<(Entity, usize)> = Vec::with_capacity(holes);

        while swaps + skips < holes {
            let back = self.entities.len() - 1;
            let entity = self.entities[back];
            // A slot is live only if the map points back at it. The id
            // alone is not enough: a removed-then-recreated entity can
            // still sit in its old slot as a stale duplicate.
            if self.entity_to_index.get(&entity) == Some(&back) {
                // Live data at the back: move it into the earliest hole.
                let hole = self.unused_indexes[swaps];
                swaps += 1;
                self.entities[hole] = entity;
                self.components.swap(hole, back);
                remapped.push((entity, hole));
            } else {
                // The back slot is itself a hole; popping it is enough.
                skips += 1;
            }
            self.entities.pop();
            self.components.pop();
        }

        for (entity, index) in remapped {
            debug_assert!(self.entity_to_index.contains_key(&entity));
            self.entity_to_index.insert(entity, index);
        }

        self.unused_indexes.clear();
        tracing::trace!(
            "compacted storage: reclaimed {} slots, {} live",
            holes,
            self.count()
        );
    }

    /// Iterates over live `(entity, component)` pairs.
    ///
    /// Garbage slots are skipped, so this is safe to call between a
    /// removal and the next compaction.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &C)> {
        self.entities
            .iter()
            .zip(self.components.iter())
            .enumerate()
            .filter(|&(index, (entity, _))| self.entity_to_index.get(entity) == Some(&index))
            .map(|(_, (&entity, component))| (entity, component))
    }
}

impl<C: Component> Default for ComponentStorage<C> {
    fn default() -> Self {
        Self::new()
    }
}
