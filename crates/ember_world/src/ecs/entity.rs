//! # Entity Identifiers
//!
//! An entity is a bare unsigned integer handle with no intrinsic data.
//! Ids come from one process-wide monotonically increasing counter and
//! are never handed out twice; only the *storage slots* associated with
//! an entity are ever recycled.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Opaque handle identifying a logical object in the scene.
///
/// A single sentinel value ([`Entity::INVALID`]) means "no entity". Every
/// other value is a live handle for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Entity(u32);

impl Entity {
    /// Sentinel for "invalid / no entity".
    pub const INVALID: Self = Self(u32::MAX);

    /// Checks whether this handle refers to an entity at all.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// Returns the raw integer value of this handle.
    ///
    /// Useful for diagnostics and stable sort keys; the value carries no
    /// other meaning.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "entity#{}", self.0)
        } else {
            f.write_str("entity#invalid")
        }
    }
}

/// Allocation starts right past the sentinel, i.e. wraps around to 0.
static NEXT_ENTITY: AtomicU32 = AtomicU32::new(Entity::INVALID.0.wrapping_add(1));

/// Allocator for globally unique entity identifiers.
///
/// The counter is process-wide: every [`World`](super::World) draws from
/// the same id space, so an entity can key components in any number of
/// storages without collision.
///
/// # Thread Safety
///
/// [`EntityRegistry::create`] is the one operation in this crate that is
/// safe to call from multiple threads concurrently; it is a single atomic
/// increment and each call observes a distinct value.
///
/// # Overflow
///
/// The id space wraps past `u32::MAX`. With four billion ids before the
/// first repeat this is an accepted limitation, not a guarded error.
pub struct EntityRegistry;

impl EntityRegistry {
    /// Allocates the next unused entity identifier.
    #[inline]
    #[must_use]
    pub fn create() -> Entity {
        Entity(NEXT_ENTITY.fetch_add(1, Ordering::Relaxed))
    }
}
