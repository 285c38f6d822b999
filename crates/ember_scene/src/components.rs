//! # Scene Components
//!
//! The data records a scene attaches to entities. Every type here is
//! default-constructible (the storage hands out default instances) and
//! registered with the [`SceneWorld`](crate::SceneWorld) at construction.
//!
//! `Transform`, `Camera`, and `Light` are `Pod`: their storages' dense
//! arrays are submitted to the GPU as uniform data without repacking, so
//! owners compact those storages before submission to keep the arrays
//! free of garbage slots.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use ember_world::{Component, Entity};

/// Local-to-world placement of an entity.
///
/// Translation, rotation (quaternion, `xyzw`), and non-uniform scale are
/// the inputs; the cached column-major matrix is rebuilt on demand with
/// [`Transform::build`] after any of them change.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Transform {
    /// World-space translation.
    pub translation: [f32; 3],
    /// Rotation quaternion, `[x, y, z, w]`.
    pub rotation: [f32; 4],
    /// Per-axis scale.
    pub scale: [f32; 3],
    /// Cached column-major transformation matrix; valid after `build`.
    matrix: [[f32; 4]; 4],
}

impl Transform {
    const IDENTITY_MATRIX: [[f32; 4]; 4] = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    /// Returns the cached transformation matrix.
    ///
    /// Stale until [`Transform::build`] has run after the last field
    /// change.
    #[inline]
    #[must_use]
    pub const fn matrix(&self) -> &[[f32; 4]; 4] {
        &self.matrix
    }

    /// Rebuilds the cached matrix as translation * rotation * scale.
    pub fn build(&mut self) {
        let [x, y, z, w] = self.rotation;
        let [sx, sy, sz] = self.scale;

        let r00 = 1.0 - 2.0 * (y * y + z * z);
        let r01 = 2.0 * (x * y - z * w);
        let r02 = 2.0 * (x * z + y * w);
        let r10 = 2.0 * (x * y + z * w);
        let r11 = 1.0 - 2.0 * (x * x + z * z);
        let r12 = 2.0 * (y * z - x * w);
        let r20 = 2.0 * (x * z - y * w);
        let r21 = 2.0 * (y * z + x * w);
        let r22 = 1.0 - 2.0 * (x * x + y * y);

        self.matrix = [
            [r00 * sx, r10 * sx, r20 * sx, 0.0],
            [r01 * sy, r11 * sy, r21 * sy, 0.0],
            [r02 * sz, r12 * sz, r22 * sz, 0.0],
            [
                self.translation[0],
                self.translation[1],
                self.translation[2],
                1.0,
            ],
        ];
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
            matrix: Self::IDENTITY_MATRIX,
        }
    }
}

impl Component for Transform {}

/// Perspective camera parameters.
///
/// Projection math belongs to the renderer; this component only carries
/// the values it reads.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near_plane: f32,
    /// Far clip plane distance.
    pub far_plane: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near_plane: 0.1,
            far_plane: 1_000.0,
        }
    }
}

impl Component for Camera {}

/// Punctual light parameters.
///
/// Padded to 32 bytes so the storage's dense array matches the uniform
/// buffer layout the lighting pass expects.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Light {
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Radiant intensity multiplier.
    pub intensity: f32,
    /// Influence radius in world units.
    pub range: f32,
    /// Explicit padding; keep zeroed.
    pub _padding: [f32; 3],
}

impl Default for Light {
    fn default() -> Self {
        Self {
            color: [1.0; 3],
            intensity: 1.0,
            range: 10.0,
            _padding: [0.0; 3],
        }
    }
}

impl Component for Light {}

/// Human-readable entity label with a cached lookup hash.
///
/// Comparisons go through the hash so editor-side searches over large
/// entity lists stay cheap.
#[derive(Clone, Debug, Default)]
pub struct Name {
    name: String,
    name_hash: u64,
}

impl Name {
    /// Sets the label and refreshes the cached hash.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.name_hash = hash_label(&self.name);
    }

    /// Returns the label.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cached label hash.
    #[inline]
    #[must_use]
    pub const fn name_hash(&self) -> u64 {
        self.name_hash
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.name_hash == other.name_hash
    }
}

impl Eq for Name {}

impl Component for Name {}

fn hash_label(label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    hasher.finish()
}

/// Parent link in the scene graph.
///
/// `Entity::INVALID` as parent marks a scene root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hierarchy {
    /// The parent entity, or [`Entity::INVALID`] for roots.
    pub parent: Entity,
}

impl Hierarchy {
    /// Checks whether this entity sits at the top of the scene graph.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        !self.parent.is_valid()
    }
}

impl Component for Hierarchy {}
