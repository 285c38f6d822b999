//! # EMBER World
//!
//! Entity-component storage for a real-time scene runtime:
//! - Entities are bare `u32` handles from a process-wide atomic registry
//! - Components of one type live in dense, index-aligned arrays
//! - Removal is O(1) and leaves a garbage slot; compaction is deferred
//!   until the owner calls for it (typically once per frame)
//!
//! ## Design Rules
//!
//! 1. **Dense always** - component data stays contiguous for iteration
//! 2. **Removal never shifts** - other entities' indices stay valid
//! 3. **Misuse aborts** - contract violations are engine bugs, not errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use ember_world::{Component, World};
//!
//! #[derive(Default)]
//! struct Health { points: u32 }
//! impl Component for Health {}
//!
//! let mut world = World::new();
//! world.register::<Health>();
//! let entity = world.create_entity();
//! world.create_component::<Health>(entity).points = 100;
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod ecs;

pub use ecs::{Component, ComponentStorage, Entity, EntityRegistry, World};
