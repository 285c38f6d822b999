//! # EMBER Scene
//!
//! The scene layer on top of [`ember_world`]: concrete component types
//! (transforms, names, hierarchy links, cameras, lights) and a
//! [`SceneWorld`] that bundles one storage per type behind typed
//! accessors.
//!
//! ## Design Rules
//!
//! 1. **Components are data** - behavior lives in the systems that walk
//!    the storages, never in the component types
//! 2. **GPU-facing components are Pod** - a storage's dense array can be
//!    handed to a uniform buffer without repacking
//! 3. **One sweep per frame** - [`SceneWorld::update`] is the only place
//!    compaction runs during a frame loop

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod components;
mod scene_world;

pub use components::{Camera, Hierarchy, Light, Name, Transform};
pub use scene_world::SceneWorld;
