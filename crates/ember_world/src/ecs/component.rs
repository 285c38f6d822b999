//! # Component Marker
//!
//! Components are plain data records attached to entities. The storage
//! default-initializes every new instance, so the only real requirement
//! is [`Default`].

/// Marker trait for component types.
///
/// A type implements `Component` to opt into storage in a
/// [`ComponentStorage`](super::ComponentStorage) and registration with a
/// [`World`](super::World). Implementations are deliberately explicit
/// (no blanket impl): one declared component type maps to exactly one
/// registered storage.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Health {
///     points: u32,
/// }
///
/// impl Component for Health {}
/// ```
pub trait Component: Default + 'static {}
