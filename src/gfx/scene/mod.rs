//! # Scene Model
//!
//! The editor's data model: primitives, the objects that wrap them and the
//! ordered scene that owns those objects.
//!
//! ## Key Components
//!
//! - [`SceneObject`] - One cube, sphere or grid with its generated name
//! - [`Primitive`] - Tagged union holding the per-kind payload
//! - [`Scene`] - Append-only, ordered object collection
//! - [`Rgba`] - 8-bit RGBA color with raylib's palette constants
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use raybuilder::gfx::scene::{Rgba, Scene, SceneObject};
//!
//! let mut scene = Scene::new();
//! scene.push(SceneObject::grid());
//! scene.push(SceneObject::cube(
//!     Vector3::new(0.0, 2.0, 0.0),
//!     Vector3::new(2.0, 2.0, 2.0),
//!     Rgba::RED,
//! ));
//! assert_eq!(scene.len(), 2);
//! ```

pub mod color;
pub mod object;
pub mod scene;

// Re-export main types
pub use color::Rgba;
pub use object::{Primitive, PrimitiveKind, SceneObject};
pub use scene::{Scene, SceneStatistics};
