//! Engine data structures: geometry, meshes, textures and instances.
//!
//! - `geometry` holds CPU-side triangle lists (cube, baking, merging)
//! - `model` contains GPU meshes, vertex layouts and the draw helper
//! - `texture` wraps the depth texture
//! - `instance` holds per-object transforms and their GPU layout

pub mod geometry;
pub mod instance;
pub mod model;
pub mod texture;
