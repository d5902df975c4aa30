//! cubefield
//!
//! Renders thousands of cubes with `wgpu` and compares three ways of
//! representing them: one instanced batch, one merged geometry, or one mesh
//! per cube. Runs natively and in the browser.
//!
//! High-level modules
//! - `layout`: grid position of every cube
//! - `representation`: builds the instanced, merged and individual representations
//! - `scene`: owns the active representation and swaps it
//! - `cube_field`: flow that animates the scene and mirrors it to the GPU
//! - `control`: keyboard control panel emitting [`control::ControlEvent`]s
//! - `overlay`, `stats`: frame timing graph and window title readout
//! - `flow`: the frame driver and event loop
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `camera`, `pipelines`, `data_structures`, `render`: GPU plumbing
//! - `config`, `demo`: demo presets and entry points
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod control;
pub mod cube_field;
pub mod data_structures;
pub mod demo;
pub mod flow;
pub mod layout;
pub mod overlay;
pub mod pipelines;
pub mod render;
pub mod representation;
pub mod scene;
pub mod stats;

pub use demo::{run_demo, run_instanced, run_mesh_switch};
