//! Render pipelines shared by all flows.
//!
//! - `basic` is the lit, instanced cube pipeline
//! - `gui` draws flat screen-space geometry (the performance overlay)
//! - `light` holds the light uniform bound by `basic`

pub mod basic;
pub mod gui;
pub mod light;

/// Pipelines created once per [`Context`](crate::context::Context).
#[derive(Debug)]
pub struct Pipelines {
    pub basic: wgpu::RenderPipeline,
    pub gui: wgpu::RenderPipeline,
}
