//! Render composition and pipeline batching.
//!
//! Flows describe what they want drawn each frame with a [`Render`]. The frame
//! driver walks all renders, sorts them into one batch per pipeline and then
//! draws each batch with its pipeline bound once.
//!
//! # Key types
//!
//! - [`Render<'a>`] is the primary enum describing render operations
//! - [`Instanced<'a>`] is one instanced draw of a mesh (mesh + instance buffer + object)
//! - [`Flat<'a>`] is screen-space geometry for the overlay (vertex + index buffers)
//!

use std::ops::Range;

use crate::data_structures::model::Mesh;

/// One instanced draw call.
///
/// Draws `instances` of `instance` with `mesh`, using `object` as the
/// per-object uniform bind group.
#[derive(Clone)]
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub mesh: &'a Mesh,
    pub object: &'a wgpu::BindGroup,
    pub instances: Range<u32>,
}

/// Flat screen-space geometry drawn with the GUI pipeline.
#[derive(Clone)]
pub struct Flat<'a> {
    pub vertex: &'a wgpu::Buffer,
    pub index: &'a wgpu::Buffer,
    pub amount: usize,
}

/// Specifies how a flow's objects should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Default(Instanced)` is a single draw call with the basic pipeline
/// - `Defaults(Vec<Instanced>)` is a batch of draw calls with the basic pipeline
/// - `GUI(Flat)` renders screen-space overlay geometry
///
pub enum Render<'a> {
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    GUI(Flat<'a>),
}

impl<'a> Render<'a> {
    /// Sort `self` into the per-pipeline batches.
    pub(crate) fn set_pipelines(self, basics: &mut Vec<Instanced<'a>>, guis: &mut Vec<Flat<'a>>) {
        match self {
            Render::Default(instanced) => basics.push(instanced),
            Render::Defaults(mut vec) => basics.append(&mut vec),
            Render::GUI(flat) => guis.push(flat),
            Render::None => (),
        }
    }

    /// Number of draw calls this render issues.
    pub fn draw_calls(&self) -> usize {
        match self {
            Render::None => 0,
            Render::Default(_) | Render::GUI(_) => 1,
            Render::Defaults(vec) => vec.len(),
        }
    }
}
