//! Performance overlay.
//!
//! Draws a translucent panel in the top-left corner with one bar per
//! recorded frame time, and refreshes the window title with the current
//! frame rate, frame time, mode and cube count on every tick.

use instant::Duration;
use wgpu::util::DeviceExt;
use winit::event::WindowEvent;

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;
use crate::{
    context::{Context, InitContext},
    control::ControlEvent,
    demo::DemoState,
    flow::{GraphicsFlow, Out},
    pipelines::gui::Vertex,
    render::{Flat, Render},
    stats::{FrameStats, HISTORY},
};

/// Panel origin (top-left) and size in normalized device coordinates.
const PANEL_LEFT: f32 = -0.98;
const PANEL_TOP: f32 = 0.98;
const PANEL_WIDTH: f32 = 0.5;
const PANEL_HEIGHT: f32 = 0.2;

/// Frame time that fills the panel height; longer frames are capped.
pub const GRAPH_CEILING: Duration = Duration::from_millis(33);

const PANEL_COLOUR: [f32; 4] = [0.0, 0.0, 0.2, 0.6];
const BAR_COLOUR: [f32; 4] = [0.0, 1.0, 1.0, 0.9];

const QUADS: usize = HISTORY + 1;

fn quad(left: f32, bottom: f32, right: f32, top: f32, colour: [f32; 4]) -> [Vertex; 4] {
    [
        Vertex { position: [left, bottom], colour },
        Vertex { position: [right, bottom], colour },
        Vertex { position: [right, top], colour },
        Vertex { position: [left, top], colour },
    ]
}

/// Vertices of the panel followed by one bar per frame time, oldest left.
pub fn graph_vertices(frame_times: impl Iterator<Item = Duration>) -> Vec<Vertex> {
    let bottom = PANEL_TOP - PANEL_HEIGHT;
    let bar_width = PANEL_WIDTH / HISTORY as f32;

    let mut vertices = Vec::with_capacity(QUADS * 4);
    vertices.extend(quad(
        PANEL_LEFT,
        bottom,
        PANEL_LEFT + PANEL_WIDTH,
        PANEL_TOP,
        PANEL_COLOUR,
    ));
    for (i, frame_time) in frame_times.take(HISTORY).enumerate() {
        let fill = (frame_time.as_secs_f32() / GRAPH_CEILING.as_secs_f32()).min(1.0);
        let left = PANEL_LEFT + i as f32 * bar_width;
        vertices.extend(quad(
            left,
            bottom,
            left + bar_width,
            bottom + fill * PANEL_HEIGHT,
            BAR_COLOUR,
        ));
    }
    vertices
}

fn quad_indices(quads: usize) -> Vec<u16> {
    (0..quads as u16)
        .flat_map(|q| {
            let base = q * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}

/// Window title line: `title | fps | ms | mode | count`.
pub fn title_line(title: &str, stats: &FrameStats, state: &DemoState) -> String {
    let frame_ms = stats
        .last_frame()
        .map_or(0.0, |frame| frame.as_secs_f64() * 1000.0);
    let mode = state
        .mode
        .map_or_else(|| "-".to_string(), |mode| mode.to_string());
    format!(
        "{} | {:.0} fps | {:.2} ms | {} | {} cubes",
        title,
        stats.fps(),
        frame_ms,
        mode,
        state.count
    )
}

pub struct Overlay {
    title: String,
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    amount: usize,
}

impl Overlay {
    pub fn new(title: String, init: &InitContext) -> Self {
        let vertex = init.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Overlay Vertex Buffer"),
            size: (QUADS * 4 * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let index = init
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Overlay Index Buffer"),
                contents: bytemuck::cast_slice(&quad_indices(QUADS)),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            title,
            vertex,
            index,
            amount: 0,
        }
    }
}

impl GraphicsFlow<DemoState, ControlEvent> for Overlay {
    fn on_init(&mut self, _: &mut Context, _: &mut DemoState) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_update(
        &mut self,
        ctx: &Context,
        _: &mut DemoState,
        _: Duration,
    ) -> Out<DemoState, ControlEvent> {
        let vertices = graph_vertices(ctx.stats.history());
        ctx.queue
            .write_buffer(&self.vertex, 0, bytemuck::cast_slice(&vertices));
        self.amount = vertices.len() / 4 * 6;
        Out::Empty
    }

    fn on_tick(&mut self, ctx: &Context, state: &mut DemoState) -> Out<DemoState, ControlEvent> {
        ctx.window()
            .set_title(&title_line(&self.title, &ctx.stats, state));
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut DemoState,
        _: &WindowEvent,
    ) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_custom_events(
        &mut self,
        _: &Context,
        _: &mut DemoState,
        event: ControlEvent,
    ) -> Option<ControlEvent> {
        Some(event)
    }

    fn on_render(&self) -> Render<'_> {
        Render::GUI(Flat {
            vertex: &self.vertex,
            index: &self.index,
            amount: self.amount,
        })
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut DemoState,
        _: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        Ok(ImageTestResult::Passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_capped_at_the_panel_top() {
        let vertices = graph_vertices([Duration::from_millis(100)].into_iter());
        assert_eq!(vertices.len(), 8);
        assert!((vertices[6].position[1] - PANEL_TOP).abs() < 1e-6);
    }

    #[test]
    fn indices_cover_two_triangles_per_quad() {
        let indices = quad_indices(2);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn title_shows_mode_and_count() {
        let state = DemoState {
            mode: Some(crate::representation::Mode::Merged),
            count: 10_000,
            objects: 1,
        };
        let line = title_line("demo", &FrameStats::new(), &state);
        assert_eq!(line, "demo | 0 fps | 0.00 ms | merged | 10000 cubes");
    }
}
