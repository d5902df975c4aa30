//! The cube field flow.
//!
//! [`CubeField`] owns the [`Scene`] and keeps a GPU mirror of its active
//! representation:
//!
//! - Instanced: the base cube mesh, one instance slot per cube holding its
//!   translation, and an object uniform holding the batch rotation. One draw.
//! - Merged: the merged mesh, a single identity instance and an object
//!   uniform holding the rotation. One draw.
//! - Individual: the base cube mesh, one instance slot per cube holding its
//!   full transform (rewritten every frame) and an identity object uniform.
//!   One draw per cube.
//!
//! The mirror is rebuilt whenever the scene's generation changes, so it is
//! released together with the representation it mirrors.

use cgmath::{Deg, Matrix4, SquareMatrix};
use instant::{Duration, Instant};
use rand::{Rng, rngs::ThreadRng};
use wgpu::util::DeviceExt;
use winit::event::WindowEvent;

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;
use crate::{
    camera::{Camera, Projection},
    config::{CountBounds, DemoConfig},
    context::{Context, InitContext},
    control::ControlEvent,
    data_structures::{
        geometry::Geometry,
        instance::{InstanceRaw, Transform},
        model::Mesh,
    },
    demo::DemoState,
    flow::{GraphicsFlow, Out},
    pipelines::basic::{ObjectResources, ObjectUniform},
    render::{Instanced, Render},
    representation::{Mode, Representation},
    scene::Scene,
};

/// GPU copy of one representation.
#[derive(Debug)]
struct GpuMirror {
    generation: u64,
    /// Own mesh of a merged representation; the others draw the base cube.
    merged: Option<Mesh>,
    instances: wgpu::Buffer,
    instance_count: u32,
    object: ObjectResources,
    draw_per_instance: bool,
}

/// The mode and count the cube field should show.
///
/// Control events update it; a rebuild is only needed when
/// [`apply`](Self::apply) reports a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    mode: Mode,
    count: u32,
    bounds: CountBounds,
}

impl Selection {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            mode: config.mode,
            count: config.initial_count(),
            bounds: config.bounds,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Apply a control event. Returns whether the selection changed.
    pub fn apply(&mut self, event: ControlEvent) -> bool {
        match event {
            ControlEvent::UseMerged(use_merged) => {
                let mode = Mode::from_use_merged(use_merged);
                let changed = mode != self.mode;
                self.mode = mode;
                changed
            }
            ControlEvent::Count(count) => {
                let count = self.bounds.clamp(count);
                let changed = count != self.count;
                self.count = count;
                changed
            }
        }
    }
}

pub struct CubeField<R: Rng = ThreadRng> {
    config: DemoConfig,
    scene: Scene,
    selection: Selection,
    base: Geometry,
    base_mesh: Mesh,
    gpu: Option<GpuMirror>,
    rng: R,
}

impl CubeField<ThreadRng> {
    pub fn new(config: DemoConfig, init: &InitContext) -> Self {
        Self::with_rng(config, init, rand::rng())
    }
}

impl<R: Rng> CubeField<R> {
    /// Cube field whose depth scatter is drawn from `rng`.
    pub fn with_rng(config: DemoConfig, init: &InitContext, rng: R) -> Self {
        let base = Geometry::cube(config.cube_size);
        let base_mesh = Mesh::from_geometry(&init.device, "cube", &base);
        Self {
            selection: Selection::new(&config),
            config,
            scene: Scene::new(),
            base,
            base_mesh,
            gpu: None,
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Build a fresh representation for the current mode and count and make
    /// it the active one.
    fn rebuild(&mut self, ctx: &Context, state: &mut DemoState) {
        let start = Instant::now();
        let representation = Representation::build(
            self.selection.mode(),
            self.selection.count() as usize,
            &self.base,
            &mut self.rng,
        );
        // The old representation and its mirror are dropped here
        drop(self.scene.set_active(representation));
        self.gpu = None;
        self.sync_gpu(ctx);

        *state = DemoState::from_scene(&self.scene);
        log::info!(
            "built {} representation: {} cubes, {} objects, {} draw calls in {:.1} ms",
            self.selection.mode(),
            state.count,
            state.objects,
            self.on_render().draw_calls(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    /// Recreate the GPU mirror if the scene changed since it was built.
    fn sync_gpu(&mut self, ctx: &Context) {
        let generation = self.scene.generation();
        if self.gpu.as_ref().map(|gpu| gpu.generation) == Some(generation) {
            return;
        }
        self.gpu = self
            .scene
            .active()
            .map(|active| self.mirror(ctx, active, generation));
    }

    fn mirror(&self, ctx: &Context, active: &Representation, generation: u64) -> GpuMirror {
        let (merged, raws, object_model, draw_per_instance): (
            Option<Mesh>,
            Vec<InstanceRaw>,
            Matrix4<f32>,
            bool,
        ) = match active {
            Representation::Instanced(batch) => (
                None,
                batch
                    .instances
                    .iter()
                    .map(|slot| slot.to_instance().to_raw())
                    .collect(),
                batch.transform.to_matrix(),
                false,
            ),
            Representation::Merged(merged) => (
                Some(Mesh::from_geometry(&ctx.device, "merged cubes", &merged.geometry)),
                vec![InstanceRaw::identity()],
                merged.transform.to_matrix(),
                false,
            ),
            Representation::Individual(individual) => (
                None,
                instance_data(&individual.meshes),
                Matrix4::identity(),
                true,
            ),
        };

        let instances = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Instance Buffer", active.mode())),
                contents: bytemuck::cast_slice(&raws),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });
        let object = ObjectResources::new(
            &ctx.device,
            &ctx.object_bind_group_layout,
            ObjectUniform::new(object_model, self.config.cube_colour),
            &active.mode().to_string(),
        );

        GpuMirror {
            generation,
            merged,
            instances,
            instance_count: raws.len() as u32,
            object,
            draw_per_instance,
        }
    }

    /// Upload the transforms the last tick changed.
    fn upload(&mut self, ctx: &Context) {
        let (Some(gpu), Some(active)) = (self.gpu.as_mut(), self.scene.active()) else {
            return;
        };
        match active {
            Representation::Instanced(batch) => {
                gpu.object.write(&ctx.queue, batch.transform.to_matrix());
            }
            Representation::Merged(merged) => {
                gpu.object.write(&ctx.queue, merged.transform.to_matrix());
            }
            Representation::Individual(individual) => {
                ctx.queue.write_buffer(
                    &gpu.instances,
                    0,
                    bytemuck::cast_slice(&instance_data(&individual.meshes)),
                );
            }
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }
}

fn instance_data(transforms: &[Transform]) -> Vec<InstanceRaw> {
    transforms
        .iter()
        .map(|transform| transform.to_instance().to_raw())
        .collect()
}

impl<R: Rng> GraphicsFlow<DemoState, ControlEvent> for CubeField<R> {
    fn on_init(&mut self, ctx: &mut Context, state: &mut DemoState) -> Out<DemoState, ControlEvent> {
        let camera = self.config.camera;
        ctx.camera.camera = Camera::new(camera.position, Deg(-90.0), Deg(0.0));
        ctx.projection = Projection::new(
            ctx.config.width,
            ctx.config.height,
            camera.fovy,
            camera.znear,
            camera.zfar,
        );
        ctx.clear_colour = self.config.clear_colour;
        ctx.light.uniform = self.config.shading.light_uniform();
        ctx.tick_duration_millis = self.config.tick_duration_millis;

        self.rebuild(ctx, state);
        Out::Empty
    }

    fn on_update(
        &mut self,
        ctx: &Context,
        _: &mut DemoState,
        _: Duration,
    ) -> Out<DemoState, ControlEvent> {
        self.scene.tick(self.config.rotation_step);
        self.sync_gpu(ctx);
        self.upload(ctx);
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut DemoState) -> Out<DemoState, ControlEvent> {
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
        ctx: &Context,
        state: &mut DemoState,
        event: ControlEvent,
    ) -> Option<ControlEvent> {
        if self.selection.apply(event) {
            self.rebuild(ctx, state);
        }
        None
    }

    fn on_render(&self) -> Render<'_> {
        let Some(gpu) = &self.gpu else {
            return Render::None;
        };
        let mesh = gpu.merged.as_ref().unwrap_or(&self.base_mesh);
        let draw = |instances| Instanced {
            instance: &gpu.instances,
            mesh,
            object: &gpu.object.bind_group,
            instances,
        };
        if gpu.draw_per_instance {
            Render::Defaults((0..gpu.instance_count).map(|i| draw(i..i + 1)).collect())
        } else {
            Render::Default(draw(0..gpu.instance_count))
        }
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
