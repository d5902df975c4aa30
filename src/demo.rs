//! The two demos, assembled from flows.
//!
//! Both share [`DemoState`], which the cube field keeps up to date and the
//! overlay reads for its title line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::{
    config::DemoConfig,
    control::{ControlEvent, ControlPanel},
    cube_field::CubeField,
    flow::{FlowConstructor, GraphicsFlow, run},
    overlay::Overlay,
    representation::{Mode, Representation},
    scene::Scene,
};

/// What the cube field currently shows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoState {
    pub mode: Option<Mode>,
    /// Number of cubes drawn.
    pub count: usize,
    /// Number of renderable objects in the scene.
    pub objects: usize,
}

impl DemoState {
    /// Summary of what `scene` currently shows.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            mode: scene.mode(),
            count: scene.active().map_or(0, Representation::cube_count),
            objects: scene.object_count(),
        }
    }
}

/// Flow constructors for `config`, in event routing order.
pub fn flows(config: DemoConfig) -> Vec<FlowConstructor<DemoState, ControlEvent>> {
    let mut flows: Vec<FlowConstructor<DemoState, ControlEvent>> = Vec::new();

    if config.control_panel {
        let panel = ControlPanel::new(&config);
        let panel_constructor: FlowConstructor<DemoState, ControlEvent> = Box::new(move |_| {
            Box::pin(async move { Box::new(panel) as Box<dyn GraphicsFlow<_, _>> })
        });
        flows.push(panel_constructor);
    }

    let title = config.title.clone();
    let field_constructor: FlowConstructor<DemoState, ControlEvent> = Box::new(move |init| {
        Box::pin(async move {
            Box::new(CubeField::new(config, &init)) as Box<dyn GraphicsFlow<_, _>>
        })
    });
    let overlay_constructor: FlowConstructor<DemoState, ControlEvent> = Box::new(move |init| {
        Box::pin(async move { Box::new(Overlay::new(title, &init)) as Box<dyn GraphicsFlow<_, _>> })
    });
    flows.push(field_constructor);
    flows.push(overlay_constructor);

    flows
}

/// Run a demo with the given configuration until its window is closed.
pub fn run_demo(config: DemoConfig) -> anyhow::Result<()> {
    let title = config.title.clone();
    run(&title, flows(config))
}

/// 20 000 cubes in one instanced draw call.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_instanced() {
    if let Err(e) = run_demo(DemoConfig::instanced()) {
        log::error!("instanced demo failed: {}", e);
    }
}

/// Merged geometry or individual meshes, switchable from the keyboard.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_mesh_switch() {
    if let Err(e) = run_demo(DemoConfig::mesh_switch()) {
        log::error!("mesh switch demo failed: {}", e);
    }
}
