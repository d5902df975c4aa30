//! Demo configuration.
//!
//! [`DemoConfig`] bundles the tunables of both demos. The two presets
//! correspond to the instanced-only demo and the merged/individual switch.

use cgmath::Rad;

use crate::{pipelines::light::LightUniform, representation::Mode};

/// Allowed range for the cube count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl CountBounds {
    /// Upper end of the range. Never below `min`, even if `max` was set lower.
    fn upper(&self) -> u32 {
        self.max.max(self.min)
    }

    /// Clamp `count` into the range and snap it to the step grid.
    ///
    /// Values between grid points round down, but never below `min`.
    pub fn clamp(&self, count: u32) -> u32 {
        let upper = self.upper();
        let count = count.max(self.min).min(upper);
        if self.step == 0 {
            return count;
        }
        let snapped = self.min + (count - self.min) / self.step * self.step;
        snapped.max(self.min).min(upper)
    }

    /// Move `count` by `steps` steps, staying inside the range.
    pub fn offset(&self, count: u32, steps: i64) -> u32 {
        let target = i64::from(count) + steps * i64::from(self.step);
        let target = target.max(i64::from(self.min)).min(i64::from(self.upper()));
        self.clamp(target as u32)
    }
}

impl Default for CountBounds {
    fn default() -> Self {
        Self {
            min: 1000,
            max: 50_000,
            step: 1000,
        }
    }
}

/// How the cubes are shaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Shading {
    /// Every face shows the plain cube colour; lights are ignored.
    #[default]
    Flat,
    /// Directional light from (1, 1, 1) plus a dim ambient term.
    Lit,
}

impl Shading {
    /// Light uniform that produces this shading in the cube shader.
    pub fn light_uniform(&self) -> LightUniform {
        match self {
            Shading::Flat => LightUniform::new([1.0, 1.0, 1.0], [0.0; 3], [1.0; 3]),
            Shading::Lit => LightUniform::default(),
        }
    }
}

/// Perspective camera placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub fovy: cgmath::Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 50.0],
            fovy: cgmath::Deg(75.0),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub count: u32,
    pub mode: Mode,
    pub bounds: CountBounds,
    /// Whether the control panel is bound to the keyboard.
    pub control_panel: bool,
    /// Rotation added on X and Y every frame.
    pub rotation_step: Rad<f32>,
    pub cube_size: f32,
    pub cube_colour: [f32; 4],
    pub shading: Shading,
    pub clear_colour: wgpu::Color,
    pub camera: CameraConfig,
    /// Period of the overlay's title refresh.
    pub tick_duration_millis: u64,
}

impl DemoConfig {
    /// A single instanced batch of 20 000 cubes.
    pub fn instanced() -> Self {
        Self {
            title: "cubefield: instanced".to_string(),
            count: 20_000,
            mode: Mode::Instanced,
            control_panel: false,
            ..Default::default()
        }
    }

    /// Merged geometry and individual meshes, switchable at runtime.
    pub fn mesh_switch() -> Self {
        Self {
            title: "cubefield: mesh switch".to_string(),
            count: 10_000,
            mode: Mode::Merged,
            control_panel: true,
            ..Default::default()
        }
    }

    /// Initial count, clamped into `bounds`.
    pub fn initial_count(&self) -> u32 {
        self.bounds.clamp(self.count)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "cubefield".to_string(),
            count: 20_000,
            mode: Mode::Instanced,
            bounds: CountBounds::default(),
            control_panel: false,
            rotation_step: Rad(0.01),
            cube_size: 1.0,
            // 0x00ff00
            cube_colour: [0.0, 1.0, 0.0, 1.0],
            shading: Shading::Flat,
            clear_colour: wgpu::Color::BLACK,
            camera: CameraConfig::default(),
            tick_duration_millis: 500,
        }
    }
}
