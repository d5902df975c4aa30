//! Scene composition.
//!
//! [`Scene`] owns the objects currently attached to the visible scene. They
//! always belong to exactly one [`Representation`]: swapping in a new one
//! detaches the old one in the same step and hands it back to the caller,
//! which drops it.

use cgmath::Rad;

use crate::representation::{Mode, Representation};

#[derive(Debug, Default)]
pub struct Scene {
    active: Option<Representation>,
    generation: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active representation.
    ///
    /// Returns the detached representation, if any.
    pub fn set_active(&mut self, representation: Representation) -> Option<Representation> {
        let previous = self.active.replace(representation);
        self.generation += 1;
        if let Some(previous) = &previous {
            log::debug!(
                "detached {} representation with {} objects",
                previous.mode(),
                previous.object_count()
            );
        }
        previous
    }

    /// Detach the active representation without replacing it.
    pub fn clear(&mut self) -> Option<Representation> {
        let previous = self.active.take();
        if previous.is_some() {
            self.generation += 1;
        }
        previous
    }

    pub fn active(&self) -> Option<&Representation> {
        self.active.as_ref()
    }

    pub fn mode(&self) -> Option<Mode> {
        self.active.as_ref().map(Representation::mode)
    }

    /// Number of renderable objects attached to the scene.
    pub fn object_count(&self) -> usize {
        self.active
            .as_ref()
            .map_or(0, Representation::object_count)
    }

    /// Bumped on every change of the active representation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the animation by one frame.
    pub fn tick(&mut self, step: Rad<f32>) {
        if let Some(active) = &mut self.active {
            active.rotate(step);
        }
    }
}
