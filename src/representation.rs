//! The three ways of representing the cube field.
//!
//! Every representation is built from scratch from a [`Layout`] and never
//! shares objects with a previously built one:
//!
//! - [`InstancedBatch`]: one object whose N slots hold the cube transforms,
//!   drawn with a single instanced draw call. Rotating it rotates all cubes.
//! - [`MergedMesh`]: one object whose geometry has all N cubes baked in.
//!   The cubes can no longer be moved individually.
//! - [`IndividualMeshes`]: N objects, each with its own transform.

use std::fmt;

use cgmath::Rad;
use rand::Rng;

use crate::{
    data_structures::{geometry::Geometry, instance::Transform},
    layout::Layout,
};

/// Which representation to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Instanced,
    Merged,
    Individual,
}

impl Mode {
    /// Mode selected by the control panel's "use merged" toggle.
    pub fn from_use_merged(use_merged: bool) -> Self {
        if use_merged {
            Mode::Merged
        } else {
            Mode::Individual
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Instanced => f.write_str("instanced"),
            Mode::Merged => f.write_str("merged"),
            Mode::Individual => f.write_str("individual"),
        }
    }
}

/// One renderable holding a transform per instance slot.
#[derive(Clone, Debug)]
pub struct InstancedBatch {
    pub transform: Transform,
    pub instances: Vec<Transform>,
}

/// One renderable whose geometry has every cube baked in.
#[derive(Clone, Debug)]
pub struct MergedMesh {
    pub transform: Transform,
    pub geometry: Geometry,
    /// Number of cubes baked into `geometry`.
    pub count: usize,
}

/// One renderable per cube, indexed by instance index.
#[derive(Clone, Debug)]
pub struct IndividualMeshes {
    pub meshes: Vec<Transform>,
}

#[derive(Clone, Debug)]
pub enum Representation {
    Instanced(InstancedBatch),
    Merged(MergedMesh),
    Individual(IndividualMeshes),
}

impl Representation {
    /// Build a fresh representation of `count` cubes.
    ///
    /// `base` is the per-cube geometry; only the merged representation copies
    /// it, the others share it at draw time.
    pub fn build<R: Rng>(mode: Mode, count: usize, base: &Geometry, rng: &mut R) -> Self {
        match mode {
            Mode::Instanced => Self::instanced(count, rng),
            Mode::Merged => Self::merged(count, base, rng),
            Mode::Individual => Self::individual(count, rng),
        }
    }

    pub fn instanced<R: Rng>(count: usize, rng: &mut R) -> Self {
        let instances = Layout::new(count)
            .positions(rng)
            .map(Transform::from)
            .collect();
        Representation::Instanced(InstancedBatch {
            transform: Transform::new(),
            instances,
        })
    }

    pub fn merged<R: Rng>(count: usize, base: &Geometry, rng: &mut R) -> Self {
        let geometry = Geometry::merge(
            Layout::new(count)
                .positions(rng)
                .map(|position| base.transformed(&Transform::from(position).to_matrix())),
        );
        Representation::Merged(MergedMesh {
            transform: Transform::new(),
            geometry,
            count,
        })
    }

    pub fn individual<R: Rng>(count: usize, rng: &mut R) -> Self {
        let meshes = Layout::new(count)
            .positions(rng)
            .map(Transform::from)
            .collect();
        Representation::Individual(IndividualMeshes { meshes })
    }

    pub fn mode(&self) -> Mode {
        match self {
            Representation::Instanced(_) => Mode::Instanced,
            Representation::Merged(_) => Mode::Merged,
            Representation::Individual(_) => Mode::Individual,
        }
    }

    /// Number of renderable objects this representation adds to the scene.
    pub fn object_count(&self) -> usize {
        match self {
            Representation::Instanced(_) | Representation::Merged(_) => 1,
            Representation::Individual(individual) => individual.meshes.len(),
        }
    }

    /// Number of cubes drawn.
    pub fn cube_count(&self) -> usize {
        match self {
            Representation::Instanced(batch) => batch.instances.len(),
            Representation::Merged(merged) => merged.count,
            Representation::Individual(individual) => individual.meshes.len(),
        }
    }

    /// Transforms of the scene-level objects, one per renderable.
    pub fn objects(&self) -> &[Transform] {
        match self {
            Representation::Instanced(batch) => std::slice::from_ref(&batch.transform),
            Representation::Merged(merged) => std::slice::from_ref(&merged.transform),
            Representation::Individual(individual) => &individual.meshes,
        }
    }

    pub fn objects_mut(&mut self) -> &mut [Transform] {
        match self {
            Representation::Instanced(batch) => std::slice::from_mut(&mut batch.transform),
            Representation::Merged(merged) => std::slice::from_mut(&mut merged.transform),
            Representation::Individual(individual) => &mut individual.meshes,
        }
    }

    /// Rotate every object by `step` on X and Y.
    pub fn rotate(&mut self, step: Rad<f32>) {
        self.objects_mut()
            .iter_mut()
            .for_each(|object| object.rotate_xy(step));
    }
}
