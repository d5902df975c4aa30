//! Grid layout of the cube field.
//!
//! Cube `i` sits on a 100 column grid with a pitch of two units, starting at
//! -100 on both axes. Depth is scattered uniformly in [-25, 25) and is the only
//! part that depends on the random source.

use rand::Rng;

/// Cubes per grid row.
pub const GRID_COLUMNS: usize = 100;
/// Distance between neighbouring grid cells.
pub const GRID_PITCH: f32 = 2.0;
/// Coordinate of the first column and the first row.
pub const GRID_ORIGIN: f32 = -100.0;
/// Total width of the random depth band centred on z = 0.
pub const DEPTH_SPREAD: f32 = 50.0;

pub fn grid_x(index: usize) -> f32 {
    (index % GRID_COLUMNS) as f32 * GRID_PITCH + GRID_ORIGIN
}

pub fn grid_y(index: usize) -> f32 {
    (index / GRID_COLUMNS) as f32 * GRID_PITCH + GRID_ORIGIN
}

pub fn depth<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(-DEPTH_SPREAD / 2.0..DEPTH_SPREAD / 2.0)
}

/// Layout of `count` cubes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    count: usize,
}

impl Layout {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Position of cube `index`. The planar part ignores `count`.
    pub fn position<R: Rng>(&self, index: usize, rng: &mut R) -> cgmath::Vector3<f32> {
        cgmath::Vector3::new(grid_x(index), grid_y(index), depth(rng))
    }

    /// Positions of all cubes in index order.
    pub fn positions<'r, R: Rng>(
        self,
        rng: &'r mut R,
    ) -> impl Iterator<Item = cgmath::Vector3<f32>> + 'r {
        (0..self.count).map(move |index| self.position(index, rng))
    }

    /// Largest y any cube of this layout can have.
    pub fn max_y(&self) -> f32 {
        grid_y(self.count.saturating_sub(1))
    }
}
