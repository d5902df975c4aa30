#![allow(dead_code)]

use rand::{SeedableRng, rngs::StdRng};

#[cfg(feature = "integration-tests")]
pub mod test_utils;

/// Deterministic random source for layout depths.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x00ff00)
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
