use cubefield::layout::{Layout, grid_x, grid_y};

use crate::common::seeded_rng;

mod common;

#[test]
fn positions_stay_inside_the_grid() {
    let count = 20_000;
    let layout = Layout::new(count);
    let max_y = ((count - 1) / 100) as f32 * 2.0 - 100.0;
    let mut rng = seeded_rng();

    let positions: Vec<_> = layout.positions(&mut rng).collect();
    assert_eq!(positions.len(), count);
    for position in positions {
        assert!((-100.0..=98.0).contains(&position.x));
        assert!((-100.0..=max_y).contains(&position.y));
        assert!((-25.0..25.0).contains(&position.z));
    }
    assert_eq!(layout.max_y(), max_y);
}

#[test]
fn columns_wrap_every_hundred_cubes() {
    assert_eq!(grid_x(0), -100.0);
    assert_eq!(grid_x(1), -98.0);
    assert_eq!(grid_x(99), 98.0);
    assert_eq!(grid_x(100), -100.0);
    assert_eq!(grid_y(99), -100.0);
    assert_eq!(grid_y(100), -98.0);
    assert_eq!(grid_y(19_999), 298.0);
}

#[test]
fn planar_position_does_not_depend_on_rng() {
    let layout = Layout::new(1000);
    let a = layout.position(517, &mut seeded_rng());
    let b = layout.position(517, &mut rand::rng());
    assert_eq!((a.x, a.y), (b.x, b.y));
    assert_eq!((a.x, a.y), (-66.0, -90.0));
}

#[test]
fn same_seed_gives_same_depths() {
    let layout = Layout::new(500);
    let first: Vec<_> = layout.positions(&mut seeded_rng()).collect();
    let second: Vec<_> = layout.positions(&mut seeded_rng()).collect();
    assert_eq!(first, second);
}
