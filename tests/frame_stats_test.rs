use cubefield::{
    config::{CountBounds, DemoConfig, Shading},
    representation::Mode,
    stats::{FrameStats, HISTORY},
};
use instant::Duration;

#[test]
fn history_keeps_the_last_hundred_frames() {
    let mut stats = FrameStats::new();
    for ms in 0..150 {
        stats.record(Duration::from_millis(ms));
    }
    let history: Vec<_> = stats.history().collect();
    assert_eq!(history.len(), HISTORY);
    assert_eq!(history[0], Duration::from_millis(50));
    assert_eq!(stats.last_frame(), Some(Duration::from_millis(149)));
}

#[test]
fn average_of_recorded_frames() {
    let mut stats = FrameStats::new();
    assert_eq!(stats.average(), None);
    stats.record(Duration::from_millis(10));
    stats.record(Duration::from_millis(20));
    assert_eq!(stats.average(), Some(Duration::from_millis(15)));
}

#[test]
fn end_without_begin_records_nothing() {
    let mut stats = FrameStats::new();
    stats.end();
    assert_eq!(stats.history().len(), 0);

    stats.begin();
    stats.end();
    assert_eq!(stats.history().len(), 1);
    assert_eq!(stats.fps(), 0.0);
}

#[test]
fn count_bounds_offset_and_clamp() {
    let bounds = CountBounds::default();
    assert_eq!(bounds.clamp(999), 1000);
    assert_eq!(bounds.clamp(50_001), 50_000);
    assert_eq!(bounds.offset(49_000, 10), 50_000);
    assert_eq!(bounds.offset(3000, -10), 1000);
    assert_eq!(bounds.offset(3000, 2), 5000);
}

#[test]
fn presets() {
    let instanced = DemoConfig::instanced();
    assert_eq!(instanced.initial_count(), 20_000);
    assert_eq!(instanced.mode, Mode::Instanced);
    assert!(!instanced.control_panel);

    let switch = DemoConfig::mesh_switch();
    assert_eq!(switch.initial_count(), 10_000);
    assert_eq!(switch.mode, Mode::Merged);
    assert!(switch.control_panel);
    assert_eq!(switch.rotation_step.0, 0.01);
}

#[test]
fn inverted_bounds_do_not_panic() {
    let bounds = CountBounds {
        min: 5000,
        max: 1000,
        step: 1000,
    };
    assert_eq!(bounds.clamp(0), 5000);
    assert_eq!(bounds.clamp(20_000), 5000);
    assert_eq!(bounds.offset(5000, 3), 5000);
    assert_eq!(bounds.offset(5000, -3), 5000);
}

#[test]
fn flat_shading_ignores_the_light() {
    let flat = Shading::Flat.light_uniform();
    assert_eq!(flat.color, [0.0; 3]);
    assert_eq!(flat.ambient, [1.0; 3]);

    let lit = Shading::Lit.light_uniform();
    assert_eq!(lit.ambient, [0.25; 3]);
    assert_eq!(DemoConfig::instanced().shading, Shading::Flat);
    assert_eq!(DemoConfig::mesh_switch().shading, Shading::Flat);
}
