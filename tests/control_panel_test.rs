use cubefield::{
    config::DemoConfig,
    control::{ControlEvent, ControlPanel},
    representation::Mode,
};
use winit::keyboard::KeyCode;

#[test]
fn starts_from_the_configured_mode() {
    let panel = ControlPanel::new(&DemoConfig::mesh_switch());
    assert_eq!(panel.use_merged(), Some(true));
    assert_eq!(panel.count(), 10_000);

    let config = DemoConfig {
        mode: Mode::Individual,
        ..DemoConfig::mesh_switch()
    };
    assert_eq!(ControlPanel::new(&config).use_merged(), Some(false));
}

#[test]
fn toggling_merged_flips_back_and_forth() {
    let mut panel = ControlPanel::new(&DemoConfig::mesh_switch());
    assert_eq!(
        panel.handle_key(KeyCode::KeyM),
        Some(ControlEvent::UseMerged(false))
    );
    assert_eq!(
        panel.handle_key(KeyCode::KeyM),
        Some(ControlEvent::UseMerged(true))
    );
    assert_eq!(panel.set_use_merged(true), None);
}

#[test]
fn count_steps_by_one_thousand() {
    let mut panel = ControlPanel::new(&DemoConfig::mesh_switch());
    assert_eq!(
        panel.handle_key(KeyCode::ArrowUp),
        Some(ControlEvent::Count(11_000))
    );
    assert_eq!(
        panel.handle_key(KeyCode::Minus),
        Some(ControlEvent::Count(10_000))
    );
    assert_eq!(
        panel.handle_key(KeyCode::ArrowLeft),
        Some(ControlEvent::Count(9_000))
    );
    assert_eq!(
        panel.handle_key(KeyCode::Equal),
        Some(ControlEvent::Count(10_000))
    );
}

#[test]
fn count_is_clamped_to_bounds() {
    let mut panel = ControlPanel::new(&DemoConfig::mesh_switch());

    assert_eq!(
        panel.handle_key(KeyCode::Home),
        Some(ControlEvent::Count(1000))
    );
    assert_eq!(panel.handle_key(KeyCode::ArrowDown), None);
    assert_eq!(panel.handle_key(KeyCode::PageDown), None);
    assert_eq!(panel.count(), 1000);

    assert_eq!(
        panel.handle_key(KeyCode::End),
        Some(ControlEvent::Count(50_000))
    );
    assert_eq!(panel.handle_key(KeyCode::ArrowUp), None);
    assert_eq!(panel.count(), 50_000);

    assert_eq!(panel.set_count(0), Some(ControlEvent::Count(1000)));
    assert_eq!(panel.set_count(1_000_000), Some(ControlEvent::Count(50_000)));
}

#[test]
fn set_count_snaps_to_the_step_grid() {
    let mut panel = ControlPanel::new(&DemoConfig::mesh_switch());
    assert_eq!(panel.set_count(12_345), Some(ControlEvent::Count(12_000)));
    assert_eq!(panel.set_count(12_999), None);
}

#[test]
fn instanced_demo_has_no_mode_toggle() {
    let mut panel = ControlPanel::new(&DemoConfig::instanced());
    assert_eq!(panel.use_merged(), None);
    assert_eq!(panel.set_use_merged(true), None);
    assert_eq!(panel.handle_key(KeyCode::KeyM), None);
}
