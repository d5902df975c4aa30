//! Keyboard control panel.
//!
//! The panel holds two bound values, the "use merged" toggle and the cube
//! count. Every key press that changes one of them produces a
//! [`ControlEvent`], which the flow sends through the engine's custom event
//! channel. Presses that leave both values unchanged produce nothing.
//!
//! | Key                          | Effect              |
//! |------------------------------|---------------------|
//! | `M`                          | toggle merged       |
//! | `ArrowUp`, `ArrowRight`, `+` | count + one step    |
//! | `ArrowDown`, `ArrowLeft`, `-`| count - one step    |
//! | `PageUp` / `PageDown`        | count +/- ten steps |
//! | `Home` / `End`               | minimum / maximum   |

use instant::Duration;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

#[cfg(feature = "integration-tests")]
use crate::flow::ImageTestResult;
use crate::{
    config::{CountBounds, DemoConfig},
    context::Context,
    demo::DemoState,
    flow::{GraphicsFlow, Out},
    render::Render,
    representation::Mode,
};

/// A change made on the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    UseMerged(bool),
    Count(u32),
}

const PAGE_STEPS: i64 = 10;

#[derive(Clone, Debug)]
pub struct ControlPanel {
    /// `None` when the demo has no mode toggle.
    use_merged: Option<bool>,
    count: u32,
    bounds: CountBounds,
}

impl ControlPanel {
    pub fn new(config: &DemoConfig) -> Self {
        let use_merged = match config.mode {
            Mode::Instanced => None,
            Mode::Merged => Some(true),
            Mode::Individual => Some(false),
        };
        Self {
            use_merged,
            count: config.initial_count(),
            bounds: config.bounds,
        }
    }

    pub fn use_merged(&self) -> Option<bool> {
        self.use_merged
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_use_merged(&mut self, use_merged: bool) -> Option<ControlEvent> {
        match self.use_merged {
            Some(current) if current != use_merged => {
                self.use_merged = Some(use_merged);
                Some(ControlEvent::UseMerged(use_merged))
            }
            _ => None,
        }
    }

    /// Set the count, clamped and snapped to the bounds.
    pub fn set_count(&mut self, count: u32) -> Option<ControlEvent> {
        let count = self.bounds.clamp(count);
        if count == self.count {
            return None;
        }
        self.count = count;
        Some(ControlEvent::Count(count))
    }

    fn step_count(&mut self, steps: i64) -> Option<ControlEvent> {
        self.set_count(self.bounds.offset(self.count, steps))
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<ControlEvent> {
        match key {
            KeyCode::KeyM => {
                let toggled = !self.use_merged?;
                self.set_use_merged(toggled)
            }
            KeyCode::ArrowUp | KeyCode::ArrowRight | KeyCode::Equal | KeyCode::NumpadAdd => {
                self.step_count(1)
            }
            KeyCode::ArrowDown | KeyCode::ArrowLeft | KeyCode::Minus | KeyCode::NumpadSubtract => {
                self.step_count(-1)
            }
            KeyCode::PageUp => self.step_count(PAGE_STEPS),
            KeyCode::PageDown => self.step_count(-PAGE_STEPS),
            KeyCode::Home => self.set_count(self.bounds.min),
            KeyCode::End => self.set_count(self.bounds.max),
            _ => None,
        }
    }
}

impl GraphicsFlow<DemoState, ControlEvent> for ControlPanel {
    fn on_init(&mut self, _: &mut Context, _: &mut DemoState) -> Out<DemoState, ControlEvent> {
        log::info!(
            "controls: M toggles merged, arrows/+/- change the count by {}, PageUp/PageDown by {}, Home/End jump to {}/{}",
            self.bounds.step,
            self.bounds.step as i64 * PAGE_STEPS,
            self.bounds.min,
            self.bounds.max
        );
        Out::Empty
    }

    fn on_update(
        &mut self,
        _: &Context,
        _: &mut DemoState,
        _: Duration,
    ) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut DemoState) -> Out<DemoState, ControlEvent> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut DemoState,
        event: &WindowEvent,
    ) -> Out<DemoState, ControlEvent> {
        let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(key),
                    state: ElementState::Pressed,
                    repeat,
                    ..
                },
            ..
        } = event
        else {
            return Out::Empty;
        };
        // Holding M would flicker between the two modes
        if *repeat && *key == KeyCode::KeyM {
            return Out::Empty;
        }
        match self.handle_key(*key) {
            Some(change) => {
                log::debug!("control panel: {:?}", change);
                Out::events(vec![change])
            }
            None => Out::Empty,
        }
    }

    fn on_custom_events(
        &mut self,
        _: &Context,
        _: &mut DemoState,
        event: ControlEvent,
    ) -> Option<ControlEvent> {
        Some(event)
    }

    fn on_render(&self) -> Render<'_> {
        Render::None
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_ignored_without_mode_toggle() {
        let mut panel = ControlPanel::new(&DemoConfig::instanced());
        assert_eq!(panel.handle_key(KeyCode::KeyM), None);
        assert_eq!(panel.use_merged(), None);
    }

    #[test]
    fn page_keys_move_ten_steps() {
        let mut panel = ControlPanel::new(&DemoConfig::mesh_switch());
        assert_eq!(
            panel.handle_key(KeyCode::PageUp),
            Some(ControlEvent::Count(20_000))
        );
        assert_eq!(
            panel.handle_key(KeyCode::PageDown),
            Some(ControlEvent::Count(10_000))
        );
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut panel = ControlPanel::new(&DemoConfig::mesh_switch());
        assert_eq!(panel.handle_key(KeyCode::KeyQ), None);
        assert_eq!(panel.count(), 10_000);
    }
}
