//! Frame timing.
//!
//! [`FrameStats`] is sampled by the frame driver: `begin` before the scene is
//! updated, `end` once the frame has been submitted. It keeps the last
//! [`HISTORY`] frame times for the overlay graph and recomputes the frame rate
//! once per second.

use std::collections::VecDeque;

use instant::{Duration, Instant};

/// Number of frame times kept for the overlay graph.
pub const HISTORY: usize = 100;

const FPS_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct FrameStats {
    frame_start: Option<Instant>,
    history: VecDeque<Duration>,
    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_start: None,
            history: VecDeque::with_capacity(HISTORY),
            window_start: Instant::now(),
            window_frames: 0,
            fps: 0.0,
        }
    }

    /// Start measuring a frame.
    pub fn begin(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Finish the frame started by [`begin`](Self::begin).
    ///
    /// Does nothing if no frame was started.
    pub fn end(&mut self) {
        let Some(start) = self.frame_start.take() else {
            return;
        };
        let now = Instant::now();
        self.record(now.duration_since(start));

        self.window_frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
        }
    }

    /// Append one frame time, evicting the oldest beyond [`HISTORY`].
    pub fn record(&mut self, frame_time: Duration) {
        if self.history.len() == HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(frame_time);
    }

    /// Frames per second over the last completed one-second window.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn last_frame(&self) -> Option<Duration> {
        self.history.back().copied()
    }

    /// Recorded frame times, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = Duration> + '_ {
        self.history.iter().copied()
    }

    pub fn average(&self) -> Option<Duration> {
        if self.history.is_empty() {
            return None;
        }
        let total: Duration = self.history.iter().sum();
        Some(total / self.history.len() as u32)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
