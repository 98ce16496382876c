//! Fixed-timestep driver loop.
//!
//! Scene updates run at a fixed 60 Hz so per-frame spin increments and clock
//! steps do not depend on the display refresh rate. Rendering gets an
//! interpolation alpha for the leftover fraction of a step.

use std::time::Instant;
use tracing::warn;

/// Fixed update timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Frame times above this are clamped; the simulation slows down instead of
/// running a burst of catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator state for the fixed-timestep loop.
///
/// Interactive hosts call [`tick`](Self::tick) once per frame. Headless runs
/// call [`advance`](Self::advance) with an explicit frame time.
#[derive(Debug)]
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Measures wall-clock time since the previous tick and forwards it to
    /// [`advance`](Self::advance).
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64), render_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time, update_fn, render_fn);
    }

    /// Runs one frame of `frame_time` seconds.
    ///
    /// - `update_fn(fixed_dt, total_sim_time)` is called zero or more times.
    /// - `render_fn(alpha)` is called exactly once, alpha in `[0.0, 1.0)`.
    pub fn advance(
        &mut self,
        frame_time: f64,
        mut update_fn: impl FnMut(f64, f64),
        mut render_fn: impl FnMut(f64),
    ) {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        render_fn(self.alpha());
        self.frame_count += 1;
    }

    /// Runs exactly `steps` updates with no leftover, then one render.
    pub fn run_steps(
        &mut self,
        steps: u32,
        mut update_fn: impl FnMut(f64, f64),
        render_fn: impl FnMut(f64),
    ) {
        for _ in 0..steps {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.update_count += 1;
        }
        self.advance(0.0, |_, _| {}, render_fn);
    }

    /// Current interpolation alpha without running a frame.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulated real time in seconds (update steps × `FIXED_DT`).
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
