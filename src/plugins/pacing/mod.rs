//! Frame pacing: sleep at the end of each frame to hold ~60 fps.
//!
//! The frame period rarely divides a millisecond evenly (16.667 ms at 60 fps).
//! The pacer sleeps the whole-millisecond part and carries the fraction over
//! to the next frame, so three frames average out to 50 ms.

use std::time::{Duration, Instant};

use bevy::prelude::*;

use crate::common::tunables::Tunables;

/// Converts measured frame time into the delay that ends the frame.
#[derive(Debug, Clone)]
pub struct FramePacer {
    whole_ms: i64,
    fraction_ms: f32,
    remainder: f32,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let period = 1000.0 / target_fps.max(1) as f32;
        Self {
            whole_ms: period.trunc() as i64,
            fraction_ms: period.fract(),
            remainder: 0.0,
        }
    }

    /// Delay to apply after a frame that took `frame_time`. Never below 1 ms.
    pub fn delay_for(&mut self, frame_time: Duration) -> Duration {
        let mut wait = self.whole_ms + self.remainder.trunc() as i64;
        self.remainder = self.remainder.fract();

        wait -= i64::try_from(frame_time.as_millis()).unwrap_or(i64::MAX);
        let wait = wait.max(1);

        self.remainder += self.fraction_ms;
        Duration::from_millis(wait as u64)
    }

    pub fn remainder(&self) -> f32 {
        self.remainder
    }
}

/// Pacer plus the instant the previous frame ended.
#[derive(Resource, Debug)]
pub struct FrameClock {
    pacer: FramePacer,
    then: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self { pacer: FramePacer::new(target_fps), then: Instant::now() }
    }
}

/// Render-only: headless apps must not sleep.
pub fn plugin(app: &mut App) {
    let fps = app.world().resource::<Tunables>().target_fps;
    app.insert_resource(FrameClock::new(fps))
        .add_systems(Last, pace_frame);
}

fn pace_frame(mut clock: ResMut<FrameClock>) {
    let frame_time = clock.then.elapsed();
    let delay = clock.pacer.delay_for(frame_time);
    std::thread::sleep(delay);
    clock.then = Instant::now();
}
