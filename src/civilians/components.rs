//! Civilians domain: components for ambient wandering.

use bevy::prelude::*;
use std::ops::Range;
use std::time::Duration;

/// Seconds between stop checks while walking.
pub const CHECK_INTERVAL_SECS: f32 = 3.0;
/// Seconds a civilian stands still once it stops.
pub const STOP_DURATION_SECS: f32 = 3.0;
pub const STOP_CHANCE: f64 = 0.5;
/// Walking speed range in world units per second.
pub const SPEED_RANGE: Range<f32> = 1.0..4.0;

#[derive(Component, Debug)]
pub struct Civilian;

/// Walk left, pausing now and then.
#[derive(Component, Debug)]
pub struct CivilianWander {
    /// Pixels per second.
    pub speed: f32,
    pub moving: bool,
    check_timer: Timer,
    stop_timer: Timer,
}

impl CivilianWander {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            moving: true,
            check_timer: Timer::from_seconds(CHECK_INTERVAL_SECS, TimerMode::Repeating),
            stop_timer: Timer::from_seconds(STOP_DURATION_SECS, TimerMode::Once),
        }
    }

    /// Advance by `delta` and return the horizontal displacement to apply.
    /// `should_stop` is rolled once per elapsed check interval.
    pub fn tick(&mut self, delta: Duration, mut should_stop: impl FnMut() -> bool) -> f32 {
        if !self.moving {
            self.stop_timer.tick(delta);
            if self.stop_timer.just_finished() {
                self.moving = true;
                self.check_timer.reset();
            }
            return 0.0;
        }

        let displacement = -self.speed * delta.as_secs_f32();

        self.check_timer.tick(delta);
        if self.check_timer.just_finished() && should_stop() {
            self.moving = false;
            self.stop_timer.reset();
        }

        displacement
    }
}
