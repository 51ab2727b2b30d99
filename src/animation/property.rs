//! A single animated property
//!
//! [`PropertyAnimation`] interpolates one `f32` between two endpoints over a
//! duration, optionally after a delay and optionally looping. It holds no
//! clock: callers sample it with the time elapsed since the animation was
//! scheduled, which keeps every value it produces deterministic.

use std::time::Duration;

use crate::animation::curve::Curve;

/// How many times an animation runs before holding its final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCount {
    /// Run the duration `n` times, then hold the curve's final output.
    Times(u32),
    /// Loop the duration indefinitely.
    Infinite,
}

/// Interpolates a single value over time.
///
/// Sampling semantics:
/// - while `elapsed < delay` the value holds at `from`; the delay is paid
///   once, not per repetition
/// - after the delay, progress runs `0..1` over `duration` and wraps
///   according to the play count
/// - a finite play count that has run out holds the value at the curve's
///   output for full progress
#[derive(Debug, Clone, Copy)]
pub struct PropertyAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    delay: Duration,
    curve: Curve,
    play_count: PlayCount,
}

impl PropertyAnimation {
    /// Animation from `from` to `to` over `duration`, linear, no delay,
    /// played once.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            curve: Curve::Linear,
            play_count: PlayCount::Times(1),
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn play_count(mut self, play_count: PlayCount) -> Self {
        self.play_count = play_count;
        self
    }

    /// Sample the animated value at `elapsed` time since scheduling.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return self.from;
        };

        let duration = self.duration.as_secs_f32();
        if duration <= 0.0 {
            return self.interpolate(1.0);
        }

        let runs = active.as_secs_f32() / duration;
        let progress = match self.play_count {
            PlayCount::Infinite => runs.fract(),
            PlayCount::Times(n) if runs >= n as f32 => 1.0,
            PlayCount::Times(_) => runs.fract(),
        };

        self.interpolate(progress)
    }

    fn interpolate(&self, progress: f32) -> f32 {
        self.from + (self.to - self.from) * self.curve.apply(progress)
    }
}
