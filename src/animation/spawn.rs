//! Grouped animations with a shared start time
//!
//! A [`Spawn`] owns a fixed set of [`PropertyAnimation`]s and the instant
//! they were all scheduled at. Because the group is one value, starting and
//! stopping are atomic by construction: there is no way to schedule or tear
//! down a subset of its parts.

use std::time::{Duration, Instant};

use crate::animation::property::PropertyAnimation;

/// `N` property animations running off one shared start instant.
#[derive(Debug, Clone, Copy)]
pub struct Spawn<const N: usize> {
    started_at: Instant,
    parts: [PropertyAnimation; N],
}

impl<const N: usize> Spawn<N> {
    /// Schedule all parts together, starting at `now`.
    pub fn schedule(parts: [PropertyAnimation; N], now: Instant) -> Self {
        Self {
            started_at: now,
            parts,
        }
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time elapsed since the group was scheduled. Saturates to zero for
    /// instants before the start.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Sample every part at `now`, all from the same elapsed time.
    pub fn values(&self, now: Instant) -> [f32; N] {
        let elapsed = self.elapsed(now);
        self.parts.each_ref().map(|part| part.value_at(elapsed))
    }
}
