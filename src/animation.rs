//! Looping property-animation engine
//!
//! iced ships no primitive for an indefinitely repeating animation with a
//! custom easing curve and a start delay, so this module provides one. It is
//! deliberately small: an animation is a plain value that maps elapsed time
//! to an interpolated `f32`, and a [`Spawn`] groups several of them under one
//! shared start instant so they begin and end as a unit.
//!
//! Nothing here keeps time on its own. The embedding application feeds
//! `Instant`s in from its frame ticks and samples the current values.

pub mod curve;
pub mod property;
pub mod spawn;

pub use curve::Curve;
pub use property::{PlayCount, PropertyAnimation};
pub use spawn::Spawn;
