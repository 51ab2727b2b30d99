//! Circular activity indicator widget for iced
//!
//! Draws a rotating partial arc whose visible segment continuously grows,
//! shrinks and precesses, the classic "working on it" spinner. The motion is
//! the composition of three indefinitely looping property animations (stroke
//! start, stroke end, base rotation), each with its own duration and easing
//! curve.
//!
//! # Design Principles
//!
//! - **No business logic**: the widget renders through a generic `Message`
//!   type and never depends on application state
//! - **Host-driven time**: animation progress is sampled from `Instant`s
//!   supplied by the embedding application, one tick per frame
//! - **Ownership is lifetime**: the running animation ensemble is a plain
//!   owned value; dropping the widget tears it down
//!
//! # Usage
//!
//! ```no_run
//! use activity_indicator::ActivityIndicator;
//! use iced::Size;
//! use std::time::Instant;
//!
//! let mut spinner = ActivityIndicator::new(Size::new(50.0, 50.0));
//! spinner.set_animating(true);
//!
//! // once per frame, from the application's tick handler:
//! spinner.tick(Instant::now());
//!
//! // in the view: spinner.view()
//! ```

pub mod animation;
pub mod indicator;

pub use indicator::ActivityIndicator;
