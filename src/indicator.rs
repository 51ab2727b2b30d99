//! Circular activity indicator primitive
//!
//! A spinner drawn as a partial arc whose start, end and base rotation are
//! three independently eased looping animations. Their composition makes the
//! visible segment stretch, contract and precess at once, which reads as a
//! much livelier motion than a fixed arc spinning at constant speed.
//!
//! # Design
//!
//! This is a primitive component that implements the `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific
//! types. The embedding application drives it by calling [`ActivityIndicator::tick`]
//! once per frame while it is animating.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::{self, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Renderer, Size, Theme, mouse};

use crate::animation::{Curve, PlayCount, PropertyAnimation, Spawn};

/// Base duration unit of the ensemble. The three part durations (1x, 5/3x,
/// 3/2x) and the stroke-start delay (2/3x) all derive from it; the ratios are
/// fixed constants of the visual design.
const CYCLE: Duration = Duration::from_millis(1000);

/// Smallest arc that is still drawn. Spans below this are widened so the
/// spinner never degenerates into an invisible sliver.
const MIN_ARC: f32 = TAU / 360.0;

// ============================================================================
// Animation ensemble
// ============================================================================

/// Two-segment curve for the trailing edge: a fast first half reaching 80%
/// of the turn, then a slow crawl over the remaining 20%.
fn stroke_start_curve(progress: f32) -> f32 {
    if progress > 0.5 {
        4.0 / 5.0 + (progress - 0.5) * 2.0 / 5.0
    } else {
        (2.0 * progress) * 4.0 / 5.0
    }
}

/// Leading-edge curve: sweeps the full turn in the first 60% of its cycle
/// and holds there for the rest.
fn stroke_end_curve(progress: f32) -> f32 {
    if progress > 3.0 / 5.0 {
        1.0
    } else {
        progress * 5.0 / 3.0
    }
}

fn stroke_start_animation() -> PropertyAnimation {
    PropertyAnimation::new(0.0, TAU, CYCLE)
        .delay(CYCLE * 2 / 3)
        .curve(Curve::Custom(stroke_start_curve))
        .play_count(PlayCount::Infinite)
}

fn stroke_end_animation() -> PropertyAnimation {
    PropertyAnimation::new(0.0, TAU, CYCLE * 5 / 3)
        .curve(Curve::Custom(stroke_end_curve))
        .play_count(PlayCount::Infinite)
}

fn rotation_animation() -> PropertyAnimation {
    PropertyAnimation::new(0.0, TAU, CYCLE * 3 / 2)
        .play_count(PlayCount::Infinite)
}

/// Current angles of the three animated properties, in radians.
#[derive(Debug, Clone, Copy)]
struct ArcAngles {
    stroke_start: f32,
    stroke_end: f32,
    rotation: f32,
}

/// The running three-part ensemble behind a spinner. Scheduling and teardown
/// are atomic: the parts live and die as one value.
#[derive(Debug, Clone, Copy)]
struct SpinnerAnimation {
    spawn: Spawn<3>,
}

impl SpinnerAnimation {
    fn schedule(now: Instant) -> Self {
        Self {
            spawn: Spawn::schedule(
                [
                    stroke_start_animation(),
                    stroke_end_animation(),
                    rotation_animation(),
                ],
                now,
            ),
        }
    }

    fn sample(&self, now: Instant) -> ArcAngles {
        let [stroke_start, stroke_end, rotation] = self.spawn.values(now);
        ArcAngles {
            stroke_start,
            stroke_end,
            rotation,
        }
    }
}

/// Resolve the drawable arc from the three raw angles.
///
/// The animations wrap independently, so `rotation + stroke_end` can lag a
/// full turn behind `rotation + stroke_start`; whole turns are added to the
/// end angle until the sweep runs forward, and the span is floored at
/// [`MIN_ARC`].
fn normalized_arc(angles: ArcAngles) -> (f32, f32) {
    let start = angles.rotation + angles.stroke_start;
    let mut end = angles.rotation + angles.stroke_end;

    while start > end {
        end += TAU;
    }

    if end - start < MIN_ARC {
        end = start + MIN_ARC;
    }

    (start, end)
}

// ============================================================================
// Widget
// ============================================================================

/// Circular activity indicator widget.
///
/// Created with a fixed frame; renders a spinning arc while animating and
/// nothing at all while stopped. Stroke color and thickness are plain
/// accessors. Thickness is meant to stay within 1..=10 but the widget stores
/// and renders whatever it is given; range enforcement is the caller's
/// responsibility, as the demo's input handlers show.
pub struct ActivityIndicator {
    /// `Some` exactly while animating. Declared first so the ensemble is
    /// released before the rest of the widget on drop.
    animation: Option<SpinnerAnimation>,
    color: Color,
    thickness: u8,
    stroke_start: f32,
    stroke_end: f32,
    rotation: f32,
    size: Size,
    cache: canvas::Cache,
}

impl ActivityIndicator {
    pub const DEFAULT_THICKNESS: u8 = 3;

    /// A stopped indicator with the given frame, black stroke and default
    /// thickness.
    pub fn new(size: Size) -> Self {
        Self {
            animation: None,
            color: Color::BLACK,
            thickness: Self::DEFAULT_THICKNESS,
            stroke_start: 0.0,
            stroke_end: 0.0,
            rotation: 0.0,
            size,
            cache: canvas::Cache::new(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start or stop the spinner. Setting the current state again is a no-op;
    /// starting schedules a fresh ensemble and stopping drops it and repaints
    /// the now-empty frame.
    pub fn set_animating(&mut self, animating: bool) {
        self.set_animating_at(animating, Instant::now());
    }

    /// [`Self::set_animating`] with an explicit schedule time, for hosts (and
    /// tests) that carry their own frame clock.
    pub fn set_animating_at(&mut self, animating: bool, now: Instant) {
        if self.is_animating() == animating {
            return;
        }

        if animating {
            tracing::debug!("scheduling spinner ensemble");
            self.animation = Some(SpinnerAnimation::schedule(now));
        } else {
            tracing::debug!("tearing down spinner ensemble");
            self.animation = None;
            self.cache.clear();
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.cache.clear();
    }

    pub fn thickness(&self) -> u8 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: u8) {
        self.thickness = thickness;
        self.cache.clear();
    }

    /// Advance the animated angles to `now` and invalidate the cached frame.
    /// Does nothing while stopped.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = &self.animation else {
            return;
        };

        let angles = animation.sample(now);
        self.stroke_start = angles.stroke_start;
        self.stroke_end = angles.stroke_end;
        self.rotation = angles.rotation;
        self.cache.clear();
    }

    /// The indicator as an element, sized to its frame. The widget keeps
    /// ownership of all state; the element only borrows it for drawing.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(self.size.width)
            .height(self.size.height)
            .into()
    }

    fn draw_arc(&self, frame: &mut canvas::Frame, bounds: Size) {
        let (start, end) = normalized_arc(ArcAngles {
            stroke_start: self.stroke_start,
            stroke_end: self.stroke_end,
            rotation: self.rotation,
        });

        // Inset so the stroke's outer edge touches the bounding box.
        let thickness = f32::from(self.thickness);
        let inset = (thickness / 2.0).ceil();
        let radius = bounds.width.min(bounds.height) / 2.0 - inset;
        if radius <= 0.0 {
            return;
        }

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(thickness)
                .with_color(self.color),
        );
    }
}

impl<Message> Program<Message> for ActivityIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            if self.animation.is_none() {
                return;
            }

            self.draw_arc(frame, bounds.size());
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Size = Size::new(50.0, 50.0);

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn new_indicator_defaults() {
        let indicator = ActivityIndicator::new(FRAME);

        assert!(!indicator.is_animating());
        assert_eq!(indicator.thickness(), 3);
        assert_eq!(indicator.color(), Color::BLACK);
    }

    #[test]
    fn color_round_trip() {
        let mut indicator = ActivityIndicator::new(FRAME);
        let color = Color::from_rgb(0.9, 0.2, 0.5);

        indicator.set_color(color);
        assert_eq!(indicator.color(), color);
    }

    #[test]
    fn thickness_round_trip_over_documented_range() {
        let mut indicator = ActivityIndicator::new(FRAME);

        for thickness in 1..=10 {
            indicator.set_thickness(thickness);
            assert_eq!(indicator.thickness(), thickness);
        }
    }

    #[test]
    fn thickness_is_stored_unvalidated() {
        // Range enforcement is the caller's contract; the widget keeps
        // whatever it is handed.
        let mut indicator = ActivityIndicator::new(FRAME);

        indicator.set_thickness(0);
        assert_eq!(indicator.thickness(), 0);
        indicator.set_thickness(200);
        assert_eq!(indicator.thickness(), 200);
    }

    #[test]
    fn animating_toggles() {
        let mut indicator = ActivityIndicator::new(FRAME);
        let start = Instant::now();

        indicator.set_animating_at(true, start);
        assert!(indicator.is_animating());

        indicator.set_animating_at(false, start);
        assert!(!indicator.is_animating());
        assert!(indicator.animation.is_none());
    }

    #[test]
    fn starting_while_animating_keeps_the_running_ensemble() {
        let mut indicator = ActivityIndicator::new(FRAME);
        let start = Instant::now();
        let later = start + Duration::from_millis(750);

        indicator.set_animating_at(true, start);
        indicator.tick(later);
        let rotation = indicator.rotation;
        assert!(rotation > 0.0);

        // A redundant start must not reschedule; sampling the same instant
        // again yields the same angle only if the original ensemble (and its
        // start time) survived.
        indicator.set_animating_at(true, start + Duration::from_millis(500));
        indicator.tick(later);
        assert_eq!(indicator.rotation, rotation);
    }

    #[test]
    fn stopping_while_stopped_is_a_no_op() {
        let mut indicator = ActivityIndicator::new(FRAME);

        indicator.set_animating_at(false, Instant::now());
        assert!(!indicator.is_animating());
    }

    #[test]
    fn tick_is_inert_while_stopped() {
        let mut indicator = ActivityIndicator::new(FRAME);

        indicator.tick(Instant::now() + Duration::from_secs(5));
        assert_eq!(indicator.rotation, 0.0);
        assert_eq!(indicator.stroke_start, 0.0);
        assert_eq!(indicator.stroke_end, 0.0);
    }

    #[test]
    fn stroke_start_curve_shape() {
        assert_close(stroke_start_curve(0.0), 0.0);
        // fast segment covers 80% of the turn by half progress
        assert_close(stroke_start_curve(0.25), 0.4);
        assert_close(stroke_start_curve(0.5), 0.8);
        // slow segment crawls through the rest
        assert_close(stroke_start_curve(0.75), 0.9);
        assert_close(stroke_start_curve(1.0), 1.0);
    }

    #[test]
    fn stroke_end_curve_reaches_full_turn_early_and_clamps() {
        assert_close(stroke_end_curve(0.0), 0.0);
        assert_close(stroke_end_curve(0.3), 0.5);
        assert_close(stroke_end_curve(0.6), 1.0);
        assert_close(stroke_end_curve(0.8), 1.0);
        assert_close(stroke_end_curve(1.0), 1.0);
    }

    #[test]
    fn curves_are_monotonic() {
        let mut previous_start = stroke_start_curve(0.0);
        let mut previous_end = stroke_end_curve(0.0);

        for step in 1..=100 {
            let progress = step as f32 / 100.0;

            let start = stroke_start_curve(progress);
            assert!(start >= previous_start, "stroke start dipped at {progress}");
            previous_start = start;

            let end = stroke_end_curve(progress);
            assert!(end >= previous_end, "stroke end dipped at {progress}");
            previous_end = end;
        }
    }

    #[test]
    fn normalized_arc_runs_forward_and_never_degenerates() {
        let cases = [
            // leading edge a fresh cycle behind the trailing edge
            ArcAngles {
                stroke_start: 5.5,
                stroke_end: 0.3,
                rotation: 2.0,
            },
            // coincident edges collapse to the minimum sliver
            ArcAngles {
                stroke_start: 1.0,
                stroke_end: 1.0,
                rotation: 4.0,
            },
            // both already past a full turn of rotation offset
            ArcAngles {
                stroke_start: 6.2,
                stroke_end: 0.1,
                rotation: 6.2,
            },
            ArcAngles {
                stroke_start: 0.0,
                stroke_end: 0.0,
                rotation: 0.0,
            },
        ];

        for angles in cases {
            let (start, end) = normalized_arc(angles);
            assert!(end >= start, "arc runs backwards for {angles:?}");
            assert!(
                end - start >= MIN_ARC - 1e-6,
                "degenerate span for {angles:?}"
            );
        }
    }

    #[test]
    fn ensemble_survives_a_full_cycle_of_ticks() {
        let mut indicator = ActivityIndicator::new(FRAME);
        let start = Instant::now();
        indicator.set_animating_at(true, start);

        // longest part: stroke start, 2/3 delay + one full cycle; run past it
        // at a 60fps cadence
        let longest = CYCLE * 2 / 3 + CYCLE * 5 / 3;
        let step = Duration::from_millis(16);

        let mut elapsed = Duration::ZERO;
        while elapsed <= longest {
            indicator.tick(start + elapsed);

            assert!(indicator.is_animating());
            let (arc_start, arc_end) = normalized_arc(ArcAngles {
                stroke_start: indicator.stroke_start,
                stroke_end: indicator.stroke_end,
                rotation: indicator.rotation,
            });
            assert!(arc_end - arc_start >= MIN_ARC - 1e-6);

            elapsed += step;
        }
    }

    #[test]
    fn delayed_trailing_edge_holds_during_catch_up() {
        let mut indicator = ActivityIndicator::new(FRAME);
        let start = Instant::now();
        indicator.set_animating_at(true, start);

        // within the stroke-start delay the trailing edge sits still while
        // the leading edge and rotation already move
        indicator.tick(start + Duration::from_millis(500));
        assert_eq!(indicator.stroke_start, 0.0);
        assert!(indicator.stroke_end > 0.0);
        assert!(indicator.rotation > 0.0);
    }

    #[test]
    fn dropping_a_running_indicator_is_clean() {
        let mut indicator = ActivityIndicator::new(FRAME);
        indicator.set_animating_at(true, Instant::now());

        drop(indicator);
    }
}
