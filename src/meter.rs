//! The ammeter widget: value, readout mode and the demo animation.

use std::time::Duration;

use crate::config::{palette, ANIMATION_INTERVAL_MS, CONTENT_MARGIN, MIN_HEIGHT, MIN_WIDTH};
use crate::display::SegmentDisplayRenderer;
use crate::format::FormatMode;
use crate::gauge::{GaugeRenderer, MAX_VALUE, MIN_VALUE};
use crate::geometry::{RectF, SizeHint};
use crate::painter::{Color, Painter};
use crate::schedule::{Clock, Scheduler, SystemClock, TimerId};

/// What a host needs from anything it lays out and paints.
pub trait Widget {
    fn minimum_size_hint(&self) -> SizeHint;

    /// Paints the whole widget into `area`, the widget's content rectangle.
    fn paint(&self, painter: &mut dyn Painter, area: RectF);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Stopped,
    Running(TimerId),
}

/// Clamps `value` to the meter range. NaN pins to the top of the scale.
pub fn bound_value(value: f64) -> f64 {
    if value.is_nan() {
        MAX_VALUE
    } else {
        value.clamp(MIN_VALUE, MAX_VALUE)
    }
}

/// Relative float equality, about twelve significant digits.
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1_000_000_000_000.0 <= a.abs().min(b.abs())
}

/// Demo animation curve: a slow sine around mid scale.
pub fn demo_value(now_millis: f64) -> f64 {
    50.0 + 45.0 * (now_millis / 1200.0).sin()
}

/// Drawing bounds of the gauge inside a widget content area.
pub fn drawing_bounds(area: RectF) -> RectF {
    area.inset(CONTENT_MARGIN)
}

type RedrawListener = Box<dyn FnMut()>;

pub struct AmpMeter<S: Scheduler, C: Clock = SystemClock> {
    value: f64,
    mode: FormatMode,
    animation: AnimationState,
    interval: Duration,
    background: Color,
    scheduler: S,
    clock: C,
    redraw_listeners: Vec<RedrawListener>,
}

impl<S: Scheduler> AmpMeter<S, SystemClock> {
    pub fn new(scheduler: S) -> Self {
        Self::with_clock(scheduler, SystemClock)
    }
}

impl<S: Scheduler, C: Clock> AmpMeter<S, C> {
    pub fn with_clock(scheduler: S, clock: C) -> Self {
        Self {
            value: MIN_VALUE,
            mode: FormatMode::default(),
            animation: AnimationState::Stopped,
            interval: Duration::from_millis(ANIMATION_INTERVAL_MS),
            background: palette::BACKGROUND,
            scheduler,
            clock,
            redraw_listeners: Vec::new(),
        }
    }

    /// Tick interval used the next time the demo animation starts.
    pub fn with_animation_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn number_format_mode(&self) -> FormatMode {
        self.mode
    }

    pub fn demo_animation_enabled(&self) -> bool {
        matches!(self.animation, AnimationState::Running(_))
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Registers a callback run every time the meter needs repainting.
    pub fn on_redraw(&mut self, listener: impl FnMut() + 'static) {
        self.redraw_listeners.push(Box::new(listener));
    }

    fn request_redraw(&mut self) {
        for listener in &mut self.redraw_listeners {
            listener();
        }
    }

    /// Stores `value` clamped to `0.0..=99.9`. Repaints only if it changed.
    pub fn set_value(&mut self, value: f64) {
        let bounded = bound_value(value);
        if fuzzy_eq(self.value, bounded) {
            return;
        }
        tracing::trace!(value = bounded, "value changed");
        self.value = bounded;
        self.request_redraw();
    }

    pub fn set_number_format_mode(&mut self, mode: FormatMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(%mode, "format mode changed");
        self.mode = mode;
        self.request_redraw();
    }

    pub fn set_demo_animation_enabled(&mut self, enabled: bool) {
        match (self.animation, enabled) {
            (AnimationState::Stopped, true) => {
                let timer = self.scheduler.start_repeating(self.interval);
                tracing::debug!(timer = timer.raw(), interval = ?self.interval, "demo animation started");
                self.animation = AnimationState::Running(timer);
            }
            (AnimationState::Running(timer), false) => {
                self.scheduler.cancel(timer);
                tracing::debug!(timer = timer.raw(), "demo animation stopped");
                self.animation = AnimationState::Stopped;
            }
            _ => {}
        }
    }

    /// Delivers a timer tick. Returns `false` for ticks of a timer the meter
    /// no longer owns.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.animation != AnimationState::Running(id) {
            return false;
        }
        let next = demo_value(self.clock.now_millis());
        self.set_value(next);
        true
    }
}

impl<S: Scheduler, C: Clock> Widget for AmpMeter<S, C> {
    fn minimum_size_hint(&self) -> SizeHint {
        SizeHint {
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
        }
    }

    fn paint(&self, painter: &mut dyn Painter, area: RectF) {
        painter.fill_rect(area, self.background);
        let bounds = drawing_bounds(area);
        GaugeRenderer::new(self.value).draw_ring(painter, bounds);
        SegmentDisplayRenderer::new(self.value, self.mode).draw_display(painter, bounds);
    }
}

impl<S: Scheduler, C: Clock> Drop for AmpMeter<S, C> {
    fn drop(&mut self) {
        self.set_demo_animation_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_value_clamps() {
        assert_eq!(bound_value(-3.0), 0.0);
        assert_eq!(bound_value(150.0), 99.9);
        assert_eq!(bound_value(f64::INFINITY), 99.9);
        assert_eq!(bound_value(f64::NEG_INFINITY), 0.0);
        assert_eq!(bound_value(f64::NAN), 99.9);
        assert_eq!(bound_value(42.5), 42.5);
    }

    #[test]
    fn fuzzy_eq_is_relative() {
        assert!(fuzzy_eq(0.0, 0.0));
        assert!(fuzzy_eq(50.0, 50.0 + 1e-12));
        assert!(!fuzzy_eq(50.0, 50.001));
        assert!(!fuzzy_eq(0.0, 1e-15));
    }

    #[test]
    fn demo_curve_stays_inside_the_scale() {
        assert_eq!(demo_value(0.0), 50.0);
        let peak = demo_value(1200.0 * std::f64::consts::FRAC_PI_2);
        assert!((peak - 95.0).abs() < 1e-9);
        for ms in (0..100_000).step_by(33) {
            let v = demo_value(f64::from(ms));
            assert!((5.0..=95.0).contains(&v));
        }
    }

    #[test]
    fn margin_is_twelve_units() {
        let bounds = drawing_bounds(RectF::new(0.0, 0.0, 324.0, 324.0));
        assert_eq!(bounds, RectF::new(12.0, 12.0, 300.0, 300.0));
    }
}
