//! A round ammeter: a gradient arc over eleven ticks with a seven-segment
//! readout and a unit label, drawn by a small software rasterizer.
//!
//! [`AmpMeter`] owns the state and knows how to paint itself onto any
//! [`Painter`]. [`AmpMeterApp`] hosts it in a desktop window, and
//! [`export::render_to_image`] renders it headless.

// ============================================================================
// MODULES
// ============================================================================

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod format;
pub mod gauge;
pub mod geometry;
pub mod meter;
pub mod painter;
pub mod raster;
pub mod scene;
pub mod schedule;
pub mod segments;
pub mod window;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use command::{MeterCommand, ParseCommandError};
pub use config::MeterConfig;
pub use error::Error;
pub use format::{display_text, FormatMode};
pub use geometry::{PointF, RectF, SizeHint};
pub use meter::{AmpMeter, AnimationState, Widget};
pub use painter::{Color, Painter};
pub use raster::Canvas;
pub use scene::{DrawCommand, Scene};
pub use schedule::{Clock, IntervalScheduler, Scheduler, SystemClock, TimerId};
pub use segments::segment_on;
pub use window::AmpMeterApp;
