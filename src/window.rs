// ============================================================================
// DESKTOP HOST
// ============================================================================

use std::path::Path;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::command::MeterCommand;
use crate::config::MeterConfig;
use crate::error::Error;
use crate::export::{load_font, render_to_image};
use crate::geometry::RectF;
use crate::meter::{AmpMeter, Widget};
use crate::raster::Canvas;
use crate::scene::Scene;
use crate::schedule::IntervalScheduler;

/// Main application struct - opens the meter in a window
#[derive(Debug, Clone)]
pub struct AmpMeterApp {
    config: MeterConfig,
}

impl AmpMeterApp {
    pub fn new(config: MeterConfig) -> Self {
        Self { config }
    }

    /// A meter in the initial state described by the config.
    pub fn build_meter(&self) -> AmpMeter<IntervalScheduler> {
        let mut meter = AmpMeter::new(IntervalScheduler::new())
            .with_animation_interval(Duration::from_millis(self.config.animation_interval_ms))
            .with_background(self.config.background_color);
        meter.set_number_format_mode(self.config.format_mode);
        meter.set_value(self.config.initial_value);
        meter.set_demo_animation_enabled(self.config.demo_animation);
        meter
    }

    /// Renders a single frame at the configured window size to `path`.
    pub fn screenshot(&self, path: &Path) -> Result<(), Error> {
        let font = load_font(self.config.font_path.as_deref())?;
        let meter = self.build_meter();
        render_to_image(
            &meter,
            self.config.window_width,
            self.config.window_height,
            font.as_ref(),
            path,
        )
    }

    pub fn show(&self) -> Result<(), Error> {
        self.run_window(None)
    }

    /// Like [`AmpMeterApp::show`], applying commands from `receiver` as they
    /// arrive.
    pub fn show_with_commands(&self, receiver: Receiver<MeterCommand>) -> Result<(), Error> {
        self.run_window(Some(receiver))
    }

    fn run_window(&self, receiver: Option<Receiver<MeterCommand>>) -> Result<(), Error> {
        let font = load_font(self.config.font_path.as_deref())?;
        let mut meter = self.build_meter();
        let min_size = meter.minimum_size_hint();

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.window_width),
                f64::from(self.config.window_height),
            ))
            .with_min_inner_size(LogicalSize::new(
                f64::from(min_size.width),
                f64::from(min_size.height),
            ))
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();

        let redraw_window = window.clone();
        meter.on_redraw(move || redraw_window.request_redraw());

        let size = window.inner_size();
        let mut fb_width = size.width;
        let mut fb_height = size.height;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;
        tracing::info!(width = fb_width, height = fb_height, "meter window opened");

        let command_poll = Duration::from_secs_f64(1.0 / self.config.max_framerate.max(1.0));
        let mut scene = Scene::new();

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    // Minimized windows report a zero size.
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    fb_width = new_size.width;
                    fb_height = new_size.height;
                    if let Err(err) = pixels.resize_buffer(fb_width, fb_height) {
                        tracing::warn!(%err, "failed to resize frame buffer");
                    }
                    if let Err(err) = pixels.resize_surface(fb_width, fb_height) {
                        tracing::warn!(%err, "failed to resize surface");
                    }
                    window_clone.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    scene.clear();
                    meter.paint(
                        &mut scene,
                        RectF::new(0.0, 0.0, f64::from(fb_width), f64::from(fb_height)),
                    );
                    {
                        let mut canvas =
                            Canvas::new(pixels.frame_mut(), fb_width as usize, fb_height as usize)
                                .with_font(font.as_ref());
                        scene.render(&mut canvas);
                    }
                    if let Err(err) = pixels.render() {
                        tracing::error!(%err, "failed to present frame");
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if let Some(receiver) = &receiver {
                    for command in receiver.try_iter() {
                        command.apply(&mut meter);
                    }
                }

                let now = Instant::now();
                for id in meter.scheduler_mut().poll(now) {
                    meter.on_timer(id);
                }

                let mut wake = meter.scheduler().next_deadline();
                if receiver.is_some() {
                    let poll_at = now + command_poll;
                    wake = Some(wake.map_or(poll_at, |deadline| deadline.min(poll_at)));
                }
                window_target.set_control_flow(match wake {
                    Some(deadline) => ControlFlow::WaitUntil(deadline),
                    None => ControlFlow::Wait,
                });
            }
            _ => {}
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatMode;

    #[test]
    fn meter_starts_from_config() {
        let app = AmpMeterApp::new(
            MeterConfig::builder()
                .initial_value(120.0)
                .format_mode(FormatMode::Integer)
                .demo_animation(true)
                .build(),
        );
        let meter = app.build_meter();
        assert_eq!(meter.value(), 99.9);
        assert_eq!(meter.number_format_mode(), FormatMode::Integer);
        assert!(meter.demo_animation_enabled());
        assert_eq!(meter.scheduler().active(), 1);
    }
}
