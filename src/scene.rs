// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

use crate::geometry::{PointF, RectF};
use crate::painter::{Alignment, Brush, Color, Painter, Pen, TextStyle};
use crate::raster::Canvas;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: RectF,
        color: Color,
    },
    Arc {
        center: PointF,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
        pen: Pen,
    },
    RoundedRect {
        rect: RectF,
        radius: f64,
        fill: Option<Brush>,
        stroke: Option<Pen>,
    },
    Ellipse {
        rect: RectF,
        color: Color,
    },
    Line {
        from: PointF,
        to: PointF,
        pen: Pen,
    },
    Text {
        rect: RectF,
        text: String,
        style: TextStyle,
        align: Alignment,
    },
}

/// An ordered list of draw commands, replayed onto a [`Canvas`].
#[derive(Clone, Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect { rect, color } => canvas.fill_rect(*rect, *color),
                DrawCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                    pen,
                } => canvas.stroke_arc(*center, *radius, *start_angle, *sweep_angle, pen),
                DrawCommand::RoundedRect {
                    rect,
                    radius,
                    fill,
                    stroke,
                } => {
                    if let Some(brush) = fill {
                        canvas.fill_rounded_rect(*rect, *radius, brush);
                    }
                    if let Some(pen) = stroke {
                        canvas.stroke_rounded_rect(*rect, *radius, pen);
                    }
                }
                DrawCommand::Ellipse { rect, color } => canvas.fill_ellipse(*rect, *color),
                DrawCommand::Line { from, to, pen } => canvas.draw_line(*from, *to, pen),
                DrawCommand::Text {
                    rect,
                    text,
                    style,
                    align,
                } => canvas.draw_text(*rect, text, style, *align),
            }
        }
    }
}

impl Painter for Scene {
    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.add_command(DrawCommand::FillRect { rect, color });
    }

    fn stroke_arc(&mut self, center: PointF, radius: f64, start_deg: f64, sweep_deg: f64, pen: &Pen) {
        self.add_command(DrawCommand::Arc {
            center,
            radius,
            start_angle: start_deg,
            sweep_angle: sweep_deg,
            pen: pen.clone(),
        });
    }

    fn draw_rounded_rect(
        &mut self,
        rect: RectF,
        radius: f64,
        fill: Option<&Brush>,
        stroke: Option<&Pen>,
    ) {
        self.add_command(DrawCommand::RoundedRect {
            rect,
            radius,
            fill: fill.cloned(),
            stroke: stroke.cloned(),
        });
    }

    fn fill_ellipse(&mut self, rect: RectF, color: Color) {
        self.add_command(DrawCommand::Ellipse { rect, color });
    }

    fn draw_line(&mut self, from: PointF, to: PointF, pen: &Pen) {
        self.add_command(DrawCommand::Line {
            from,
            to,
            pen: pen.clone(),
        });
    }

    fn draw_text(&mut self, rect: RectF, text: &str, style: &TextStyle, align: Alignment) {
        self.add_command(DrawCommand::Text {
            rect,
            text: text.to_string(),
            style: *style,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painter_calls_are_recorded_in_order() {
        let mut scene = Scene::new();
        scene.fill_rect(RectF::new(0.0, 0.0, 4.0, 4.0), Color::new(1, 2, 3));
        scene.fill_ellipse(RectF::new(1.0, 1.0, 2.0, 2.0), Color::new(4, 5, 6));
        assert_eq!(scene.commands().len(), 2);
        assert!(matches!(scene.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(scene.commands()[1], DrawCommand::Ellipse { .. }));

        scene.clear();
        assert!(scene.commands().is_empty());
    }

    #[test]
    fn replay_paints_the_canvas() {
        let mut scene = Scene::new();
        scene.fill_rect(RectF::new(0.0, 0.0, 4.0, 4.0), Color::new(10, 20, 30));

        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        scene.render(&mut canvas);

        assert_eq!(&frame[0..4], &[10, 20, 30, 0xff]);
    }
}
