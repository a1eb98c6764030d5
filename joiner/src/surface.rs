//! The two seams between the animation and whatever hosts it: something to
//! draw on and something that can be asked for another frame.

use crate::error::ScheduleError;
use framebuffer::{Canvas, Color, FrameBuffer};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// How an outline is painted. Strokes always use round caps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Drawing primitives offered by the host. Angles are in degrees, with 0
/// along +x and positive sweeps turning clockwise on screen.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_background(&mut self, color: Color);
    fn stroke_arc(&mut self, center: Point, radius: f32, start: f32, sweep: f32, stroke: &Stroke);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke);
}

/// Lets the animation ask its host for more frames
pub trait Scheduler {
    /// Asks for a redraw as soon as possible
    fn request_redraw(&mut self) -> Result<(), ScheduleError>;

    /// Asks for a redraw once the delay has passed
    fn request_redraw_after(&mut self, delay: Duration) -> Result<(), ScheduleError>;
}

impl Surface for Canvas<Color, FrameBuffer> {
    fn width(&self) -> f32 {
        Canvas::width(self) as f32
    }

    fn height(&self) -> f32 {
        Canvas::height(self) as f32
    }

    fn fill_background(&mut self, color: Color) {
        self.set_fill(color);
        self.fill();
    }

    fn stroke_arc(&mut self, center: Point, radius: f32, start: f32, sweep: f32, stroke: &Stroke) {
        self.set_stroke(stroke.color);
        self.set_stroke_width(stroke.width as f64);
        Canvas::stroke_arc(
            self,
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            sweep as f64,
        );
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.set_stroke(stroke.color);
        self.set_stroke_width(stroke.width as f64);
        Canvas::stroke_line(
            self,
            from.x.round() as i64,
            from.y.round() as i64,
            to.x.round() as i64,
            to.y.round() as i64,
        );
    }
}
