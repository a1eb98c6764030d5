use std::f64::consts::PI;
use std::io;

/// A simple RGB color with transparency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: u8,
}

impl Color {
    /// Creates a new color from R, G and B components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color {
            r,
            g,
            b,
            alpha: 255,
        }
    }

    /// Creates a new color from R, G, B and transparency components
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: u8) -> Color {
        Color { r, g, b, alpha }
    }

    /// Returns a fully transparent color, which buffers never draw
    pub const fn transparent() -> Color {
        Color::rgba(0, 0, 0, 0)
    }

    /// Returns a Color representing pure white
    pub const fn white() -> Color {
        Color::rgb(255, 255, 255)
    }

    /// Returns a Color representing pure black
    pub const fn black() -> Color {
        Color::rgb(0, 0, 0)
    }
}

pub trait GraphicBuffer<T: Copy> {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn put_point(&mut self, x: i64, y: i64, color: T);
    fn get_point(&self, x: i64, y: i64) -> Option<T>;
}

/// A graphical buffer containing pixel colors
pub struct FrameBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Creates a new FrameBuffer with a black background
    pub fn new(width: u32, height: u32) -> FrameBuffer {
        FrameBuffer {
            pixels: vec![0; (width * height * 3) as usize],
            width,
            height,
        }
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            None
        } else {
            Some(((y * (self.width as i64) * 3) + (x * 3)) as usize)
        }
    }

    /// Dumps the framebuffer as a binary PPM image
    pub fn write(&self, output: &mut impl io::Write) -> io::Result<()> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        output.write_all(header.as_bytes())?;
        output.write_all(&self.pixels)?;
        output.flush()
    }
}

impl GraphicBuffer<Color> for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_point(&self, x: i64, y: i64) -> Option<Color> {
        self.offset(x, y).map(|offset| {
            Color::rgb(
                self.pixels[offset],
                self.pixels[offset + 1],
                self.pixels[offset + 2],
            )
        })
    }

    fn put_point(&mut self, x: i64, y: i64, color: Color) {
        let offset = match self.offset(x, y) {
            Some(offset) => offset,
            None => return,
        };

        if color.alpha == 0 {
            return;
        }

        if color.alpha == 255 {
            self.pixels[offset] = color.r;
            self.pixels[offset + 1] = color.g;
            self.pixels[offset + 2] = color.b;
            return;
        }

        let base_blend = (255 - color.alpha) as u16;
        let blend = |current: u8, channel: u8| {
            (((current as u16 * base_blend) + (channel as u16 * color.alpha as u16)) / 255) as u8
        };

        self.pixels[offset] = blend(self.pixels[offset], color.r);
        self.pixels[offset + 1] = blend(self.pixels[offset + 1], color.g);
        self.pixels[offset + 2] = blend(self.pixels[offset + 2], color.b);
    }
}

/// Visits every pixel on the line between the two points, endpoints included
fn trace_line<F: FnMut(i64, i64)>(x: i64, y: i64, x2: i64, y2: i64, mut plot: F) {
    /*
    Ref: http://members.chello.at/~easyfilter/Bresenham.pdf, p.13

    For the line 0 = (py - y) * dx - (px - x) * dy, stepping in x changes the
    error by -dy and stepping in y changes it by dx. Each iteration takes
    whichever steps keep the accumulated error closest to zero.
     */
    let deltax = (x2 - x).abs();
    let stepx = (x2 - x).signum();

    let deltay = -(y2 - y).abs();
    let stepy = (y2 - y).signum();

    let mut error = deltax + deltay;

    let mut px = x;
    let mut py = y;
    loop {
        plot(px, py);

        let next_error = 2 * error;
        if next_error >= deltay {
            if px == x2 {
                break;
            }

            error += deltay;
            px += stepx;
        }

        if next_error <= deltax {
            if py == y2 {
                break;
            }

            error += deltax;
            py += stepy;
        }
    }
}

/// Performs drawing operations on an underlying graphical buffer
pub struct Canvas<Element: Copy, Buffer: GraphicBuffer<Element>> {
    buffer: Buffer,
    fill: Element,
    stroke: Element,
    stroke_width: f64,
}

impl<Element: Copy, Buffer: GraphicBuffer<Element>> Canvas<Element, Buffer> {
    /// Initializes a canvas on top of the given buffer with the given fill and
    /// stroke colors, and a one pixel stroke
    pub fn new(buffer: Buffer, fill: Element, stroke: Element) -> Canvas<Element, Buffer> {
        Canvas {
            buffer,
            fill,
            stroke,
            stroke_width: 1.0,
        }
    }

    /// Gets the underlying buffer for the canvas
    pub fn buffer(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Gets the width of the underlying buffer
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Gets the height of the underlying buffer
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Gets the given point from the underlying canvas
    pub fn get_point(&self, x: i64, y: i64) -> Option<Element> {
        self.buffer.get_point(x, y)
    }

    /// Sets the current fill color
    pub fn set_fill(&mut self, fill: Element) {
        self.fill = fill;
    }

    /// Sets the current stroke color
    pub fn set_stroke(&mut self, stroke: Element) {
        self.stroke = stroke;
    }

    /// Sets the width of strokes. Anything wider than a pixel is drawn with
    /// round caps.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.max(1.0);
    }

    /// Draws a single pixel at the given point using the current fill
    pub fn fill_point(&mut self, x: i64, y: i64) {
        self.buffer.put_point(x, y, self.fill);
    }

    /// Draws a stroke-sized dot centered on the given point
    fn stroke_dot(&mut self, x: i64, y: i64) {
        if self.stroke_width <= 1.0 {
            self.buffer.put_point(x, y, self.stroke);
            return;
        }

        let radius = self.stroke_width / 2.0;
        let reach = radius.ceil() as i64;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if ((dx * dx + dy * dy) as f64) <= radius * radius {
                    self.buffer.put_point(x + dx, y + dy, self.stroke);
                }
            }
        }
    }

    /// Fills the entire buffer using the currently assigned fill value
    pub fn fill(&mut self) {
        for y in 0..self.buffer.height() {
            for x in 0..self.buffer.width() {
                self.fill_point(x as i64, y as i64);
            }
        }
    }

    /// Draws a straight line between the two points using the current stroke
    pub fn stroke_line(&mut self, x: i64, y: i64, x2: i64, y2: i64) {
        trace_line(x, y, x2, y2, |px, py| self.stroke_dot(px, py));
    }

    /// Draws part of a circle's perimeter using the current stroke. Angles are
    /// in degrees, with 0 pointing along +x and positive sweeps running
    /// clockwise on screen.
    pub fn stroke_arc(&mut self, x: f64, y: f64, r: f64, start: f64, sweep: f64) {
        if sweep == 0.0 || r <= 0.0 {
            return;
        }

        let sweep = sweep.max(-360.0).min(360.0);
        let start_rad = start * PI / 180.0;
        let sweep_rad = sweep * PI / 180.0;

        // One sample per pixel of arc length keeps the outline gap free
        let samples = (sweep_rad.abs() * r).ceil().max(1.0) as i64;

        let mut last = None;
        for i in 0..=samples {
            let angle = start_rad + sweep_rad * (i as f64 / samples as f64);
            let px = (x + r * angle.cos()).round() as i64;
            let py = (y + r * angle.sin()).round() as i64;

            if last != Some((px, py)) {
                self.stroke_dot(px, py);
                last = Some((px, py));
            }
        }
    }
}
