//! Geometry of a single concentric circle joiner.
//!
//! A node's progress is eased through `sin(progress * π)` and split into
//! `PARTS` phases: the outer ring sweeps in, then the inner ring, then four
//! connectors grow from the outer ring towards the inner one.

use crate::scale::PARTS;
use crate::surface::{Point, Stroke, Surface};
use framebuffer::Color;
use std::f32::consts::PI;

/// One color per node, plus a transparent sentinel that never becomes a node
pub const PALETTE: [Color; 5] = [
    Color::rgb(0xF4, 0x43, 0x36),
    Color::rgb(0x79, 0x55, 0x48),
    Color::rgb(0x4C, 0xAF, 0x50),
    Color::rgb(0xFF, 0x98, 0x00),
    Color::transparent(),
];

pub const BACKGROUND: Color = Color::rgb(0xBD, 0xBD, 0xBD);

/// Number of drawable palette entries, and so the length of the node chain
pub const NODE_COUNT: usize = PALETTE.len() - 1;

const STROKE_FACTOR: f32 = 90.0;
const OUTER_RADIUS_FACTOR: f32 = 6.9;
const INNER_RADIUS_FACTOR: f32 = 3.9;
const CONNECTORS: usize = 4;

/// Eases linear progress so the sweep speeds up and slows down again
pub fn sinify(progress: f32) -> f32 {
    (progress * PI).sin()
}

/// Picks the `i`th of `n` equal slices out of `scale`, rescaled to [0, 1]
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let n = n as f32;
    (scale - i as f32 / n).max(0.0).min(1.0 / n) * n
}

/// How far along each part of the figure is
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phases {
    pub outer: f32,
    pub inner: f32,
    pub connectors: f32,
}

impl Phases {
    pub fn at(progress: f32) -> Phases {
        let eased = sinify(progress);
        Phases {
            outer: divide_scale(eased, 0, PARTS),
            inner: divide_scale(eased, 1, PARTS),
            connectors: divide_scale(eased, 2, PARTS),
        }
    }
}

/// Draws the node with the given palette index at the given progress,
/// centered on the surface
pub fn draw_node<S: Surface + ?Sized>(surface: &mut S, color_index: usize, progress: f32) {
    let color = match PALETTE.get(color_index) {
        Some(color) if color.alpha != 0 => *color,
        _ => return,
    };

    let (w, h) = (surface.width(), surface.height());
    let size = w.min(h);
    let center = Point::new(w / 2.0, h / 2.0);
    let outer = size / OUTER_RADIUS_FACTOR;
    let inner = size / INNER_RADIUS_FACTOR;
    let stroke = Stroke {
        color,
        width: size / STROKE_FACTOR,
    };

    let phases = Phases::at(progress);
    if phases.outer > 0.0 {
        surface.stroke_arc(center, outer, 0.0, 360.0 * phases.outer, &stroke);
    }

    if phases.inner > 0.0 {
        surface.stroke_arc(center, inner, 0.0, 360.0 * phases.inner, &stroke);
    }

    if phases.connectors > 0.0 {
        let reach = outer + (inner - outer) * phases.connectors;
        for j in 0..CONNECTORS {
            let angle = (j as f32 * 90.0).to_radians();
            let (sin, cos) = angle.sin_cos();
            surface.stroke_line(
                Point::new(center.x + outer * cos, center.y + outer * sin),
                Point::new(center.x + reach * cos, center.y + reach * sin),
                &stroke,
            );
        }
    }
}
