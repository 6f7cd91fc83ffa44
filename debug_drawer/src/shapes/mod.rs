//! Wireframe shapes and their decomposition into line segments.
//!
//! Each shape is a small `Copy` descriptor whose constructor carries the
//! shape's defaults. [`DebugShape::draw`] emits a fixed sequence of segments
//! into any [`LineSink`]:
//!
//! | shape        | segments |
//! |--------------|----------|
//! | [`Point`]    | 3        |
//! | [`Aabb`]     | 12       |
//! | [`Cuboid`]   | 12       |
//! | [`LocalCube`]| 12       |
//! | [`Circle`]   | 90       |
//! | [`Sphere`]   | 108      |
//! | [`Cylinder`] | 278      |
//! | [`Cone`]     | 184      |
//! | [`Arrow`]    | 185      |
//! | [`Capsule`]  | 384      |

mod boxes;
mod circle;
mod cone;
mod cylinder;
mod point;

pub use boxes::{Aabb, Cuboid, LocalCube};
pub use circle::{CIRCLE_POINTS, Circle, Sphere};
pub use cone::{Arrow, Cone};
pub use cylinder::{Capsule, Cylinder};
pub use point::Point;

use crate::sink::LineSink;
use crate::style::LineStyle;

/// A shape that can be traced with straight line segments.
pub trait DebugShape {
    /// Emit this shape's segments, in order, into `sink`.
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle);

    /// Number of segments [`draw`](Self::draw) emits.
    fn segment_count(&self) -> usize;
}

/// Emit the 12 edges of a box from its 8 corners.
///
/// Corner order is `[lbb, rbb, rbf, lbf, lub, rub, ruf, luf]` (left/right,
/// bottom/up, back/front). Edges go bottom face, top face, then verticals.
fn draw_box_edges<S: LineSink + ?Sized>(sink: &mut S, c: &[glam::Vec3; 8], style: &LineStyle) {
    // Bottom face
    sink.draw_line(c[0], c[1], style);
    sink.draw_line(c[1], c[2], style);
    sink.draw_line(c[2], c[3], style);
    sink.draw_line(c[3], c[0], style);
    // Top face
    sink.draw_line(c[4], c[5], style);
    sink.draw_line(c[5], c[6], style);
    sink.draw_line(c[6], c[7], style);
    sink.draw_line(c[7], c[4], style);
    // Vertical edges
    sink.draw_line(c[0], c[4], style);
    sink.draw_line(c[1], c[5], style);
    sink.draw_line(c[2], c[6], style);
    sink.draw_line(c[3], c[7], style);
}

/// Unit corner signs in the order [`draw_box_edges`] expects.
const BOX_CORNER_SIGNS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const BOX_EDGE_COUNT: usize = 12;
