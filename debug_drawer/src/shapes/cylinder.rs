use glam::Vec3;

use super::{Circle, DebugShape};
use crate::math::{CircleBasis, slerp};
use crate::sink::LineSink;
use crate::style::LineStyle;

/// Segments per hemispherical arc of a capsule cap.
const CAPSULE_ARC_SEGMENTS: usize = 25;

/// Draw the four lines joining two parallel cross sections at ±right and ±forward.
fn draw_side_lines<S: LineSink + ?Sized>(
    sink: &mut S,
    start: Vec3,
    end: Vec3,
    basis: &CircleBasis,
    style: &LineStyle,
) {
    sink.draw_line(start + basis.right, end + basis.right, style);
    sink.draw_line(start - basis.right, end - basis.right, style);
    sink.draw_line(start + basis.forward, end + basis.forward, style);
    sink.draw_line(start - basis.forward, end - basis.forward, style);
}

/// A cylinder between two end points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl Cylinder {
    pub const DEFAULT_RADIUS: f32 = 1.0;

    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

impl DebugShape for Cylinder {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let (start, end) = (self.start, self.end);
        let basis = CircleBasis::new(end - start, self.radius);
        let up = basis.up;

        // Radial circles
        Circle::new(start).with_normal(up).with_radius(self.radius).draw(sink, style);
        Circle::new(end).with_normal(-up).with_radius(self.radius).draw(sink, style);
        Circle::new((start + end) * 0.5)
            .with_normal(up)
            .with_radius(self.radius)
            .draw(sink, style);

        draw_side_lines(sink, start, end, &basis, style);

        // End caps
        for cap in [start, end] {
            sink.draw_line(cap - basis.right, cap + basis.right, style);
            sink.draw_line(cap - basis.forward, cap + basis.forward, style);
        }
    }

    fn segment_count(&self) -> usize {
        3 * Circle::new(self.start).segment_count() + 8
    }
}

/// A capsule whose total length, caps included, is `|end - start|`.
///
/// When the capsule is shorter than its diameter the body collapses to the
/// midpoint and only the caps are drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Capsule {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl Capsule {
    pub const DEFAULT_RADIUS: f32 = 1.0;

    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Distance from the midpoint to each cap center: `max(0, height/2 - radius)`.
    pub fn side_length(&self) -> f32 {
        (self.start.distance(self.end) * 0.5 - self.radius).max(0.0)
    }

    /// Centers of the two hemispherical caps.
    pub fn cap_centers(&self) -> (Vec3, Vec3) {
        let middle = (self.start + self.end) * 0.5;
        let side = self.side_length();
        (
            middle + (self.start - middle).normalize_or_zero() * side,
            middle + (self.end - middle).normalize_or_zero() * side,
        )
    }
}

impl DebugShape for Capsule {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let basis = CircleBasis::new(self.end - self.start, self.radius);
        let (up, right, forward) = (basis.up, basis.right, basis.forward);
        let (start, end) = self.cap_centers();

        // Radial circles
        Circle::new(start).with_normal(up).with_radius(self.radius).draw(sink, style);
        Circle::new(end).with_normal(-up).with_radius(self.radius).draw(sink, style);

        draw_side_lines(sink, start, end, &basis, style);

        let steps = CAPSULE_ARC_SEGMENTS as f32;
        for i in 1..=CAPSULE_ARC_SEGMENTS {
            let t0 = (i - 1) as f32 / steps;
            let t1 = i as f32 / steps;
            // Start cap bends toward -up, end cap toward +up.
            for (center, pole) in [(start, -up), (end, up)] {
                for rim in [right, -right, forward, -forward] {
                    sink.draw_line(
                        center + slerp(rim, pole, t1),
                        center + slerp(rim, pole, t0),
                        style,
                    );
                }
            }
        }
    }

    fn segment_count(&self) -> usize {
        2 * Circle::new(self.start).segment_count() + 4 + 8 * CAPSULE_ARC_SEGMENTS
    }
}
