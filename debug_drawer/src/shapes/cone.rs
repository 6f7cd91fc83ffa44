use glam::Vec3;

use super::{Circle, DebugShape};
use crate::math::{Plane, perpendicular, slerp};
use crate::sink::LineSink;
use crate::style::LineStyle;

/// Head length of an [`Arrow`] as a fraction of its shaft.
const ARROW_HEAD_LENGTH: f32 = 0.333;
/// Half-angle of an [`Arrow`] head, in degrees.
const ARROW_HEAD_ANGLE: f32 = 15.0;

/// A cone opening from `tip` along `direction`.
///
/// The length of `direction` is the cone's height; `angle` is the half-angle
/// at the tip in degrees, clamped to `[0, 90]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cone {
    pub tip: Vec3,
    pub direction: Vec3,
    pub angle: f32,
}

impl Cone {
    pub const DEFAULT_ANGLE: f32 = 45.0;

    /// Unit-height cone opening upward (+Y) with a 45° half-angle.
    pub fn new(tip: Vec3) -> Self {
        Self {
            tip,
            direction: Vec3::Y,
            angle: Self::DEFAULT_ANGLE,
        }
    }

    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

impl DebugShape for Cone {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let forward = self.direction;
        let length = forward.length();
        let up = perpendicular(forward);
        let right = forward.cross(up).normalize() * length;
        let axis = forward.normalize();
        let t = self.angle / 90.0;

        let slant = slerp(forward, up, t);
        let base = Plane::from_normal_and_point(-axis, self.tip + forward);
        let dist = base.raycast(self.tip, slant).unwrap_or_else(|| {
            log::trace!("cone slant at {}° misses its base plane", self.angle);
            0.0
        });

        for edge in [up, -up, right, -right] {
            sink.draw_ray(self.tip, slerp(forward, edge, t).normalize() * dist, style);
        }

        let rim = slant.normalize() * dist;
        Circle::new(self.tip + forward)
            .with_normal(axis)
            .with_radius((forward - rim).length())
            .draw(sink, style);
        Circle::new(self.tip + forward * 0.5)
            .with_normal(axis)
            .with_radius(((forward - rim) * 0.5).length())
            .draw(sink, style);
    }

    fn segment_count(&self) -> usize {
        4 + 2 * Circle::new(self.tip).segment_count()
    }
}

/// A ray from `origin` to `origin + direction` with a cone head at the end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrow {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Arrow {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The cone drawn at the arrow's tip, opening back along the shaft.
    pub fn head(&self) -> Cone {
        Cone::new(self.origin + self.direction)
            .with_direction(-self.direction * ARROW_HEAD_LENGTH)
            .with_angle(ARROW_HEAD_ANGLE)
    }
}

impl DebugShape for Arrow {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        sink.draw_ray(self.origin, self.direction, style);
        self.head().draw(sink, style);
    }

    fn segment_count(&self) -> usize {
        1 + self.head().segment_count()
    }
}
