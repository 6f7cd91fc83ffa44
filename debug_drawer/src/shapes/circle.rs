use glam::Vec3;

use super::DebugShape;
use crate::math::CircleBasis;
use crate::sink::LineSink;
use crate::style::LineStyle;

/// Number of points sampled around a circle, first and last coinciding.
pub const CIRCLE_POINTS: usize = 91;
const CIRCLE_STEP_DEGREES: f32 = 4.0;

const SPHERE_STEPS: usize = 36;
const SPHERE_STEP_DEGREES: f32 = 10.0;

/// A circle around `center` in the plane perpendicular to `normal`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec3,
    /// Direction perpendicular to the circle's plane. Need not be normalized.
    pub normal: Vec3,
    pub radius: f32,
}

impl Circle {
    pub const DEFAULT_RADIUS: f32 = 1.0;

    /// Unit circle in the XZ plane (normal +Y).
    pub fn new(center: Vec3) -> Self {
        Self {
            center,
            normal: Vec3::Y,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// The sampled outline points, from 0° to 360° inclusive.
    pub fn points(&self) -> impl Iterator<Item = Vec3> {
        let basis = CircleBasis::new(self.normal, self.radius);
        let center = self.center;
        (0..CIRCLE_POINTS).map(move |i| {
            let angle = (i as f32 * CIRCLE_STEP_DEGREES).to_radians();
            center + basis.point_at(angle)
        })
    }
}

impl DebugShape for Circle {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let mut points = self.points();
        let Some(mut last) = points.next() else {
            return;
        };
        for next in points {
            sink.draw_line(last, next, style);
            last = next;
        }
    }

    fn segment_count(&self) -> usize {
        CIRCLE_POINTS - 1
    }
}

/// Wireframe sphere made of three axis-aligned great circles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub const DEFAULT_RADIUS: f32 = 1.0;

    pub fn new(center: Vec3) -> Self {
        Self {
            center,
            radius: Self::DEFAULT_RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Points at `angle` radians on the YZ, XZ and XY great circles.
    fn ring_points(&self, angle: f32) -> [Vec3; 3] {
        let (sin, cos) = angle.sin_cos();
        let (s, c) = (self.radius * sin, self.radius * cos);
        let p = self.center;
        [
            Vec3::new(p.x, p.y + s, p.z + c),
            Vec3::new(p.x + c, p.y, p.z + s),
            Vec3::new(p.x + c, p.y + s, p.z),
        ]
    }
}

impl DebugShape for Sphere {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let mut last = self.ring_points(0.0);
        for i in 1..=SPHERE_STEPS {
            let next = self.ring_points((i as f32 * SPHERE_STEP_DEGREES).to_radians());
            for (a, b) in last.iter().zip(&next) {
                sink.draw_line(*a, *b, style);
            }
            last = next;
        }
    }

    fn segment_count(&self) -> usize {
        SPHERE_STEPS * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_util::{EPS, assert_all_at_distance};
    use crate::sink::SegmentRecorder;

    #[test]
    fn test_circle_segment_count() {
        let mut rec = SegmentRecorder::new();
        let circle = Circle::new(Vec3::ZERO);
        circle.draw(&mut rec, &LineStyle::default());
        assert_eq!(rec.len(), 90);
        assert_eq!(rec.len(), circle.segment_count());
    }

    #[test]
    fn test_circle_points_on_radius_and_plane() {
        let center = Vec3::new(3.0, -1.0, 2.0);
        let normal = Vec3::new(1.0, 1.0, 0.0);
        let circle = Circle::new(center).with_normal(normal).with_radius(2.5);

        let points: Vec<Vec3> = circle.points().collect();
        assert_eq!(points.len(), CIRCLE_POINTS);
        assert_all_at_distance(points.iter().copied(), center, 2.5);

        let n = normal.normalize();
        for p in &points {
            assert!((*p - center).dot(n).abs() < EPS, "{p} off the circle plane");
        }
    }

    #[test]
    fn test_circle_is_closed() {
        let mut rec = SegmentRecorder::new();
        Circle::new(Vec3::ONE).with_radius(0.5).draw(&mut rec, &LineStyle::default());
        let first = rec.segments().first().unwrap().start;
        let last = rec.segments().last().unwrap().end;
        assert!(first.abs_diff_eq(last, EPS));

        // Consecutive segments share endpoints.
        for pair in rec.segments().windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_circle_default_axis_is_y() {
        let circle = Circle::new(Vec3::ZERO);
        for p in circle.points() {
            assert!(p.y.abs() < EPS);
        }
    }

    #[test]
    fn test_sphere_segments() {
        let mut rec = SegmentRecorder::new();
        let center = Vec3::new(-2.0, 4.0, 1.0);
        let sphere = Sphere::new(center).with_radius(3.0);
        sphere.draw(&mut rec, &LineStyle::default());
        assert_eq!(rec.len(), 108);
        assert_eq!(rec.len(), sphere.segment_count());
        assert_all_at_distance(rec.points(), center, 3.0);
    }

    #[test]
    fn test_sphere_rings_are_axis_planes() {
        let mut rec = SegmentRecorder::new();
        Sphere::new(Vec3::ZERO).draw(&mut rec, &LineStyle::default());
        for (i, seg) in rec.segments().iter().enumerate() {
            let flat = match i % 3 {
                0 => seg.start.x,
                1 => seg.start.y,
                _ => seg.start.z,
            };
            assert_eq!(flat, 0.0);
        }
    }
}
