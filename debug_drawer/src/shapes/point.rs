use glam::Vec3;

use super::DebugShape;
use crate::sink::LineSink;
use crate::style::LineStyle;

/// A cross marker: three axis-aligned lines of length `scale` centered on
/// `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub scale: f32,
}

impl Point {
    pub const DEFAULT_SCALE: f32 = 1.0;

    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            scale: Self::DEFAULT_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl DebugShape for Point {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let half = self.scale * 0.5;
        for axis in [Vec3::Y, Vec3::X, Vec3::Z] {
            sink.draw_ray(self.position + axis * half, -axis * self.scale, style);
        }
    }

    fn segment_count(&self) -> usize {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_util::assert_all_within;
    use crate::sink::SegmentRecorder;

    #[test]
    fn test_point_segments() {
        let mut rec = SegmentRecorder::new();
        let p = Point::new(Vec3::new(1.0, 2.0, 3.0)).with_scale(2.0);
        p.draw(&mut rec, &LineStyle::default());

        assert_eq!(rec.len(), p.segment_count());
        for seg in rec.segments() {
            assert!((seg.length() - 2.0).abs() < 1.0e-6);
            assert_eq!((seg.start + seg.end) * 0.5, p.position);
        }
        assert_all_within(&rec, p.position, Vec3::splat(1.0));
    }

    #[test]
    fn test_point_axis_order() {
        let mut rec = SegmentRecorder::new();
        Point::new(Vec3::ZERO).draw(&mut rec, &LineStyle::default());
        let s = rec.segments();
        assert_eq!(s[0].start, Vec3::Y * 0.5);
        assert_eq!(s[1].start, Vec3::X * 0.5);
        assert_eq!(s[2].start, Vec3::Z * 0.5);
        assert_eq!(s[2].end, -Vec3::Z * 0.5);
    }
}
