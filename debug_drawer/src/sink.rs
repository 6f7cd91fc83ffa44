use glam::Vec3;

use crate::style::LineStyle;

/// The host's immediate-mode line primitive.
///
/// Every shape in this crate decomposes into calls to
/// [`draw_line`](Self::draw_line). Implement it to forward segments to an
/// engine's own debug renderer, or use [`DebugDrawerContext`](crate::DebugDrawerContext)
/// which accumulates them for [`DebugDrawer`](crate::DebugDrawer).
///
/// Any `FnMut(Vec3, Vec3, &LineStyle)` closure is a sink:
///
/// ```ignore
/// let mut sink = |start: Vec3, end: Vec3, style: &LineStyle| engine.debug_line(start, end, style.color);
/// sink.draw_sphere(Vec3::ZERO, 1.0, &LineStyle::default());
/// ```
pub trait LineSink {
    /// Draw a segment from `start` to `end`.
    fn draw_line(&mut self, start: Vec3, end: Vec3, style: &LineStyle);

    /// Draw a segment from `origin` to `origin + direction`.
    fn draw_ray(&mut self, origin: Vec3, direction: Vec3, style: &LineStyle) {
        self.draw_line(origin, origin + direction, style);
    }
}

impl<F> LineSink for F
where
    F: FnMut(Vec3, Vec3, &LineStyle),
{
    #[inline]
    fn draw_line(&mut self, start: Vec3, end: Vec3, style: &LineStyle) {
        self(start, end, style)
    }
}

/// One emitted segment, as seen by a [`SegmentRecorder`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    pub style: LineStyle,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A sink that records every segment in emission order.
///
/// Useful for tests and for hosts that want the raw segment list.
#[derive(Clone, Debug, Default)]
pub struct SegmentRecorder {
    segments: Vec<Segment>,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over every endpoint (start then end of each segment).
    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.segments.iter().flat_map(|s| [s.start, s.end])
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl LineSink for SegmentRecorder {
    fn draw_line(&mut self, start: Vec3, end: Vec3, style: &LineStyle) {
        self.segments.push(Segment {
            start,
            end,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_recorder_keeps_order() {
        let mut rec = SegmentRecorder::new();
        let style = LineStyle::default();
        rec.draw_line(Vec3::ZERO, Vec3::X, &style);
        rec.draw_line(Vec3::X, Vec3::Y, &style);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.segments()[0].end, Vec3::X);
        assert_eq!(rec.segments()[1].end, Vec3::Y);
    }

    #[test]
    fn test_ray_endpoint() {
        let mut rec = SegmentRecorder::new();
        rec.draw_ray(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, -2.0),
            &LineStyle::colored(Color::RED),
        );
        let seg = rec.segments()[0];
        assert_eq!(seg.start, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(seg.end, Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(seg.style.color, Color::RED);
        assert_eq!(seg.length(), 2.0);
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_: Vec3, _: Vec3, _: &LineStyle| count += 1;
        sink.draw_ray(Vec3::ZERO, Vec3::Z, &LineStyle::default());
        sink.draw_line(Vec3::ZERO, Vec3::Z, &LineStyle::default());
        assert_eq!(count, 2);
    }
}
