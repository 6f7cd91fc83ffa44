use glam::Vec3;

use super::{BOX_CORNER_SIGNS, BOX_EDGE_COUNT, DebugShape, draw_box_edges};
use crate::math::TransformPoint;
use crate::sink::LineSink;
use crate::style::LineStyle;

/// Axis-aligned bounding box stored as center and half-extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self { center, extents }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }
}

impl DebugShape for Aabb {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let corners = BOX_CORNER_SIGNS.map(|s| self.center + Vec3::from(s) * self.extents);
        draw_box_edges(sink, &corners, style);
    }

    fn segment_count(&self) -> usize {
        BOX_EDGE_COUNT
    }
}

/// World-space box given by its center and full size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub size: Vec3,
}

impl Cuboid {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }
}

impl DebugShape for Cuboid {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        Aabb::new(self.center, self.size * 0.5).draw(sink, style);
    }

    fn segment_count(&self) -> usize {
        BOX_EDGE_COUNT
    }
}

/// A box defined in some local space and mapped to world space corner by
/// corner.
///
/// `space` is anything that can transform a point: a [`Transform`](crate::Transform),
/// a [`glam::Mat4`] (projective row ignored) or a [`glam::Affine3A`].
/// Non-uniform or sheared spaces produce the correspondingly distorted box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalCube<T> {
    pub space: T,
    pub size: Vec3,
    /// Center of the cube, in local coordinates.
    pub center: Vec3,
}

impl<T: TransformPoint> LocalCube<T> {
    pub fn new(space: T, size: Vec3) -> Self {
        Self {
            space,
            size,
            center: Vec3::ZERO,
        }
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }
}

impl<T: TransformPoint> DebugShape for LocalCube<T> {
    fn draw<S: LineSink + ?Sized>(&self, sink: &mut S, style: &LineStyle) {
        let half = self.size * 0.5;
        let corners = BOX_CORNER_SIGNS
            .map(|s| self.space.transform_point(self.center + Vec3::from(s) * half));
        draw_box_edges(sink, &corners, style);
    }

    fn segment_count(&self) -> usize {
        BOX_EDGE_COUNT
    }
}
