use glam::Vec3;

use crate::math::TransformPoint;
use crate::shapes::{
    Aabb, Arrow, Capsule, Circle, Cone, Cuboid, Cylinder, DebugShape, LocalCube, Point, Sphere,
};
use crate::sink::LineSink;
use crate::style::LineStyle;

/// Shape drawing on top of any [`LineSink`].
///
/// Implemented for every sink, so a closure, a [`SegmentRecorder`](crate::SegmentRecorder)
/// or a [`DebugDrawerContext`](crate::DebugDrawerContext) can all draw shapes.
/// Every method forwards to the matching [`DebugShape`]; pass
/// `&LineStyle::default()` for white, single-frame, depth-tested lines.
pub trait DrawShapes: LineSink {
    /// Draw any [`DebugShape`].
    fn draw_shape<T: DebugShape>(&mut self, shape: &T, style: &LineStyle) {
        shape.draw(self, style);
    }

    /// Draw a cross marker of size `scale` at `position`.
    fn draw_point(&mut self, position: Vec3, scale: f32, style: &LineStyle) {
        Point::new(position).with_scale(scale).draw(self, style);
    }

    /// Draw an axis-aligned bounding box (12 edges).
    fn draw_bounds(&mut self, bounds: &Aabb, style: &LineStyle) {
        bounds.draw(self, style);
    }

    /// Draw a world-space box from its center and full size (12 edges).
    fn draw_box(&mut self, center: Vec3, size: Vec3, style: &LineStyle) {
        Cuboid::new(center, size).draw(self, style);
    }

    /// Draw a box whose `center` and `size` are expressed in `space`.
    fn draw_local_cube<T: TransformPoint>(
        &mut self,
        space: T,
        size: Vec3,
        center: Vec3,
        style: &LineStyle,
    ) {
        LocalCube::new(space, size)
            .with_center(center)
            .draw(self, style);
    }

    /// Draw a circle in the plane perpendicular to `normal`.
    fn draw_circle(&mut self, center: Vec3, normal: Vec3, radius: f32, style: &LineStyle) {
        Circle::new(center)
            .with_normal(normal)
            .with_radius(radius)
            .draw(self, style);
    }

    /// Draw a wireframe sphere using 3 great circles (YZ, XZ, XY planes).
    fn draw_sphere(&mut self, center: Vec3, radius: f32, style: &LineStyle) {
        Sphere::new(center).with_radius(radius).draw(self, style);
    }

    fn draw_cylinder(&mut self, start: Vec3, end: Vec3, radius: f32, style: &LineStyle) {
        Cylinder::new(start, end).with_radius(radius).draw(self, style);
    }

    /// Draw a cone with its tip at `tip`, opening along `direction` with
    /// half-angle `angle` in degrees.
    fn draw_cone(&mut self, tip: Vec3, direction: Vec3, angle: f32, style: &LineStyle) {
        Cone::new(tip)
            .with_direction(direction)
            .with_angle(angle)
            .draw(self, style);
    }

    fn draw_arrow(&mut self, origin: Vec3, direction: Vec3, style: &LineStyle) {
        Arrow::new(origin, direction).draw(self, style);
    }

    fn draw_capsule(&mut self, start: Vec3, end: Vec3, radius: f32, style: &LineStyle) {
        Capsule::new(start, end).with_radius(radius).draw(self, style);
    }
}

impl<S: LineSink + ?Sized> DrawShapes for S {}
