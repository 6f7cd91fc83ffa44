//! Small vector helpers the shape decompositions are built from.

use glam::{Affine3A, Mat4, Quat, Vec3};

/// Below this sine two directions are treated as parallel.
const PARALLEL_EPSILON: f32 = 1.0e-5;

/// Spherical interpolation between two vectors, treating them as directions
/// with magnitudes.
///
/// The direction rotates from `a` toward `b` at constant angular speed while
/// the length is interpolated linearly. `t` is clamped to `[0, 1]`.
///
/// When `a` and `b` point in opposite directions the rotation plane is
/// ambiguous; an arbitrary axis orthogonal to `a` is picked. This makes
/// `slerp(v, -v, 0.5)` a cheap way to get a vector perpendicular to `v` with
/// the same length.
pub fn slerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let len_a = a.length();
    let len_b = b.length();
    if len_a <= f32::EPSILON || len_b <= f32::EPSILON {
        return a.lerp(b, t);
    }

    let dir_a = a / len_a;
    let dir_b = b / len_b;
    let length = len_a + (len_b - len_a) * t;

    let cos = dir_a.dot(dir_b);
    let cross = dir_a.cross(dir_b);
    let sin = cross.length();

    let (axis, angle) = if sin >= PARALLEL_EPSILON {
        (cross / sin, sin.atan2(cos))
    } else if cos > 0.0 {
        return dir_a.lerp(dir_b, t).normalize() * length;
    } else {
        (dir_a.any_orthonormal_vector(), std::f32::consts::PI)
    };

    Quat::from_axis_angle(axis, angle * t) * dir_a * length
}

/// A vector perpendicular to `v` with the same length.
#[inline]
pub fn perpendicular(v: Vec3) -> Vec3 {
    slerp(v, -v, 0.5)
}

/// Orthogonal frame used to lay out circles and cylinder cross sections.
///
/// All three axes have length `radius`; `up` is along the requested normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl CircleBasis {
    /// Build the frame around `normal`. A zero `normal` yields NaN axes.
    pub fn new(normal: Vec3, radius: f32) -> Self {
        let up = normal.normalize() * radius;
        let forward = perpendicular(up);
        let right = up.cross(forward).normalize() * radius;
        Self { right, up, forward }
    }

    /// Point on the circle at `angle` radians, relative to the center.
    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        self.right * cos + self.forward * sin
    }
}

/// An infinite plane `normal · p + distance = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    /// Plane with the given normal passing through `point`.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Signed distance from `point` to the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Distance along the normalized `direction` from `origin` to the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane or points away from it.
    pub fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let direction = direction.normalize();
        let denom = direction.dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let enter = -self.signed_distance(origin) / denom;
        (enter >= 0.0).then_some(enter)
    }
}

/// Maps a point from some local space into world space.
pub trait TransformPoint {
    fn transform_point(&self, local: Vec3) -> Vec3;
}

impl TransformPoint for Mat4 {
    /// Affine multiply; the projective row is ignored.
    #[inline]
    fn transform_point(&self, local: Vec3) -> Vec3 {
        self.transform_point3(local)
    }
}

impl TransformPoint for Affine3A {
    #[inline]
    fn transform_point(&self, local: Vec3) -> Vec3 {
        self.transform_point3(local)
    }
}

impl<T: TransformPoint + ?Sized> TransformPoint for &T {
    #[inline]
    fn transform_point(&self, local: Vec3) -> Vec3 {
        (**self).transform_point(local)
    }
}
