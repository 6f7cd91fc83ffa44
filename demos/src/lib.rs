//! # wiregizmo demos
//!
//! Demo scenes exercising every debug shape.
//!
//! ## Available Demos
//!
//! - `gizmo_dump` - Draws shapes into a `DebugDrawer` for a number of frames
//!   and reports the vertex counts, or prints raw segments

use glam::{Mat4, Quat, Vec3};
use wiregizmo_draw::shapes::Aabb;
use wiregizmo_draw::{Color, DrawShapes, LineSink, LineStyle, Transform};

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which shapes a demo scene contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShapeKind {
    /// One of every shape, laid out along the X axis.
    #[default]
    All,
    Ray,
    Point,
    Bounds,
    Box,
    LocalCube,
    Circle,
    Sphere,
    Cylinder,
    Cone,
    Arrow,
    Capsule,
}

impl ShapeKind {
    /// Every individual shape, in scene order.
    pub const SHAPES: [ShapeKind; 11] = [
        ShapeKind::Ray,
        ShapeKind::Point,
        ShapeKind::Bounds,
        ShapeKind::Box,
        ShapeKind::LocalCube,
        ShapeKind::Circle,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Arrow,
        ShapeKind::Capsule,
    ];

    /// Color used for this shape in the demo scene.
    pub fn color(self) -> Color {
        match self {
            ShapeKind::All => Color::WHITE,
            ShapeKind::Ray | ShapeKind::Arrow => Color::RED,
            ShapeKind::Point => Color::YELLOW,
            ShapeKind::Bounds | ShapeKind::Box | ShapeKind::LocalCube => Color::GREEN,
            ShapeKind::Circle | ShapeKind::Sphere => Color::CYAN,
            ShapeKind::Cylinder | ShapeKind::Capsule => Color::BLUE,
            ShapeKind::Cone => Color::MAGENTA,
        }
    }
}

/// Spacing between shapes in the `All` scene.
const SLOT_WIDTH: f32 = 3.0;

/// Draw the scene for `kind` into `sink`. `All` lays out every kind in
/// [`ShapeKind::SHAPES`]; any other kind is drawn alone at the origin.
///
/// `style` supplies duration and depth testing; colors come from
/// [`ShapeKind::color`] unless `style` carries a non-white color.
pub fn draw_scene<S: LineSink + ?Sized>(sink: &mut S, kind: ShapeKind, style: &LineStyle) {
    match kind {
        ShapeKind::All => {
            for (slot, shape) in ShapeKind::SHAPES.into_iter().enumerate() {
                draw_shape_at(sink, shape, Vec3::X * slot as f32 * SLOT_WIDTH, style);
            }
        }
        shape => draw_shape_at(sink, shape, Vec3::ZERO, style),
    }
}

/// Draw one individual shape at `origin`. `All` draws nothing here;
/// [`draw_scene`] expands it.
fn draw_shape_at<S: LineSink + ?Sized>(
    sink: &mut S,
    kind: ShapeKind,
    origin: Vec3,
    style: &LineStyle,
) {
    let style = if style.color == Color::WHITE {
        style.with_color(kind.color())
    } else {
        *style
    };
    let style = &style;

    match kind {
        ShapeKind::All => {}
        ShapeKind::Ray => sink.draw_ray(origin, Vec3::new(1.0, 1.0, 0.0), style),
        ShapeKind::Point => sink.draw_point(origin, 0.5, style),
        ShapeKind::Bounds => sink.draw_bounds(
            &Aabb::from_min_max(origin - Vec3::splat(0.5), origin + Vec3::splat(0.5)),
            style,
        ),
        ShapeKind::Box => sink.draw_box(origin, Vec3::new(1.0, 0.5, 1.5), style),
        ShapeKind::LocalCube => {
            let space = Transform::new(
                origin,
                Quat::from_rotation_y(std::f32::consts::FRAC_PI_4),
                Vec3::ONE,
            );
            sink.draw_local_cube(space, Vec3::ONE, Vec3::ZERO, style);
            sink.draw_local_cube(
                Mat4::from_translation(origin + Vec3::Y * 1.5),
                Vec3::splat(0.5),
                Vec3::ZERO,
                style,
            );
        }
        ShapeKind::Circle => sink.draw_circle(origin, Vec3::Z, 1.0, style),
        ShapeKind::Sphere => sink.draw_sphere(origin, 1.0, style),
        ShapeKind::Cylinder => sink.draw_cylinder(origin, origin + Vec3::Y * 2.0, 0.5, style),
        ShapeKind::Cone => sink.draw_cone(origin, Vec3::Y * 1.5, 30.0, style),
        ShapeKind::Arrow => sink.draw_arrow(origin, Vec3::new(0.0, 1.0, 1.0), style),
        ShapeKind::Capsule => sink.draw_capsule(origin, origin + Vec3::Y * 3.0, 0.5, style),
    }
}
