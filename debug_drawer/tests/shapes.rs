//! Shape decomposition checked against a recording sink.
//!
//! Tests are parameterized using `rstest` to run against every shape.

use glam::{Mat4, Quat, Vec3};
use rstest::rstest;
use wiregizmo_draw::shapes::{
    Aabb, Arrow, Capsule, Circle, Cone, Cuboid, Cylinder, LocalCube, Point, Sphere,
};
use wiregizmo_draw::{
    Color, DebugDrawer, DebugShape, DrawShapes, LineSink, LineStyle, SegmentRecorder, Transform,
};

const EPS: f32 = 1.0e-4;

type DrawFn = Box<dyn Fn(&mut SegmentRecorder, &LineStyle)>;

fn case(
    name: &'static str,
    draw: impl Fn(&mut SegmentRecorder, &LineStyle) + 'static,
) -> (&'static str, DrawFn) {
    (name, Box::new(draw))
}

/// Every shape with non-default parameters.
fn shape_cases() -> Vec<(&'static str, DrawFn)> {
    vec![
        case("ray", |s, st| s.draw_ray(Vec3::ONE, Vec3::Z, st)),
        case("point", |s, st| Point::new(Vec3::ONE).with_scale(2.0).draw(s, st)),
        case("bounds", |s, st| Aabb::new(Vec3::ZERO, Vec3::ONE).draw(s, st)),
        case("box", |s, st| Cuboid::new(Vec3::X, Vec3::splat(2.0)).draw(s, st)),
        case("local_cube", |s, st| {
            LocalCube::new(Mat4::from_rotation_z(0.3), Vec3::ONE)
                .with_center(Vec3::Y)
                .draw(s, st)
        }),
        case("circle", |s, st| Circle::new(Vec3::ZERO).with_normal(Vec3::X).draw(s, st)),
        case("sphere", |s, st| Sphere::new(Vec3::Z).with_radius(2.0).draw(s, st)),
        case("cylinder", |s, st| Cylinder::new(Vec3::ZERO, Vec3::Y * 3.0).draw(s, st)),
        case("cone", |s, st| Cone::new(Vec3::ZERO).with_angle(30.0).draw(s, st)),
        case("arrow", |s, st| Arrow::new(Vec3::ZERO, Vec3::X * 2.0).draw(s, st)),
        case("capsule", |s, st| Capsule::new(Vec3::ZERO, Vec3::Z * 4.0).draw(s, st)),
    ]
}

#[test]
fn default_style_matches_explicit_white() {
    let explicit = LineStyle::new()
        .with_color(Color::WHITE)
        .with_duration(0.0)
        .with_depth_test(true);

    for (name, draw) in shape_cases() {
        let mut by_default = SegmentRecorder::new();
        let mut by_white = SegmentRecorder::new();
        draw(&mut by_default, &LineStyle::default());
        draw(&mut by_white, &explicit);
        assert!(!by_default.is_empty(), "{name} drew nothing");
        assert_eq!(by_default.segments(), by_white.segments(), "{name}");
    }
}

#[test]
fn style_is_carried_by_every_segment() {
    let style = LineStyle::colored(Color::MAGENTA)
        .with_duration(3.0)
        .with_depth_test(false);

    for (name, draw) in shape_cases() {
        let mut rec = SegmentRecorder::new();
        draw(&mut rec, &style);
        assert!(
            rec.segments().iter().all(|s| s.style == style),
            "{name} dropped the style on some segment"
        );
    }
}

#[test]
fn color_does_not_change_geometry() {
    for (name, draw) in shape_cases() {
        let mut white = SegmentRecorder::new();
        let mut red = SegmentRecorder::new();
        draw(&mut white, &LineStyle::default());
        draw(&mut red, &LineStyle::colored(Color::RED));
        let a: Vec<_> = white.points().collect();
        let b: Vec<_> = red.points().collect();
        assert_eq!(a, b, "{name}");
    }
}

#[rstest]
#[case::point(Point::new(Vec3::ZERO).segment_count(), 3)]
#[case::bounds(Aabb::new(Vec3::ZERO, Vec3::ONE).segment_count(), 12)]
#[case::cuboid(Cuboid::new(Vec3::ZERO, Vec3::ONE).segment_count(), 12)]
#[case::circle(Circle::new(Vec3::ZERO).segment_count(), 90)]
#[case::sphere(Sphere::new(Vec3::ZERO).segment_count(), 108)]
#[case::cylinder(Cylinder::new(Vec3::ZERO, Vec3::Y).segment_count(), 278)]
#[case::cone(Cone::new(Vec3::ZERO).segment_count(), 184)]
#[case::arrow(Arrow::new(Vec3::ZERO, Vec3::X).segment_count(), 185)]
#[case::capsule(Capsule::new(Vec3::ZERO, Vec3::Y).segment_count(), 384)]
fn declared_segment_counts(#[case] count: usize, #[case] expected: usize) {
    assert_eq!(count, expected);
}

#[rstest]
#[case::unit(Vec3::ONE, Vec3::ZERO)]
#[case::flat(Vec3::new(4.0, 0.5, 2.0), Vec3::new(1.0, -1.0, 0.0))]
#[case::tall(Vec3::new(0.25, 10.0, 0.25), Vec3::new(-5.0, 5.0, 5.0))]
fn local_cube_stays_within_half_size(#[case] size: Vec3, #[case] center: Vec3) {
    let transform = Transform::new(
        Vec3::new(3.0, -2.0, 7.0),
        Quat::from_euler(glam::EulerRot::YXZ, 0.5, -0.3, 1.1),
        Vec3::ONE,
    );
    let mut rec = SegmentRecorder::new();
    rec.draw_local_cube(transform, size, center, &LineStyle::default());
    assert_eq!(rec.len(), 12);

    let to_local = transform.to_matrix().inverse();
    for p in rec.points() {
        let offset = to_local.transform_point3(p) - center;
        assert!(
            offset.abs().cmple(size * 0.5 + Vec3::splat(EPS)).all(),
            "{offset} outside half size {size}"
        );
    }
}

#[rstest]
#[case::y_up(Vec3::Y, 1.0)]
#[case::x_axis(Vec3::X, 0.5)]
#[case::skewed(Vec3::new(1.0, 2.0, 3.0), 4.0)]
#[case::unnormalized(Vec3::new(0.0, -7.0, 0.0), 2.0)]
fn circle_points_on_radius_in_plane(#[case] normal: Vec3, #[case] radius: f32) {
    let center = Vec3::new(1.0, 2.0, 3.0);
    let circle = Circle::new(center).with_normal(normal).with_radius(radius);
    let n = normal.normalize();
    let points: Vec<Vec3> = circle.points().collect();
    assert_eq!(points.len(), 91);
    for p in points {
        assert!((p.distance(center) - radius).abs() < EPS * radius.max(1.0));
        assert!((p - center).dot(n).abs() < EPS * radius.max(1.0));
    }
}

#[rstest]
#[case::long(8.0, 1.0, 3.0)]
#[case::exact(2.0, 1.0, 0.0)]
#[case::short(1.0, 1.0, 0.0)]
#[case::thin(5.0, 0.1, 2.4)]
#[case::zero(0.0, 1.0, 0.0)]
fn capsule_side_length(#[case] height: f32, #[case] radius: f32, #[case] expected: f32) {
    let start = Vec3::new(2.0, 0.0, 0.0);
    let capsule = Capsule::new(start, start + Vec3::Y * height).with_radius(radius);
    assert!((capsule.side_length() - expected).abs() < EPS);

    let (a, b) = capsule.cap_centers();
    assert!((a.distance(b) - 2.0 * expected).abs() < EPS);
    let middle = start + Vec3::Y * height * 0.5;
    assert!(((a + b) * 0.5).abs_diff_eq(middle, EPS));
}

#[test]
fn closure_sink_sees_same_segments_as_recorder() {
    let mut collected = Vec::new();
    let mut sink = |start: Vec3, end: Vec3, _: &LineStyle| collected.push((start, end));
    sink.draw_arrow(Vec3::ZERO, Vec3::Y, &LineStyle::default());

    let mut rec = SegmentRecorder::new();
    rec.draw_arrow(Vec3::ZERO, Vec3::Y, &LineStyle::default());

    let expected: Vec<_> = rec.segments().iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(collected, expected);
}

#[test]
fn drawer_receives_every_segment() {
    let drawer = DebugDrawer::new();
    {
        let mut ctx = drawer.context();
        ctx.draw_capsule(Vec3::ZERO, Vec3::Y * 4.0, 1.0, &LineStyle::default());
        ctx.draw_cone(
            Vec3::ZERO,
            Vec3::X,
            45.0,
            &LineStyle::default().with_depth_test(false),
        );
    }
    drawer.advance_tick(0.016);
    let data = drawer.take_render_data();
    assert_eq!(data.depth_tested.len(), 384 * 2);
    assert_eq!(data.overlay.len(), 184 * 2);
}

#[test]
fn drawer_contexts_from_threads() {
    let drawer = std::sync::Arc::new(DebugDrawer::new());
    drawer.advance_tick(0.016);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let drawer = drawer.clone();
            std::thread::spawn(move || {
                let mut ctx = drawer.context();
                ctx.draw_sphere(Vec3::X * i as f32, 1.0, &LineStyle::default());
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    drawer.advance_tick(0.016);
    assert_eq!(drawer.take_render_data().line_count(), 4 * 108);
}
