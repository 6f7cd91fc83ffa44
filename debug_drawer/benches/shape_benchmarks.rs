use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;

use wiregizmo_draw::shapes::{Arrow, Capsule, Circle, Cylinder, Sphere};
use wiregizmo_draw::{DebugDrawer, DebugShape, DrawShapes, LineStyle, SegmentRecorder};

// ---------------------------------------------------------------------------
// Shape decomposition
// ---------------------------------------------------------------------------

fn bench_shape<T: DebugShape>(c: &mut Criterion, name: &str, shape: T) {
    let style = LineStyle::default();
    let mut rec = SegmentRecorder::new();
    c.bench_function(name, |b| {
        b.iter(|| {
            rec.clear();
            black_box(&shape).draw(&mut rec, black_box(&style));
            black_box(rec.len())
        });
    });
}

fn bench_circle(c: &mut Criterion) {
    bench_shape(c, "circle", Circle::new(Vec3::ZERO).with_normal(Vec3::new(1.0, 2.0, 3.0)));
}

fn bench_sphere(c: &mut Criterion) {
    bench_shape(c, "sphere", Sphere::new(Vec3::ZERO));
}

fn bench_cylinder(c: &mut Criterion) {
    bench_shape(c, "cylinder", Cylinder::new(Vec3::ZERO, Vec3::Y * 2.0));
}

fn bench_arrow(c: &mut Criterion) {
    bench_shape(c, "arrow", Arrow::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)));
}

fn bench_capsule(c: &mut Criterion) {
    bench_shape(c, "capsule", Capsule::new(Vec3::ZERO, Vec3::Y * 4.0));
}

// ---------------------------------------------------------------------------
// Drawer
// ---------------------------------------------------------------------------

fn bench_drawer_frame(c: &mut Criterion) {
    let drawer = DebugDrawer::new();
    let style = LineStyle::default();
    c.bench_function("drawer_frame_100_spheres", |b| {
        b.iter(|| {
            drawer.advance_tick(black_box(0.016));
            {
                let mut ctx = drawer.context();
                for i in 0..100 {
                    ctx.draw_sphere(Vec3::X * i as f32, 1.0, &style);
                }
            }
            black_box(drawer.take_render_data())
        });
    });
}

fn bench_drawer_persistent(c: &mut Criterion) {
    let drawer = DebugDrawer::new();
    {
        let mut ctx = drawer.context();
        for i in 0..40 {
            ctx.draw_capsule(
                Vec3::X * i as f32,
                Vec3::X * i as f32 + Vec3::Y,
                0.25,
                &LineStyle::default().with_duration(f32::MAX),
            );
        }
    }
    c.bench_function("drawer_advance_persistent", |b| {
        b.iter(|| {
            drawer.advance_tick(black_box(0.016));
            black_box(drawer.take_render_data())
        });
    });
}

criterion_group!(
    shape_benches,
    bench_circle,
    bench_sphere,
    bench_cylinder,
    bench_arrow,
    bench_capsule
);
criterion_group!(drawer_benches, bench_drawer_frame, bench_drawer_persistent);
criterion_main!(shape_benches, drawer_benches);
