//! Debug line drawing of simple shapes.
//!
//! Every shape decomposes into a fixed sequence of straight segments that are
//! handed to a [`LineSink`], the host's immediate-mode line primitive. The
//! crate also ships a thread-safe accumulator usable as that primitive.
//!
//! # Architecture
//!
//! - [`LineSink`] - The line primitive (`draw_line`, `draw_ray`); closures implement it
//! - [`DrawShapes`] - Shape drawing methods available on every sink
//! - [`shapes`] - Shape descriptors implementing [`DebugShape`]
//! - [`LineStyle`] - Color, duration and depth-test flag shared by a draw call
//! - [`DebugDrawer`] - Thread-safe accumulator (store as a shared resource)
//! - [`DebugDrawerContext`] - Short-lived drawing context (created per-system)
//!
//! # Usage
//!
//! ```ignore
//! // Setup (once)
//! let drawer = Arc::new(DebugDrawer::new());
//!
//! // Each frame:
//! drawer.advance_tick(delta_seconds);
//!
//! // In any system (can run in parallel):
//! let mut ctx = drawer.context();
//! ctx.draw_sphere(Vec3::ZERO, 2.0, &LineStyle::default());
//! ctx.draw_arrow(Vec3::ZERO, Vec3::X, &LineStyle::colored(Color::RED).with_duration(1.0));
//! drop(ctx); // or let it go out of scope
//!
//! // At render time:
//! let render_data = drawer.take_render_data();
//! upload(render_data.depth_tested_bytes(), render_data.overlay_bytes());
//! ```

mod config;
mod draw_api;
mod drawer;
pub mod math;
pub mod shapes;
mod sink;
mod style;
mod transform;
mod vertex;

pub use config::DebugDrawerConfig;
pub use draw_api::DrawShapes;
pub use drawer::{DebugDrawer, DebugDrawerContext};
pub use math::TransformPoint;
pub use shapes::DebugShape;
pub use sink::{LineSink, Segment, SegmentRecorder};
pub use style::{Color, LineStyle};
pub use transform::Transform;
pub use vertex::{DebugVertex, RenderData};
