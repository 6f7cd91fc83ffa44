//! Draws debug shapes into a `DebugDrawer` and reports what a renderer would
//! receive each frame.
//!
//! ```bash
//! # Vertex counts for 10 frames of every shape
//! gizmo_dump --frames 10
//!
//! # Raw segments of a single cone, drawn on top of scene geometry
//! gizmo_dump --shape cone --segments --no-depth-test
//!
//! # Lines that linger for half a second at 60 fps
//! gizmo_dump --shape arrow --frames 40 --delta 0.016 --duration 0.5
//!
//! # Reflected methods of the drawer
//! gizmo_dump --list-methods --verbose
//! gizmo_dump --type-methods DebugDrawer
//! ```

use clap::Parser;
use wiregizmo_demos::{ShapeKind, draw_scene};
use wiregizmo_draw::{DebugDrawer, DebugDrawerConfig, LineStyle, SegmentRecorder};
use wiregizmo_reflect::{TypeRegistry, methods_of_object};

/// Debug shape segment dump.
#[derive(Parser, Debug)]
#[command(name = "gizmo_dump", version, about = "Dump debug shape line segments")]
struct Args {
    /// Shapes to draw.
    #[arg(long, default_value = "all", value_enum)]
    shape: ShapeKind,

    /// Number of frames to simulate.
    #[arg(long, default_value = "1")]
    frames: u64,

    /// Seconds per simulated frame.
    #[arg(long, default_value = "0.016")]
    delta: f32,

    /// How long drawn lines stay visible, in seconds (0 = one frame).
    #[arg(long, default_value = "0")]
    duration: f32,

    /// Draw lines on top of scene geometry.
    #[arg(long)]
    no_depth_test: bool,

    /// Draw only on the first frame, so lines with a duration can be seen expiring.
    #[arg(long)]
    once: bool,

    /// Print every segment of one scene instead of simulating frames.
    #[arg(long)]
    segments: bool,

    /// Print the reflected methods of the debug drawer and exit.
    #[arg(long)]
    list_methods: bool,

    /// Print the reflected methods of a registered type by name and exit.
    #[arg(long, value_name = "TYPE")]
    type_methods: Option<String>,

    /// Include full signatures when listing methods.
    #[arg(long)]
    verbose: bool,

    /// Per-frame vertex budget of the drawer.
    #[arg(long, default_value = "1048576")]
    max_vertices: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);
    log::info!("gizmo_dump {}", wiregizmo_demos::VERSION);

    let drawer = DebugDrawer::with_config(
        DebugDrawerConfig::new().with_max_vertices_per_frame(args.max_vertices),
    );

    if args.list_methods {
        print!("{}", methods_of_object(&drawer, args.verbose));
        return Ok(());
    }

    if let Some(name) = &args.type_methods {
        let mut registry = TypeRegistry::new();
        registry.register::<DebugDrawer>()?;
        print!("{}", registry.methods_of_type_name(name, args.verbose)?);
        return Ok(());
    }

    let style = LineStyle::new()
        .with_duration(args.duration)
        .with_depth_test(!args.no_depth_test);

    if args.segments {
        let mut recorder = SegmentRecorder::new();
        draw_scene(&mut recorder, args.shape, &style);
        for seg in recorder.segments() {
            println!(
                "{:>10.4} {:>10.4} {:>10.4}  ->  {:>10.4} {:>10.4} {:>10.4}",
                seg.start.x, seg.start.y, seg.start.z, seg.end.x, seg.end.y, seg.end.z
            );
        }
        log::info!("{} segments", recorder.len());
        return Ok(());
    }

    for frame in 0..args.frames {
        drawer.advance_tick(args.delta);
        if !args.once || frame == 0 {
            let mut ctx = drawer.context();
            draw_scene(&mut ctx, args.shape, &style);
        }

        // The renderer sees the previous tick's lines.
        let data = drawer.take_render_data();
        log::info!(
            "frame {:>4}: {:>6} depth-tested, {:>6} overlay vertices, {} persistent lines",
            frame,
            data.depth_tested.len(),
            data.overlay.len(),
            drawer.persistent_line_count()
        );
    }

    Ok(())
}
