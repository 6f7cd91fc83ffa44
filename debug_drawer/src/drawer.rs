use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;
use parking_lot::Mutex;
use wiregizmo_macro::reflect_methods;

use crate::config::DebugDrawerConfig;
use crate::sink::LineSink;
use crate::style::LineStyle;
use crate::vertex::{DebugVertex, RenderData};

/// Accumulated vertex data for a single frame.
struct FrameData {
    depth_tested: Vec<DebugVertex>,
    overlay: Vec<DebugVertex>,
    /// Set once the vertex budget warning was logged for this tick.
    over_budget: bool,
}

impl FrameData {
    fn new(capacity: usize) -> Self {
        Self {
            depth_tested: Vec::with_capacity(capacity),
            overlay: Vec::with_capacity(capacity),
            over_budget: false,
        }
    }

    fn len(&self) -> usize {
        self.depth_tested.len() + self.overlay.len()
    }

    fn clear(&mut self) {
        self.depth_tested.clear();
        self.overlay.clear();
        self.over_budget = false;
    }

    fn push_line(&mut self, vertices: [DebugVertex; 2], depth_test: bool) {
        if depth_test {
            self.depth_tested.extend_from_slice(&vertices);
        } else {
            self.overlay.extend_from_slice(&vertices);
        }
    }
}

/// A line that stays visible for longer than one frame.
#[derive(Clone, Copy)]
struct TimedLine {
    vertices: [DebugVertex; 2],
    depth_test: bool,
    /// Seconds left before the line expires.
    remaining: f32,
}

/// State guarded by the drawer's mutex.
struct Frames {
    frames: [FrameData; 2],
    persistent: Vec<TimedLine>,
    /// Set once the persistent budget warning was logged for this tick.
    persistent_full: bool,
}

/// Thread-safe debug drawing accumulator.
///
/// Uses double-buffered [`FrameData`]:
/// - `frames[current_tick % 2]` is being written to by [`DebugDrawerContext`]s
/// - `frames[(current_tick + 1) % 2]` holds previous tick data, ready for rendering
///
/// Lines drawn with a positive [`LineStyle::duration`] are kept in a separate
/// list and copied into every finished frame until their duration runs out.
///
/// Call [`advance_tick`](Self::advance_tick) once per frame before creating any contexts.
/// The renderer reads the previous tick's data via [`take_render_data`](Self::take_render_data).
pub struct DebugDrawer {
    current_tick: AtomicU64,
    config: DebugDrawerConfig,
    frames: Mutex<Frames>,
}

#[reflect_methods]
impl DebugDrawer {
    /// Create a new debug drawer starting at tick 0.
    pub fn new() -> Self {
        Self::with_config(DebugDrawerConfig::default())
    }

    pub fn with_config(config: DebugDrawerConfig) -> Self {
        log::debug!("Creating DebugDrawer with {:?}", config);
        Self {
            current_tick: AtomicU64::new(0),
            config,
            frames: Mutex::new(Frames {
                frames: [
                    FrameData::new(config.initial_capacity),
                    FrameData::new(config.initial_capacity),
                ],
                persistent: Vec::new(),
                persistent_full: false,
            }),
        }
    }

    pub fn config(&self) -> &DebugDrawerConfig {
        &self.config
    }

    /// Get the current tick.
    pub fn current_tick(&self) -> u64 {
        self.current_tick.load(Ordering::Acquire)
    }

    /// Number of lines with a remaining duration.
    pub fn persistent_line_count(&self) -> usize {
        self.frames.lock().persistent.len()
    }

    /// Advance to the next tick.
    ///
    /// Copies live persistent lines into the finished frame, ages them by
    /// `delta_seconds` and drops the expired ones, then clears the new write
    /// buffer. Call this once per frame at the start, before creating any
    /// contexts.
    pub fn advance_tick(&self, delta_seconds: f32) {
        let old_tick = self.current_tick.load(Ordering::Acquire);
        let new_tick = old_tick + 1;
        let finished_index = (old_tick % 2) as usize;
        let write_index = (new_tick % 2) as usize;
        {
            let mut guard = self.frames.lock();
            let Frames {
                frames,
                persistent,
                persistent_full,
            } = &mut *guard;

            let finished = &mut frames[finished_index];
            let max_vertices = self.config.max_vertices_per_frame;
            let mut skipped = 0;
            for line in persistent.iter_mut() {
                if finished.len() + line.vertices.len() <= max_vertices {
                    finished.push_line(line.vertices, line.depth_test);
                } else {
                    skipped += 1;
                }
                line.remaining -= delta_seconds;
            }
            if skipped > 0 && !finished.over_budget {
                log::warn!(
                    "Debug draw budget of {} vertices exceeded on tick {}; {} persistent lines not shown",
                    max_vertices,
                    old_tick,
                    skipped
                );
                finished.over_budget = true;
            }
            let before = persistent.len();
            persistent.retain(|line| line.remaining > 0.0);
            if persistent.len() != before {
                log::trace!("Expired {} persistent debug lines", before - persistent.len());
            }
            *persistent_full = false;

            frames[write_index].clear();
        }
        self.current_tick.store(new_tick, Ordering::Release);
    }

    /// Create a drawing context for the current tick.
    ///
    /// The context collects vertices locally and flushes them to the
    /// drawer on [`Drop`]. This minimizes lock contention: the mutex
    /// is only held briefly during the flush.
    pub fn context(&self) -> DebugDrawerContext<'_> {
        let tick = self.current_tick.load(Ordering::Acquire);
        DebugDrawerContext {
            drawer: self,
            tick,
            batch: Batch::default(),
        }
    }

    /// Take the previous tick's render data.
    ///
    /// Returns the accumulated vertices from tick N-1 (while tick N is being
    /// collected). The internal storage is left empty.
    pub fn take_render_data(&self) -> RenderData {
        let tick = self.current_tick.load(Ordering::Acquire);
        let render_index = ((tick + 1) % 2) as usize;
        let mut guard = self.frames.lock();
        let frame = &mut guard.frames[render_index];
        RenderData {
            depth_tested: std::mem::take(&mut frame.depth_tested),
            overlay: std::mem::take(&mut frame.overlay),
        }
    }
}

impl DebugDrawer {
    /// Append a finished context's batch.
    fn flush(&self, tick: u64, mut batch: Batch) {
        if batch.is_empty() {
            return;
        }
        let current = self.current_tick.load(Ordering::Acquire);
        if tick != current {
            log::warn!(
                "DebugDrawerContext flushed for tick {} but current is {}; discarding",
                tick,
                current
            );
            return;
        }

        let write_index = (tick % 2) as usize;
        let mut guard = self.frames.lock();
        let Frames {
            frames,
            persistent,
            persistent_full,
        } = &mut *guard;

        let frame = &mut frames[write_index];
        let incoming = batch.depth_tested.len() + batch.overlay.len();
        if frame.len() + incoming > self.config.max_vertices_per_frame {
            if !frame.over_budget {
                log::warn!(
                    "Debug draw budget of {} vertices exceeded on tick {}; dropping lines",
                    self.config.max_vertices_per_frame,
                    tick
                );
                frame.over_budget = true;
            }
        } else {
            frame.depth_tested.append(&mut batch.depth_tested);
            frame.overlay.append(&mut batch.overlay);
        }

        let room = self
            .config
            .max_persistent_lines
            .saturating_sub(persistent.len());
        if batch.persistent.len() > room {
            if !*persistent_full {
                log::warn!(
                    "Persistent debug line budget of {} exceeded; dropping {} lines",
                    self.config.max_persistent_lines,
                    batch.persistent.len() - room
                );
                *persistent_full = true;
            }
            batch.persistent.truncate(room);
        }
        persistent.append(&mut batch.persistent);
    }
}

impl Default for DebugDrawer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines collected by one context before they are flushed.
#[derive(Default)]
struct Batch {
    depth_tested: Vec<DebugVertex>,
    overlay: Vec<DebugVertex>,
    persistent: Vec<TimedLine>,
}

impl Batch {
    fn is_empty(&self) -> bool {
        self.depth_tested.is_empty() && self.overlay.is_empty() && self.persistent.is_empty()
    }
}

/// A short-lived drawing context.
///
/// Collects debug draw vertices locally. On [`Drop`], flushes them
/// to the parent [`DebugDrawer`] under a brief lock.
///
/// Obtain via [`DebugDrawer::context()`]. Draw shapes through
/// [`DrawShapes`](crate::DrawShapes), which every [`LineSink`] gets.
pub struct DebugDrawerContext<'a> {
    drawer: &'a DebugDrawer,
    tick: u64,
    batch: Batch,
}

impl DebugDrawerContext<'_> {
    /// Tick this context will flush into.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Vertices collected so far and not yet flushed.
    pub fn pending_vertices(&self) -> usize {
        self.batch.depth_tested.len() + self.batch.overlay.len() + self.batch.persistent.len() * 2
    }
}

impl LineSink for DebugDrawerContext<'_> {
    fn draw_line(&mut self, start: Vec3, end: Vec3, style: &LineStyle) {
        let color = style.color.to_array();
        let vertices = [
            DebugVertex {
                position: start.to_array(),
                color,
            },
            DebugVertex {
                position: end.to_array(),
                color,
            },
        ];

        if style.is_persistent() {
            self.batch.persistent.push(TimedLine {
                vertices,
                depth_test: style.depth_test,
                remaining: style.duration,
            });
        } else if style.depth_test {
            self.batch.depth_tested.extend_from_slice(&vertices);
        } else {
            self.batch.overlay.extend_from_slice(&vertices);
        }
    }
}

impl Drop for DebugDrawerContext<'_> {
    fn drop(&mut self) {
        let batch = std::mem::take(&mut self.batch);
        self.drawer.flush(self.tick, batch);
    }
}
