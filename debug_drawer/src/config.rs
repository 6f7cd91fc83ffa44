/// Limits and preallocation for a [`DebugDrawer`](crate::DebugDrawer).
///
/// ```ignore
/// let drawer = DebugDrawer::with_config(
///     DebugDrawerConfig::new()
///         .with_max_vertices_per_frame(64 * 1024)
///         .with_max_persistent_lines(1024),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugDrawerConfig {
    /// Upper bound on vertices rendered per tick (both depth lists combined).
    /// Flushes past the budget are dropped with a warning. Persistent lines
    /// count against it too; the ones that do not fit are skipped for that
    /// tick but keep aging.
    ///
    /// Default: 1 << 20
    pub max_vertices_per_frame: usize,
    /// Upper bound on lines with a non-zero duration kept alive at once.
    ///
    /// Default: 16384
    pub max_persistent_lines: usize,
    /// Vertices preallocated in each frame buffer.
    ///
    /// Default: 4096
    pub initial_capacity: usize,
}

impl DebugDrawerConfig {
    pub const fn new() -> Self {
        Self {
            max_vertices_per_frame: 1 << 20,
            max_persistent_lines: 16384,
            initial_capacity: 4096,
        }
    }

    pub const fn with_max_vertices_per_frame(mut self, max: usize) -> Self {
        self.max_vertices_per_frame = max;
        self
    }

    pub const fn with_max_persistent_lines(mut self, max: usize) -> Self {
        self.max_persistent_lines = max;
        self
    }

    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for DebugDrawerConfig {
    fn default() -> Self {
        Self::new()
    }
}
