/// Linear RGBA color with `f32` channels.
///
/// The default color is [`Color::WHITE`], so a defaulted color never
/// produces invisible lines. [`Zeroable::zeroed`](bytemuck::Zeroable::zeroed)
/// is still transparent black.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Opaque color from red, green and blue channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Display attributes shared by every segment of one draw call.
///
/// # Defaults
///
/// | field        | default             |
/// |--------------|---------------------|
/// | `color`      | [`Color::WHITE`]    |
/// | `duration`   | `0.0` (one frame)   |
/// | `depth_test` | `true`              |
///
/// ```ignore
/// let style = LineStyle::new()
///     .with_color(Color::RED)
///     .with_duration(2.0)
///     .with_depth_test(false);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Color of the drawn lines.
    pub color: Color,
    /// How long the lines stay visible, in seconds. `0.0` means a single frame.
    pub duration: f32,
    /// Whether geometry closer to the camera hides the lines.
    pub depth_test: bool,
}

impl LineStyle {
    pub const DEFAULT: Self = Self {
        color: Color::WHITE,
        duration: 0.0,
        depth_test: true,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Default style with the given color.
    pub const fn colored(color: Color) -> Self {
        Self::DEFAULT.with_color(color)
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub const fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub const fn with_depth_test(mut self, depth_test: bool) -> Self {
        self.depth_test = depth_test;
        self
    }

    /// True when the lines should outlive the current frame.
    pub fn is_persistent(&self) -> bool {
        self.duration > 0.0
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
