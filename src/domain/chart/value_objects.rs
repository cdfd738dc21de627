use crate::domain::feed::Window;
use serde::{Deserialize, Serialize};

/// Value Object - drawable area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self { width: 800.0, height: 400.0 }
    }
}

/// Maps a sample onto the drawing surface.
///
/// Owned by whoever paints; the engine only asks for positions.
pub trait CoordinateMapper {
    fn x_for(&self, index: usize, label: &str) -> f64;
    fn y_for(&self, value: f64) -> f64;
}

/// Value Object - Viewport over a category X axis and a linear Y axis
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub point_count: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        let size = SurfaceSize::default();
        Self { point_count: 0, min_value: 0.0, max_value: 100.0, width: size.width, height: size.height }
    }
}

impl Viewport {
    pub fn new(surface: SurfaceSize, (min_value, max_value): (f64, f64), point_count: usize) -> Self {
        Self { point_count, min_value, max_value, width: surface.width, height: surface.height }
    }

    /// Viewport fitted to the window with the padded axis domain.
    pub fn fit(window: &Window, surface: SurfaceSize) -> Self {
        Self::new(surface, axis_domain(window), window.len())
    }

    pub fn value_range(&self) -> f64 {
        self.max_value - self.min_value
    }

    /// Category axis: points sit at the center of equal-width slots.
    pub fn index_to_x(&self, index: usize) -> f64 {
        if self.point_count == 0 {
            return self.width / 2.0;
        }
        let slot = self.width / self.point_count as f64;
        slot * (index as f64 + 0.5)
    }

    pub fn value_to_y(&self, value: f64) -> f64 {
        if self.value_range() == 0.0 {
            return self.height / 2.0;
        }
        let normalized = (value - self.min_value) / self.value_range();
        self.height * (1.0 - normalized) // Invert Y
    }
}

impl CoordinateMapper for Viewport {
    fn x_for(&self, index: usize, _label: &str) -> f64 {
        self.index_to_x(index)
    }

    fn y_for(&self, value: f64) -> f64 {
        self.value_to_y(value)
    }
}

/// Y-axis domain: window min/max padded by 5% of the range, ±1 when flat.
pub fn axis_domain(window: &Window) -> (f64, f64) {
    match window.value_range() {
        Some((lo, hi)) if hi > lo => {
            let padding = (hi - lo) * 0.05;
            (lo - padding, hi + padding)
        }
        Some((lo, hi)) => (lo - 1.0, hi + 1.0),
        None => (0.0, 100.0),
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand.
    pub fn parse(css: &str) -> Option<Self> {
        let digits = css.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16).ok().map(Self::from_hex)
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
}
