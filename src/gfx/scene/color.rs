//! RGBA colors used by scene objects, the renderer and the UI theme.

use std::fmt;

/// An 8-bit-per-channel RGBA color.
///
/// The named constants follow raylib's palette so that colors picked in the
/// editor match the ones available to generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(230, 41, 55, 255);
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const RAYWHITE: Rgba = Rgba::new(245, 245, 245, 255);
    pub const LIGHTGRAY: Rgba = Rgba::new(200, 200, 200, 255);
    pub const DARKGRAY: Rgba = Rgba::new(80, 80, 80, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Normalized `[r, g, b, a]` in the 0.0..=1.0 range, as GPU vertices and
    /// ImGui style colors expect.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Same as [`Rgba::to_f32_array`] but widened for `wgpu::Color`.
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_f32_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_channels() {
        assert_eq!(Rgba::BLACK.to_f32_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Rgba::WHITE.to_f32_array(), [1.0, 1.0, 1.0, 1.0]);

        let half = Rgba::new(0, 0, 0, 51).to_f32_array();
        assert!((half[3] - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::RED.to_string(), "rgba(230, 41, 55, 255)");
    }
}
