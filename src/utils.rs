//! Small helpers shared by the class table and feature styling.

/// An RGBA colour; channels are 0-255, alpha is 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0.0 };
    pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 1.0 };
}

/// Parse a hex color string (e.g., "#ff0000") into its RGB channels
pub fn parse_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    } else {
        None
    }
}

/// Parse a hex color and attach an alpha value.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<Rgba> {
    let (r, g, b) = parse_color(hex)?;
    Some(Rgba { r, g, b, a: alpha })
}
