// File: crates/timeline-core/src/theme.rs
// Summary: Series palette and color parsing shared by the svg and raster outputs.

/// Fixed series palette. Label `i` takes `PALETTE[i % PALETTE.len()]`.
pub const PALETTE: [&str; 9] = [
    "#F8C471", "#F39C12", "#B9770E", // ambers
    "#73C6B6", "#16A085", "#117A65", // greens
    "#B2BABB", "#7F8C8D", "#616A6B", // greys
];

/// Colors for `count` series, cycling through `palette`.
pub fn series_colors(palette: &[String], count: usize) -> Vec<String> {
    if palette.is_empty() {
        return vec![PALETTE[0].to_string(); count];
    }
    (0..count).map(|i| palette[i % palette.len()].clone()).collect()
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or one of the few named colors the renderer emits.
    /// `currentColor` resolves to black. Returns `None` for `none` and unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            return match hex.len() {
                3 => Some(Self::opaque(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
                6 => {
                    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                    Some(Self::opaque(byte(0)?, byte(2)?, byte(4)?))
                }
                _ => None,
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "black" | "currentcolor" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            _ => None,
        }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}
