//! Colour helpers shared by the terminal preview and the PDF renderer.
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;

/// RGBA with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Same colour flattened onto a white background (for surfaces without
    /// transparency).
    pub fn over_white(&self) -> (f32, f32, f32) {
        let blend = |c: f32| c * self.a + (1.0 - self.a);
        (blend(self.r), blend(self.g), blend(self.b))
    }

    pub fn to_ansi(&self) -> Colour {
        let (r, g, b) = self.over_white();
        Colour::RGB((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }
}

/// Parses "#RRGGBB" or "#RRGGBBAA".
pub fn parse_hex(s: &str) -> AppResult<Rgba> {
    let hex = s.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(AppError::Config(format!("invalid colour: {s}")));
    }

    let channel = |i: usize| -> AppResult<f32> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| AppError::Config(format!("invalid colour: {s}")))
    };

    Ok(Rgba {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
        a: if hex.len() == 8 { channel(6)? } else { 1.0 },
    })
}
