//! Bulb glow styling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::BulbReading;

/// Warm filament yellow used for lit bulbs.
pub const GLOW_COLOR: (u8, u8, u8) = (253, 224, 71);

/// An RGBA colour with a fractional alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    fn glow(alpha: f64) -> Self {
        let (r, g, b) = GLOW_COLOR;
        Self { r, g, b, a: alpha }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Halo drawn around a lit bulb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub blur_px: f64,
    pub spread_px: f64,
    pub color: Rgba,
}

/// Visual parameters of a lit bulb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub fill: Rgba,
    pub glow: Glow,
}

impl StyleDescriptor {
    /// Render as CSS declarations for a bulb element.
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; box-shadow: 0 0 {}px {}px {};",
            self.fill, self.glow.blur_px, self.glow.spread_px, self.glow.color
        )
    }
}

/// Map a brightness in `[0, 1]` to fill opacity and glow size.
///
/// Out-of-range input is clamped; `NaN` is treated as dark.
pub fn brightness_to_visual_style(brightness: f64) -> StyleDescriptor {
    let b = if brightness.is_nan() {
        0.0
    } else {
        brightness.clamp(0.0, 1.0)
    };

    StyleDescriptor {
        fill: Rgba::glow(b * 0.5 + 0.1),
        glow: Glow {
            blur_px: b * 20.0,
            spread_px: b * 5.0,
            color: Rgba::glow(b * 0.7),
        },
    }
}

/// Style for a bulb, or `None` when it should be drawn dark.
pub fn bulb_style(reading: &BulbReading) -> Option<StyleDescriptor> {
    (reading.lit && !reading.broken).then(|| brightness_to_visual_style(reading.brightness))
}
