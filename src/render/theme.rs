use serde::{Deserialize, Serialize};

use crate::core::ColorToken;
use crate::error::ChartResult;
use crate::render::Color;

/// Concrete colors for the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub price_target: Color,
    pub last_close: Color,
    pub axis_line: Color,
    pub value_text: Color,
    pub label_text: Color,
    pub marker_outline: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            price_target: Color::from_rgb8(0x34, 0x78, 0xF6),
            last_close: Color::from_rgb8(0x55, 0x55, 0x55),
            axis_line: Color::from_rgb8(0xE8, 0xE8, 0xE8),
            value_text: Color::from_rgb8(0x00, 0x00, 0x00),
            label_text: Color::from_rgb8(0xA8, 0xA8, 0xA8),
            marker_outline: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        }
    }
}

impl ChartPalette {
    /// Maps a semantic point token to its draw color.
    #[must_use]
    pub fn resolve(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PriceTarget => self.price_target,
            ColorToken::LastClose => self.last_close,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.price_target,
            self.last_close,
            self.axis_line,
            self.value_text,
            self.label_text,
            self.marker_outline,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
