use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Layout and typography controls for the price-target surface.
///
/// Defaults reproduce the reference layout: a 10px axis band at y=50 in a
/// 100px-tall chart, 4px markers with a white outline, price labels 25px
/// off the axis with kind labels 16px further out, and a 65px collision
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Y position of the horizontal axis line.
    pub axis_y_px: f64,
    /// Horizontal inset keeping edge labels inside the chart.
    pub label_padding_x_px: f64,
    pub marker_radius_px: f64,
    pub marker_outline_width_px: f64,
    pub axis_stroke_width_px: f64,
    pub connector_stroke_width_px: f64,
    pub connector_dash_on_px: f64,
    pub connector_dash_off_px: f64,
    /// Distance from the axis to the price value label.
    pub price_label_offset_y_px: f64,
    /// Distance from the price value label to the kind label.
    pub kind_label_offset_y_px: f64,
    pub price_font_size_px: f64,
    pub kind_font_size_px: f64,
    pub price_font_weight: u16,
    pub kind_font_weight: u16,
    /// Two labels closer than this flip to opposite bands.
    pub collision_threshold_px: f64,
    pub show_footer: bool,
    /// Footer baseline distance from the bottom edge.
    pub footer_offset_y_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_y_px: 50.0,
            label_padding_x_px: 60.0,
            marker_radius_px: 4.0,
            marker_outline_width_px: 2.0,
            axis_stroke_width_px: 10.0,
            connector_stroke_width_px: 1.0,
            connector_dash_on_px: 2.0,
            connector_dash_off_px: 2.0,
            price_label_offset_y_px: 25.0,
            kind_label_offset_y_px: 16.0,
            price_font_size_px: 14.0,
            kind_font_size_px: 12.0,
            price_font_weight: 600,
            kind_font_weight: 400,
            collision_threshold_px: 65.0,
            show_footer: true,
            footer_offset_y_px: 4.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<()> {
        for (field, value) in [
            ("axis_y_px", self.axis_y_px),
            ("label_padding_x_px", self.label_padding_x_px),
            ("marker_outline_width_px", self.marker_outline_width_px),
            ("price_label_offset_y_px", self.price_label_offset_y_px),
            ("kind_label_offset_y_px", self.kind_label_offset_y_px),
            ("collision_threshold_px", self.collision_threshold_px),
            ("footer_offset_y_px", self.footer_offset_y_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{field}` must be finite and >= 0"
                )));
            }
        }
        for (field, value) in [
            ("marker_radius_px", self.marker_radius_px),
            ("axis_stroke_width_px", self.axis_stroke_width_px),
            ("connector_stroke_width_px", self.connector_stroke_width_px),
            ("connector_dash_on_px", self.connector_dash_on_px),
            ("connector_dash_off_px", self.connector_dash_off_px),
            ("price_font_size_px", self.price_font_size_px),
            ("kind_font_size_px", self.kind_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{field}` must be finite and > 0"
                )));
            }
        }
        if self.price_font_weight == 0 || self.kind_font_weight == 0 {
            return Err(ChartError::InvalidData(
                "style font weights must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
