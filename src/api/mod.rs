mod frame_builder;
mod style;

pub use frame_builder::{build_render_frame, resolved_points};
pub use style::ChartStyle;

use serde::Serialize;

use crate::core::{AxisDomain, ChartPoint, PointSet, PriceTargetSet, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartPalette, RenderFrame, Renderer};

/// Configuration for one price-target chart surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTargetChartConfig {
    pub viewport: Viewport,
    pub style: ChartStyle,
    pub palette: ChartPalette,
}

impl PriceTargetChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: ChartStyle::default(),
            palette: ChartPalette::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }
}

/// Stateless facade over the render pipeline for one viewport.
///
/// Every call recomputes from its inputs; two calls with the same payload
/// produce identical frames.
pub struct PriceTargetChart {
    viewport: Viewport,
    style: ChartStyle,
    palette: ChartPalette,
}

impl PriceTargetChart {
    pub fn new(config: PriceTargetChartConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        config.style.validate()?;
        config.palette.validate()?;

        Ok(Self {
            viewport: config.viewport,
            style: config.style,
            palette: config.palette,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    #[must_use]
    pub fn palette(&self) -> ChartPalette {
        self.palette
    }

    /// Computes the padded axis domain for a payload.
    pub fn domain(&self, targets: &PriceTargetSet) -> ChartResult<AxisDomain> {
        targets.validate()?;
        Ok(AxisDomain::from_targets(targets))
    }

    /// Builds resolved, banded points without materializing primitives.
    pub fn points(&self, targets: &PriceTargetSet) -> ChartResult<PointSet> {
        resolved_points(targets, self.viewport, self.style)
    }

    /// Materializes the full draw pass.
    pub fn frame(&self, targets: &PriceTargetSet) -> ChartResult<RenderFrame> {
        build_render_frame(targets, self.viewport, self.style, self.palette)
    }

    /// Builds the frame and hands it to a backend.
    pub fn render_with<R: Renderer>(
        &self,
        renderer: &mut R,
        targets: &PriceTargetSet,
    ) -> ChartResult<()> {
        let frame = self.frame(targets)?;
        renderer.render(&frame)
    }

    /// JSON snapshot of the resolved domain and points, for differential
    /// testing and capture review.
    pub fn snapshot_json_pretty(&self, targets: &PriceTargetSet) -> ChartResult<String> {
        let snapshot = Snapshot {
            symbol: &targets.symbol,
            name: &targets.name,
            domain: AxisDomain::from_targets(targets),
            points: self.points(targets)?.into_vec(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    symbol: &'a str,
    name: &'a str,
    domain: AxisDomain,
    points: Vec<ChartPoint>,
}
