use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scale::LinearScale;
use crate::core::types::PriceTargetSet;
use crate::error::ChartResult;

/// Marker identity on the price-target axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Low,
    Average,
    High,
    LastClose,
    /// Single marker standing in for low, mean and high when all three
    /// targets are exactly equal.
    MergedTargets,
}

impl PointKind {
    /// Display text rendered under the price value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
            Self::LastClose => "Last Close",
            Self::MergedTargets => "Low, High, Avg",
        }
    }
}

/// Semantic color slot, resolved to a concrete color by the render theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorToken {
    PriceTarget,
    LastClose,
}

/// Vertical label band relative to the axis line.
///
/// `Upper` is level 0 (labels above the line), `Lower` is level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelBand {
    #[default]
    Upper,
    Lower,
}

impl LabelBand {
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Upper => 0,
            Self::Lower => 1,
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
        }
    }
}

/// One positioned marker plus its label metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub kind: PointKind,
    pub value: f64,
    pub x: f64,
    pub color: ColorToken,
    pub band: LabelBand,
}

/// A chart never shows more than four markers, so point sets stay inline.
pub type PointSet = SmallVec<[ChartPoint; 4]>;

/// Builds the canonical marker set for one price-target payload.
///
/// Merge uses exact equality on purpose: the upstream feed emits the same
/// float for all three targets when analysts agree, and near-equal values
/// must stay distinct so each keeps its own label. Every point starts in
/// the upper band, including last close; the collision pass reassigns bands.
///
/// Output is insertion-ordered, not x-sorted: low, mean, high, last close
/// in the normal case, merged marker then last close when all targets match.
pub fn build_chart_points(
    targets: &PriceTargetSet,
    scale: &LinearScale,
) -> ChartResult<PointSet> {
    let all_targets_same = targets.high == targets.low && targets.low == targets.mean;

    let mut points = PointSet::new();
    if all_targets_same {
        points.push(ChartPoint {
            kind: PointKind::MergedTargets,
            value: targets.mean,
            x: scale.value_to_pixel(targets.mean)?,
            color: ColorToken::PriceTarget,
            band: LabelBand::Upper,
        });
    } else {
        for (kind, value) in [
            (PointKind::Low, targets.low),
            (PointKind::Average, targets.mean),
            (PointKind::High, targets.high),
        ] {
            points.push(ChartPoint {
                kind,
                value,
                x: scale.value_to_pixel(value)?,
                color: ColorToken::PriceTarget,
                band: LabelBand::Upper,
            });
        }
    }

    points.push(ChartPoint {
        kind: PointKind::LastClose,
        value: targets.last_close,
        x: scale.value_to_pixel(targets.last_close)?,
        color: ColorToken::LastClose,
        band: LabelBand::Upper,
    });

    Ok(points)
}
