use serde::{Deserialize, Serialize};

use crate::core::types::PriceTargetSet;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for price-target axis autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    /// Padding applied on each side as a fraction of the realized price range.
    pub range_ratio: f64,
    /// Absolute padding used instead when all four prices are identical,
    /// since proportional padding on a zero range collapses to zero.
    pub flat_absolute: f64,
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self {
            range_ratio: 0.15,
            flat_absolute: 10.0,
        }
    }
}

impl DomainPadding {
    fn validate(self) -> ChartResult<Self> {
        if !self.range_ratio.is_finite() || self.range_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "domain padding ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.flat_absolute.is_finite() || self.flat_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "domain flat padding must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Numeric axis range bracketing all four prices with nonzero margin on
/// both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub scale_min: f64,
    pub scale_max: f64,
}

impl AxisDomain {
    /// Computes the axis domain with default padding.
    ///
    /// Total over finite prices: the realized min/max cover all four values,
    /// so a last close far outside the analyst band widens the domain and is
    /// padded around like any other extreme. Non-finite prices are out of
    /// contract here; use [`AxisDomain::from_targets_tuned`] to reject them.
    #[must_use]
    pub fn from_targets(targets: &PriceTargetSet) -> Self {
        Self::compute(targets.prices(), DomainPadding::default())
    }

    /// Validating variant with explicit padding tuning.
    pub fn from_targets_tuned(
        targets: &PriceTargetSet,
        padding: DomainPadding,
    ) -> ChartResult<Self> {
        let padding = padding.validate()?;
        targets.validate()?;
        Ok(Self::compute(targets.prices(), padding))
    }

    fn compute(prices: [f64; 4], padding: DomainPadding) -> Self {
        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for value in prices {
            min_price = min_price.min(value);
            max_price = max_price.max(value);
        }

        let range = max_price - min_price;
        let pad = if range > 0.0 {
            range * padding.range_ratio
        } else {
            padding.flat_absolute
        };

        Self {
            scale_min: min_price - pad,
            scale_max: max_price + pad,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.scale_max - self.scale_min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.scale_min && value <= self.scale_max
    }
}
