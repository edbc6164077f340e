use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Analyst price-target payload for one symbol, matching the wire shape of
/// the price-target endpoint (`last_close` stays snake_case on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTargetSet {
    pub low: f64,
    pub mean: f64,
    pub high: f64,
    pub last_close: f64,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl PriceTargetSet {
    #[must_use]
    pub fn new(
        low: f64,
        mean: f64,
        high: f64,
        last_close: f64,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            low,
            mean,
            high,
            last_close,
            symbol: symbol.into(),
            name: name.into(),
            logo_url: None,
        }
    }

    #[must_use]
    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    /// Builds a payload from decimal-sourced prices, as delivered by feeds
    /// that quote in fixed-point.
    pub fn from_decimals(
        low: Decimal,
        mean: Decimal,
        high: Decimal,
        last_close: Decimal,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            decimal_to_f64(low, "low")?,
            decimal_to_f64(mean, "mean")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(last_close, "last_close")?,
            symbol,
            name,
        ))
    }

    /// The four prices in payload order: low, mean, high, last close.
    #[must_use]
    pub fn prices(&self) -> [f64; 4] {
        [self.low, self.mean, self.high, self.last_close]
    }

    /// No ordering is assumed between the four prices; the only contract is
    /// that all of them are finite.
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("low", self.low),
            ("mean", self.mean),
            ("high", self.high),
            ("last_close", self.last_close),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "price `{field}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
