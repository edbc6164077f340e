use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{ApiError, ApiResult, DEFAULT_FETCH_ERROR, FetchedTarget, normalize_symbol};
use crate::core::PriceTargetSet;

/// Connection settings for the price-target endpoint.
#[derive(Debug, Clone)]
pub struct PriceTargetClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl PriceTargetClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for `GET {base_url}/assessment/price-target`.
pub struct PriceTargetClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

/// Body shape servers use for non-2xx responses; `message` is optional.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

impl PriceTargetClient {
    pub fn new(config: PriceTargetClientConfig) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the price target for one symbol.
    ///
    /// The symbol is normalized first, so empty input never reaches the
    /// wire. A 404 maps to `SymbolNotFound`; other non-2xx statuses carry
    /// the server message when one is present.
    pub fn fetch_price_target(&self, symbol: &str) -> ApiResult<FetchedTarget> {
        let symbol = normalize_symbol(symbol)?;
        let url = format!("{}/assessment/price-target", self.base_url);
        debug!(%symbol, %url, "fetching price target");

        let response = self
            .http
            .get(&url)
            .query(&[("symbol", symbol.as_str())])
            .send()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            warn!(%symbol, "symbol not found");
            return Err(ApiError::SymbolNotFound { symbol });
        }
        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_owned());
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data: PriceTargetSet = response
            .json()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        debug!(symbol = %data.symbol, name = %data.name, "price target received");
        Ok(FetchedTarget::new(data))
    }
}
