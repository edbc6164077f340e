//! Network collaborator for the price-target endpoint.
//!
//! The chart core never fetches; this module owns symbol validation, the
//! error surface shown to users, and the supersession guard that keeps a
//! slow stale response from overwriting a newer one.

mod session;

#[cfg(feature = "fetch")]
mod http;

pub use session::{FetchSession, FetchTicket};

#[cfg(feature = "fetch")]
pub use http::{PriceTargetClient, PriceTargetClientConfig};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::PriceTargetSet;

pub type ApiResult<T> = Result<T, ApiError>;

/// Default message used when the server supplies none.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch price target";

/// Errors surfaced by the fetch collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("please enter a stock symbol")]
    EmptySymbol,

    #[error("symbol '{symbol}' not found")]
    SymbolNotFound { symbol: String },

    #[error("{message} (status {status})")]
    Upstream { status: u16, message: String },

    #[error("failed to fetch price target: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP-style status for upstream rendering; transport failures map
    /// to 500.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::EmptySymbol => 400,
            Self::SymbolNotFound { .. } => 404,
            Self::Upstream { status, .. } => *status,
            Self::Transport(_) => 500,
        }
    }
}

/// Trims and uppercases a user-entered symbol, rejecting empty or
/// whitespace-only input before any request is made.
pub fn normalize_symbol(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptySymbol);
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// A fetched payload stamped with its arrival time.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedTarget {
    pub data: PriceTargetSet,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedTarget {
    #[must_use]
    pub fn new(data: PriceTargetSet) -> Self {
        Self {
            data,
            fetched_at: Utc::now(),
        }
    }
}
