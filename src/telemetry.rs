//! Telemetry helpers for applications embedding `pricetarget-rs`.
//!
//! Tracing setup stays explicit and opt-in. Consumers can either call one
//! of the init helpers or wire their own `tracing` subscriber and filters.

/// Initializes a default `tracing` subscriber at `info` level when the
/// `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds. Returns `false` when no
/// initialization is performed (feature disabled) or if a global subscriber
/// was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}

/// Like [`init_default_tracing`] but with an explicit fallback filter used
/// when `RUST_LOG` is not set.
#[must_use]
pub fn init_tracing_with_default(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
