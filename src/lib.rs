//! pricetarget-rs: analyst price-target chart engine.
//!
//! The crate turns one low/mean/high/last-close payload into a positioned,
//! collision-resolved marker row plus backend-agnostic draw primitives.
//! Axis math, point construction and label-band assignment live in `core`;
//! `render` materializes frames for a backend; `api` wires the pipeline
//! together; `client` talks to the price-target endpoint.

pub mod api;
pub mod client;
pub mod core;
pub mod error;
pub mod render;
pub mod scenarios;
pub mod telemetry;

pub use api::{ChartStyle, PriceTargetChart, PriceTargetChartConfig};
pub use error::{ChartError, ChartResult};
