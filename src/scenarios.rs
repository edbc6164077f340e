//! Canned payloads covering the edge cases the chart has to survive:
//! overlapping labels, merged targets, out-of-band last close, extreme
//! ranges. Useful for demos and as shared fixtures in tests.

use indexmap::IndexMap;

use crate::core::PriceTargetSet;

/// Scenario registry in presentation order.
#[must_use]
pub fn demo_scenarios() -> IndexMap<&'static str, PriceTargetSet> {
    let mut scenarios = IndexMap::new();
    scenarios.insert(
        "normal",
        PriceTargetSet::new(150.0, 175.0, 200.0, 180.0, "TEST", "Normal Case"),
    );
    scenarios.insert(
        "overlapping",
        PriceTargetSet::new(99.5, 100.0, 100.5, 95.0, "OVER", "Overlapping Values"),
    );
    scenarios.insert(
        "all_same",
        PriceTargetSet::new(150.0, 150.0, 150.0, 145.0, "SAME", "All Targets Same"),
    );
    scenarios.insert(
        "last_close_below",
        PriceTargetSet::new(150.0, 175.0, 200.0, 120.0, "BELOW", "Last Close Below Range"),
    );
    scenarios.insert(
        "last_close_above",
        PriceTargetSet::new(150.0, 175.0, 200.0, 220.0, "ABOVE", "Last Close Above Range"),
    );
    scenarios.insert(
        "close_values",
        PriceTargetSet::new(99.8, 100.1, 100.2, 100.05, "CLOSE", "Very Close Values"),
    );
    scenarios.insert(
        "large_range",
        PriceTargetSet::new(10.0, 505.0, 1000.0, 750.0, "LARGE", "Large Price Range"),
    );
    scenarios
}
