use pricetarget_rs::api::{ChartStyle, resolved_points};
use pricetarget_rs::core::{
    AxisDomain, LinearScale, PointKind, PriceTargetSet, Viewport, build_chart_points,
    resolve_label_collisions,
};
use proptest::prelude::*;

// Prices in whole cents keep padding well above one ulp of the extremes,
// so strict-bracketing assertions stay meaningful.
fn price() -> impl Strategy<Value = f64> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

fn targets() -> impl Strategy<Value = PriceTargetSet> {
    (price(), price(), price(), price()).prop_map(|(low, mean, high, last_close)| {
        PriceTargetSet::new(low, mean, high, last_close, "PROP", "Property Case")
    })
}

proptest! {
    #[test]
    fn domain_strictly_brackets_every_price(data in targets()) {
        let domain = AxisDomain::from_targets(&data);

        for value in data.prices() {
            prop_assert!(domain.scale_min < value);
            prop_assert!(domain.scale_max > value);
        }
    }

    #[test]
    fn domain_computation_is_pure(data in targets()) {
        let first = AxisDomain::from_targets(&data);
        let second = AxisDomain::from_targets(&data);

        prop_assert_eq!(first.scale_min.to_bits(), second.scale_min.to_bits());
        prop_assert_eq!(first.scale_max.to_bits(), second.scale_max.to_bits());
    }

    #[test]
    fn point_count_is_two_exactly_when_targets_merge(data in targets()) {
        let domain = AxisDomain::from_targets(&data);
        let scale = LinearScale::from_domain(domain, 60.0, 340.0).expect("scale");
        let points = build_chart_points(&data, &scale).expect("points");

        let merged = data.high == data.low && data.low == data.mean;
        prop_assert_eq!(points.len(), if merged { 2 } else { 4 });
        prop_assert_eq!(
            points.iter().filter(|p| p.kind == PointKind::MergedTargets).count(),
            usize::from(merged)
        );
        prop_assert_eq!(
            points.iter().filter(|p| p.kind == PointKind::LastClose).count(),
            1
        );
    }

    #[test]
    fn collision_keeps_point_identities(data in targets(), threshold in 1.0f64..200.0) {
        let domain = AxisDomain::from_targets(&data);
        let scale = LinearScale::from_domain(domain, 60.0, 340.0).expect("scale");
        let points = build_chart_points(&data, &scale).expect("points");

        let resolved = resolve_label_collisions(&points, threshold);
        prop_assert_eq!(resolved.len(), points.len());

        let mut before: Vec<(&str, u64, u64)> = points
            .iter()
            .map(|p| (p.kind.label(), p.value.to_bits(), p.x.to_bits()))
            .collect();
        let mut after: Vec<(&str, u64, u64)> = resolved
            .iter()
            .map(|p| (p.kind.label(), p.value.to_bits(), p.x.to_bits()))
            .collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn adjacent_points_within_threshold_never_share_a_band(
        data in targets(),
        threshold in 1.0f64..200.0
    ) {
        let domain = AxisDomain::from_targets(&data);
        let scale = LinearScale::from_domain(domain, 60.0, 340.0).expect("scale");
        let points = build_chart_points(&data, &scale).expect("points");

        let resolved = resolve_label_collisions(&points, threshold);
        for pair in resolved.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
            if (pair[1].x - pair[0].x).abs() < threshold {
                prop_assert_ne!(pair[0].band, pair[1].band);
            }
        }
    }

    #[test]
    fn full_pipeline_is_pure(data in targets()) {
        let viewport = Viewport::new(400, 100);
        let style = ChartStyle::default();

        let first = resolved_points(&data, viewport, style).expect("points");
        let second = resolved_points(&data, viewport, style).expect("points");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scale_round_trip_recovers_prices(data in targets()) {
        let domain = AxisDomain::from_targets(&data);
        let scale = LinearScale::from_domain(domain, 60.0, 340.0).expect("scale");

        for value in data.prices() {
            let px = scale.value_to_pixel(value).expect("to pixel");
            let recovered = scale.pixel_to_value(px).expect("from pixel");
            let tolerance = domain.span() * 1e-9;
            prop_assert!((recovered - value).abs() <= tolerance);
        }
    }
}
