use pricetarget_rs::core::{
    ChartPoint, ColorToken, LabelBand, PointKind, resolve_label_collisions,
};

fn point_at(x: f64) -> ChartPoint {
    ChartPoint {
        kind: PointKind::Low,
        value: x,
        x,
        color: ColorToken::PriceTarget,
        band: LabelBand::Upper,
    }
}

fn levels(points: &[f64], threshold: f64) -> Vec<u8> {
    let input: Vec<ChartPoint> = points.iter().copied().map(point_at).collect();
    resolve_label_collisions(&input, threshold)
        .iter()
        .map(|p| p.band.level())
        .collect()
}

#[test]
fn well_separated_points_stay_in_the_upper_band() {
    assert_eq!(levels(&[50.0, 150.0, 250.0], 60.0), vec![0, 0, 0]);
}

#[test]
fn close_pair_alternates_then_resets() {
    // 50-80 collide, 80-110 collide and flip back, 110-200 are clear.
    assert_eq!(levels(&[50.0, 80.0, 110.0, 200.0], 40.0), vec![0, 1, 0, 0]);
}

#[test]
fn chained_collisions_alternate_throughout() {
    assert_eq!(levels(&[50.0, 70.0, 90.0, 110.0], 30.0), vec![0, 1, 0, 1]);
}

#[test]
fn unsorted_input_is_resolved_in_x_order() {
    let input: Vec<ChartPoint> = [110.0, 50.0, 200.0, 80.0]
        .iter()
        .copied()
        .map(point_at)
        .collect();

    let resolved = resolve_label_collisions(&input, 40.0);

    let xs: Vec<f64> = resolved.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![50.0, 80.0, 110.0, 200.0]);
    let bands: Vec<u8> = resolved.iter().map(|p| p.band.level()).collect();
    assert_eq!(bands, vec![0, 1, 0, 0]);
}

#[test]
fn only_bands_change() {
    let input: Vec<ChartPoint> = [50.0, 80.0].iter().copied().map(point_at).collect();
    let resolved = resolve_label_collisions(&input, 40.0);

    for (before, after) in input.iter().zip(resolved.iter()) {
        assert_eq!(before.kind, after.kind);
        assert_eq!(before.value, after.value);
        assert_eq!(before.x, after.x);
        assert_eq!(before.color, after.color);
    }
}

#[test]
fn exact_threshold_distance_does_not_collide() {
    // Strict less-than: a gap equal to the threshold leaves both labels up.
    assert_eq!(levels(&[50.0, 90.0], 40.0), vec![0, 0]);
}

#[test]
fn coincident_points_share_x_but_not_band() {
    assert_eq!(levels(&[100.0, 100.0], 40.0), vec![0, 1]);
}

#[test]
fn three_way_pileup_leaves_one_unresolved_pair() {
    // Two bands cannot separate three mutually close labels. The first and
    // third end up sharing the upper band; only adjacent pairs are clean.
    let resolved_levels = levels(&[50.0, 60.0, 70.0], 30.0);
    assert_eq!(resolved_levels, vec![0, 1, 0]);
}

#[test]
fn empty_and_single_point_inputs_pass_through() {
    assert_eq!(levels(&[], 40.0), Vec::<u8>::new());
    assert_eq!(levels(&[123.0], 40.0), vec![0]);
}

#[test]
fn resolution_is_idempotent() {
    let input: Vec<ChartPoint> = [50.0, 80.0, 110.0, 200.0]
        .iter()
        .copied()
        .map(point_at)
        .collect();

    let once = resolve_label_collisions(&input, 40.0);
    let twice = resolve_label_collisions(&once, 40.0);

    assert_eq!(once, twice);
}
