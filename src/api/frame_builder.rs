use tracing::debug;

use crate::api::style::ChartStyle;
use crate::core::{
    AxisDomain, LabelBand, LinearScale, PointKind, PointSet, PriceTargetSet, Viewport,
    build_chart_points, resolve_label_collisions,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartPalette, CirclePrimitive, LinePrimitive, LineStrokeStyle, RenderFrame, TextHAlign,
    TextPrimitive,
};

/// Runs the numeric pipeline — domain, scale, point construction, label
/// collision — and returns the resolved, banded point set in x order.
pub fn resolved_points(
    targets: &PriceTargetSet,
    viewport: Viewport,
    style: ChartStyle,
) -> ChartResult<PointSet> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    style.validate()?;
    targets.validate()?;

    let width = viewport.width_px();
    if width - 2.0 * style.label_padding_x_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "label padding leaves no horizontal room for the axis".to_owned(),
        ));
    }

    let domain = AxisDomain::from_targets(targets);
    let scale = LinearScale::from_domain(
        domain,
        style.label_padding_x_px,
        width - style.label_padding_x_px,
    )?;
    let raw_points = build_chart_points(targets, &scale)?;
    let points = resolve_label_collisions(&raw_points, style.collision_threshold_px);

    debug!(
        symbol = %targets.symbol,
        scale_min = domain.scale_min,
        scale_max = domain.scale_max,
        point_count = points.len(),
        "resolved price-target points"
    );

    Ok(points)
}

/// Materializes the full draw pass for one payload: axis band, dashed
/// connectors for the mean and last-close markers, marker dots, price and
/// kind labels, and the analyst-range footer.
pub fn build_render_frame(
    targets: &PriceTargetSet,
    viewport: Viewport,
    style: ChartStyle,
    palette: ChartPalette,
) -> ChartResult<RenderFrame> {
    palette.validate()?;
    let points = resolved_points(targets, viewport, style)?;

    let width = viewport.width_px();
    let axis_y = style.axis_y_px;
    let mut frame = RenderFrame::new(viewport).with_line(LinePrimitive::new(
        0.0,
        axis_y,
        width,
        axis_y,
        style.axis_stroke_width_px,
        palette.axis_line,
    ));

    for point in &points {
        let direction = match point.band {
            LabelBand::Upper => -1.0,
            LabelBand::Lower => 1.0,
        };
        let price_y = axis_y + style.price_label_offset_y_px * direction;
        let kind_y = price_y + style.kind_label_offset_y_px * direction;
        let color = palette.resolve(point.color);

        // Mean and last close sit inside the low..high run, so they get a
        // dashed drop line tying the label back to the marker.
        if matches!(point.kind, PointKind::Average | PointKind::LastClose) {
            let connector_start_y = axis_y + (style.marker_radius_px + 1.0) * direction;
            let connector_end_y = price_y - if direction > 0.0 { 3.0 } else { -3.0 };
            frame = frame.with_line(
                LinePrimitive::new(
                    point.x,
                    connector_start_y,
                    point.x,
                    connector_end_y,
                    style.connector_stroke_width_px,
                    color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed {
                    on: style.connector_dash_on_px,
                    off: style.connector_dash_off_px,
                }),
            );
        }

        frame = frame
            .with_circle(
                CirclePrimitive::new(point.x, axis_y, style.marker_radius_px, color)
                    .with_outline(style.marker_outline_width_px, palette.marker_outline),
            )
            .with_text(
                TextPrimitive::new(
                    format!("{:.2}", point.value),
                    point.x,
                    price_y,
                    style.price_font_size_px,
                    palette.value_text,
                    TextHAlign::Center,
                )
                .with_weight(style.price_font_weight),
            )
            .with_text(
                TextPrimitive::new(
                    point.kind.label(),
                    point.x,
                    kind_y,
                    style.kind_font_size_px,
                    palette.label_text,
                    TextHAlign::Center,
                )
                .with_weight(style.kind_font_weight),
            );
    }

    if style.show_footer {
        frame = frame.with_text(
            TextPrimitive::new(
                format!(
                    "Analyst Range: ${:.2} - ${:.2}",
                    targets.low, targets.high
                ),
                width / 2.0,
                viewport.height_px() - style.footer_offset_y_px,
                style.kind_font_size_px,
                palette.label_text,
                TextHAlign::Center,
            )
            .with_weight(style.kind_font_weight),
        );
    }

    Ok(frame)
}
