use crate::error::ChartResult;
use crate::render::{LineStrokeStyle, RenderFrame, Renderer, TextHAlign, TextPrimitive};

/// Renderer that materializes frames as standalone SVG documents.
///
/// Output is deterministic for a given frame: primitives are emitted in
/// frame order as lines, then circles, then texts.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The SVG produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut doc = String::new();
        doc.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n"
        ));

        for line in &frame.lines {
            let mut attrs = format!(
                "x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_hex_rgb(),
                line.stroke_width
            );
            if let LineStrokeStyle::Dashed { on, off } = line.stroke_style {
                attrs.push_str(&format!(" stroke-dasharray=\"{on} {off}\""));
            }
            if line.color.alpha < 1.0 {
                attrs.push_str(&format!(" stroke-opacity=\"{}\"", line.color.alpha));
            }
            doc.push_str(&format!("  <line {attrs}/>\n"));
        }

        for circle in &frame.circles {
            let mut attrs = format!(
                "cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
                circle.cx,
                circle.cy,
                circle.radius,
                circle.fill.to_hex_rgb()
            );
            if circle.outline_width > 0.0 {
                attrs.push_str(&format!(
                    " stroke=\"{}\" stroke-width=\"{}\"",
                    circle.outline_color.to_hex_rgb(),
                    circle.outline_width
                ));
            }
            doc.push_str(&format!("  <circle {attrs}/>\n"));
        }

        for text in &frame.texts {
            doc.push_str(&render_text(text));
        }

        doc.push_str("</svg>\n");
        self.document = doc;
        Ok(())
    }
}

fn render_text(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{}\" font-weight=\"{}\" \
         fill=\"{}\">{}</text>\n",
        text.x,
        text.y,
        anchor,
        text.font_size_px,
        text.font_weight,
        text.color.to_hex_rgb(),
        escape_text(&text.text)
    )
}

fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
