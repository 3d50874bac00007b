use crate::font::{font_ascent, FontMetrics};
use crate::layout::{measure_spans, normalize_spans, Line, Span, StyledSpan};
use crate::style::{Align, Baseline, Style};
use crate::target::{DrawTarget, TextOp};
use crate::units::Pt;
use std::fmt;

/// Slack subtracted from the box width before declaring overflow, so that
/// accumulated floating-point noise in measured widths doesn't flag a line
/// that fits exactly
const OVERFLOW_EPSILON: f32 = 0.1;

/// What happened to a single-line textbox
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Rendered,
    TooLongRenderedAnyway,
    TooLongNotRendered,
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LineOutcome::Rendered => "rendered",
            LineOutcome::TooLongRenderedAnyway => "text is too long, rendered anyway",
            LineOutcome::TooLongNotRendered => "text is too long, did not render",
        };
        f.write_str(message)
    }
}

/// The geometry a single-line layout call settled on, reported back to the
/// caller whether or not anything was drawn
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStatus {
    /// The box width under justify, the measured line width otherwise
    pub width: Pt,
    /// The box height argument, echoed back
    pub height: Pt,
    /// The left edge the line was (or would have been) placed at
    pub x: Pt,
    /// The baseline position
    pub y: Pt,
    pub outcome: LineOutcome,
}

/// Per-span x origins that spread the spans across `total_width`: the
/// leftover width is divided evenly into the gaps between spans. A single
/// span sits at `start_x`; no spans yield no positions.
pub fn justified_x_positions(widths: &[Pt], start_x: Pt, total_width: Pt) -> Vec<Pt> {
    let count = widths.len();
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start_x];
    }

    let text_width: Pt = widths.iter().copied().sum();
    let gap = (total_width - text_width) / (count as f32 - 1.0);

    let mut positions = Vec::with_capacity(count);
    let mut x = start_x;
    for (index, &width) in widths.iter().enumerate() {
        positions.push(x);
        x += width;
        if index < count - 1 {
            x += gap;
        }
    }
    positions
}

/// Lay styled spans onto exactly one line inside a box, never wrapping.
///
/// Embedded line breaks are normalized away but everything still lands on
/// the single line. Alignment places the line inside the box width; justify
/// spreads the spans across the full width when there is more than one.
/// A line wider than the box (minus a small epsilon) either renders anyway
/// or is skipped according to `render_if_too_long`; either way the returned
/// [LineStatus] describes the intended geometry and names the outcome.
///
/// Underline and strike decorations are emitted as explicit rules here,
/// with the text instructions carrying the flags unset, and the rule width
/// measured on the span text minus trailing whitespace.
pub fn draw_single_line<T: DrawTarget, M: FontMetrics + ?Sized>(
    target: &mut T,
    metrics: &M,
    spans: &[Span],
    origin: (Pt, Pt),
    size: (Pt, Pt),
    style: &Style,
    render_if_too_long: bool,
) -> LineStatus {
    let (width, height) = size;
    let box_style = style.merged_over(&Style::textbox_default());
    let line = Line::from_spans(measure_spans(normalize_spans(spans, &box_style), metrics));

    let font = box_style.font.as_deref().unwrap_or("Times-Roman");
    let font_size = box_style.font_size.unwrap_or(Pt(12.0));
    let baseline = box_style.baseline.unwrap_or_default();
    let y = origin.1 + font_ascent(font, font_size, metrics);

    let justified = line.align == Align::Justify;
    let mut pen = match line.align {
        Align::Center => origin.0 + (width - line.width) / 2.0,
        Align::Right => origin.0 + (width - line.width),
        Align::Left | Align::Justify => origin.0,
    };

    let outcome = if line.width > width - Pt(OVERFLOW_EPSILON) {
        if !render_if_too_long {
            return LineStatus {
                width: if justified { width } else { line.width },
                height,
                x: if justified { pen } else { pen - line.width },
                y,
                outcome: LineOutcome::TooLongNotRendered,
            };
        }
        LineOutcome::TooLongRenderedAnyway
    } else {
        LineOutcome::Rendered
    };

    if justified && line.spans.len() > 1 {
        let widths: Vec<Pt> = line.spans.iter().map(|span| span.width).collect();
        let positions = justified_x_positions(&widths, origin.0, width);
        for (span, &x) in line.spans.iter().zip(positions.iter()) {
            emit_span(target, metrics, span, x, y, baseline);
        }
    } else {
        for span in &line.spans {
            emit_span(target, metrics, span, pen, y, baseline);
            pen += span.width;
        }
    }

    LineStatus {
        width: if justified { width } else { line.width },
        height,
        x: if justified { pen } else { pen - line.width },
        y,
        outcome,
    }
}

fn emit_span<T: DrawTarget, M: FontMetrics + ?Sized>(
    target: &mut T,
    metrics: &M,
    span: &StyledSpan,
    x: Pt,
    y: Pt,
    baseline: Baseline,
) {
    if !span.text.is_empty() {
        target.draw_text(TextOp {
            text: span.text.clone(),
            x,
            y,
            font: span.style.font.clone(),
            font_size: span.style.font_size,
            colour: span.style.colour,
            opacity: span.style.opacity,
            link: span.style.link.clone(),
            oblique: span.style.oblique,
            underline: false,
            strike: false,
            baseline,
        });
    }

    if !span.style.underline && !span.style.strike {
        return;
    }

    let size = span.style.font_size;
    let rule_width = metrics.width_of(span.text.trim_end(), &span.style.font, size);
    let thickness = size * 0.06;

    if span.style.underline {
        let rule_y = y + size * 0.1;
        target.stroke_line((x, rule_y), (x + rule_width, rule_y), thickness, span.style.colour);
    }
    if span.style.strike {
        let rule_y = y - size * 0.3;
        target.stroke_line((x, rule_y), (x + rule_width, rule_y), thickness, span.style.colour);
    }
}
