use crate::font::{font_ascent, FontMetrics};
use crate::layout::{
    measure_spans, normalize_spans, split_paragraphs, trim_trailing_spaces, wrap_paragraph, Line,
    Span,
};
use crate::style::Style;
use crate::target::{DrawTarget, TextOp};
use crate::units::Pt;

/// Run the layout pipeline for a multi-line textbox without emitting
/// anything: normalize, measure, segment into paragraphs, wrap each
/// paragraph to the box width, and trim trailing spaces. Useful on its own
/// to pre-compute how tall a box will be.
pub fn layout_lines<M: FontMetrics + ?Sized>(
    spans: &[Span],
    width: Pt,
    box_style: &Style,
    metrics: &M,
) -> Vec<Line> {
    let normalized = measure_spans(normalize_spans(spans, box_style), metrics);
    let lines = split_paragraphs(normalized)
        .into_iter()
        .flat_map(|paragraph| wrap_paragraph(paragraph, width, metrics))
        .collect();
    trim_trailing_spaces(lines, metrics)
}

/// Lay out styled spans as a wrapping textbox of `width` points starting at
/// `origin`, emitting one positioned text instruction per span per line.
///
/// The first baseline sits one box-font ascent below the origin; every
/// following line advances by its own line height (the tallest span on the
/// line). When `max_height` is given, emission stops at the first line
/// whose accumulated height would cross it; that line is dropped entirely,
/// never partially drawn.
pub fn draw_textbox<T: DrawTarget, M: FontMetrics + ?Sized>(
    target: &mut T,
    metrics: &M,
    spans: &[Span],
    origin: (Pt, Pt),
    width: Pt,
    style: &Style,
    max_height: Option<Pt>,
) {
    let box_style = style.merged_over(&Style::textbox_default());
    let lines = layout_lines(spans, width, &box_style, metrics);

    let font = box_style.font.as_deref().unwrap_or("Times-Roman");
    let font_size = box_style.font_size.unwrap_or(Pt(12.0));
    let baseline = box_style.baseline.unwrap_or_default();

    let mut y = origin.1 + font_ascent(font, font_size, metrics);
    let mut used_height = Pt::ZERO;

    for (index, line) in lines.iter().enumerate() {
        used_height += line.line_height;
        if matches!(max_height, Some(max) if used_height > max) {
            break;
        }
        if index != 0 {
            y += line.line_height;
        }

        let mut x = line.start_x(origin.0, width);
        for span in &line.spans {
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
                    underline: span.style.underline,
                    strike: span.style.strike,
                    baseline,
                });
            }
            x += span.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Align;
    use crate::target::RecordingTarget;

    struct EmMetrics;
    impl FontMetrics for EmMetrics {
        fn width_of(&self, text: &str, _font: &str, size: Pt) -> Pt {
            size * 0.5 * text.chars().count() as f32
        }
        fn ascent_ratio(&self, _font: &str) -> Option<f32> {
            None
        }
    }

    // Times-Roman ascent at the default 12pt size
    const ASCENT: f32 = 12.0 * 0.683;

    #[test]
    fn a_fitting_span_renders_as_a_single_trimmed_line() {
        let mut target = RecordingTarget::new();
        draw_textbox(
            &mut target,
            &EmMetrics,
            &[Span::new("Hello World. ")],
            (Pt(20.0), Pt(30.0)),
            Pt(100.0),
            &Style::default(),
            None,
        );

        let ops: Vec<_> = target.text_ops().collect();
        assert_eq!(ops.len(), 1);
        // the default style strips the single trailing space
        assert_eq!(ops[0].text, "Hello World.");
        assert_eq!(ops[0].x, Pt(20.0));
        assert!((ops[0].y.0 - (30.0 + ASCENT)).abs() < 1e-3);
        assert_eq!(ops[0].font, "Times-Roman");
    }

    #[test]
    fn paragraph_breaks_consume_height_without_emitting_text() {
        let mut target = RecordingTarget::new();
        draw_textbox(
            &mut target,
            &EmMetrics,
            &[Span::new("a\n\nb")],
            (Pt(0.0), Pt(0.0)),
            Pt(100.0),
            &Style::default(),
            None,
        );

        let ops: Vec<_> = target.text_ops().collect();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].text, "a");
        assert_eq!(ops[1].text, "b");
        // the empty middle line advanced the baseline by one line height
        assert!((ops[1].y.0 - ops[0].y.0 - 24.0).abs() < 1e-3);
    }

    #[test]
    fn lines_crossing_max_height_are_dropped_entirely() {
        let mut target = RecordingTarget::new();
        // three lines of 12pt each, but only 30pt of room: the third line
        // would accumulate to 36pt and is dropped
        draw_textbox(
            &mut target,
            &EmMetrics,
            &[Span::new("one\ntwo\nthree")],
            (Pt(0.0), Pt(0.0)),
            Pt(100.0),
            &Style::default(),
            Some(Pt(30.0)),
        );

        let texts: Vec<&str> = target.text_ops().map(|op| op.text.as_str()).collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn aligned_lines_start_where_the_leftover_width_says() {
        let style = Style {
            align: Some(Align::Right),
            ..Style::default()
        };
        let mut target = RecordingTarget::new();
        draw_textbox(
            &mut target,
            &EmMetrics,
            &[Span::new("abcd")],
            (Pt(10.0), Pt(0.0)),
            Pt(100.0),
            &style,
            None,
        );

        let ops: Vec<_> = target.text_ops().collect();
        // 4 chars at 6pt each leave 76pt of slack on a 100pt box
        assert_eq!(ops[0].x, Pt(86.0));
    }

    #[test]
    fn spans_on_one_line_advance_the_pen_by_their_width() {
        let mut target = RecordingTarget::new();
        let big = Style {
            font_size: Some(Pt(24.0)),
            ..Style::default()
        };
        draw_textbox(
            &mut target,
            &EmMetrics,
            &[Span::new("ab "), Span::styled("cd", big)],
            (Pt(0.0), Pt(0.0)),
            Pt(200.0),
            &Style::default(),
            None,
        );

        let ops: Vec<_> = target.text_ops().collect();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1].x, Pt(18.0));
        assert_eq!(ops[1].font_size, Pt(24.0));
        // both spans share the first baseline
        assert_eq!(ops[0].y, ops[1].y);
    }

    #[test]
    fn empty_input_emits_nothing() {
        let mut target = RecordingTarget::new();
        draw_textbox(
            &mut target,
            &EmMetrics,
            &[],
            (Pt(0.0), Pt(0.0)),
            Pt(100.0),
            &Style::default(),
            None,
        );
        assert!(target.ops.is_empty());
    }
}
