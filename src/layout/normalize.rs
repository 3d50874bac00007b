use crate::font::FontMetrics;
use crate::style::{SpanStyle, Style};
use crate::units::Pt;

/// A styled piece of input text. Callers hand the layout entry points a
/// slice of these; a span's unset style fields inherit from the box style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub text: String,
    /// Start a new paragraph before this span
    pub new_line: bool,
    pub style: Style,
}

impl Span {
    pub fn new<S: Into<String>>(text: S) -> Span {
        Span {
            text: text.into(),
            ..Span::default()
        }
    }

    pub fn styled<S: Into<String>>(text: S, style: Style) -> Span {
        Span {
            text: text.into(),
            new_line: false,
            style,
        }
    }

    pub fn on_new_line(mut self) -> Span {
        self.new_line = true;
        self
    }
}

/// A normalized span: style fully resolved, no embedded line breaks, and a
/// measured advance width once [measure_spans] has run
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub new_line: bool,
    pub width: Pt,
    pub style: SpanStyle,
}

impl StyledSpan {
    /// A copy of this span carrying different text and width, used when
    /// wrapping splits a span across lines
    pub(crate) fn with_text(&self, text: String, width: Pt) -> StyledSpan {
        StyledSpan {
            text,
            new_line: self.new_line,
            width,
            style: self.style.clone(),
        }
    }
}

/// Fill every span with inherited/default style values and split spans
/// containing embedded line breaks. `box_style` is expected to already be
/// merged over [Style::textbox_default]. After this, no span contains `\n`
/// and every style field is concrete, with line height in absolute units.
pub fn normalize_spans(spans: &[Span], box_style: &Style) -> Vec<StyledSpan> {
    spans
        .iter()
        .flat_map(|span| {
            let style = SpanStyle::resolve(&span.style, box_style);
            split_line_breaks(span, style)
        })
        .collect()
}

/// Split a span at every `\n`. The first piece keeps the span's own
/// `new_line` flag; every seam-created piece is forced onto a new line.
fn split_line_breaks(span: &Span, style: SpanStyle) -> Vec<StyledSpan> {
    if !span.text.contains('\n') {
        return vec![StyledSpan {
            text: span.text.clone(),
            new_line: span.new_line,
            width: Pt::ZERO,
            style,
        }];
    }

    span.text
        .split('\n')
        .enumerate()
        .map(|(i, piece)| StyledSpan {
            text: piece.to_string(),
            new_line: if i == 0 { span.new_line } else { true },
            width: Pt::ZERO,
            style: style.clone(),
        })
        .collect()
}

/// Annotate every span with its measured advance width
pub fn measure_spans<M: FontMetrics + ?Sized>(
    spans: Vec<StyledSpan>,
    metrics: &M,
) -> Vec<StyledSpan> {
    spans
        .into_iter()
        .map(|mut span| {
            span.width = metrics.width_of(&span.text, &span.style.font, span.style.font_size);
            span
        })
        .collect()
}

/// Group normalized spans into paragraphs. A span flagged `new_line` closes
/// the accumulating paragraph and always opens the next one; consecutive
/// flags produce one paragraph per flag, so empty spans between two breaks
/// survive as empty-width lines rather than collapsing.
pub fn split_paragraphs(spans: Vec<StyledSpan>) -> Vec<Vec<StyledSpan>> {
    let mut paragraphs: Vec<Vec<StyledSpan>> = Vec::new();
    let mut current: Vec<StyledSpan> = Vec::new();

    for span in spans {
        if span.new_line && !current.is_empty() {
            paragraphs.push(std::mem::take(&mut current));
        }
        current.push(span);
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Pt;

    struct EmMetrics;
    impl FontMetrics for EmMetrics {
        fn width_of(&self, text: &str, _font: &str, size: Pt) -> Pt {
            size * 0.5 * text.chars().count() as f32
        }
        fn ascent_ratio(&self, _font: &str) -> Option<f32> {
            None
        }
    }

    fn boxed() -> Style {
        Style::default().merged_over(&Style::textbox_default())
    }

    #[test]
    fn plain_spans_pass_through() {
        let spans = normalize_spans(&[Span::new("Hello World. ")], &boxed());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Hello World. ");
        assert!(!spans[0].new_line);
        assert_eq!(spans[0].style.font, "Times-Roman");
        assert_eq!(spans[0].style.line_height, Pt(12.0));
    }

    #[test]
    fn double_break_preserves_the_empty_line() {
        let spans = normalize_spans(
            &[Span::new("dolore magna. \n\nAt vero eos")],
            &boxed(),
        );
        let flags: Vec<(&str, bool)> = spans
            .iter()
            .map(|s| (s.text.as_str(), s.new_line))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("dolore magna. ", false),
                ("", true),
                ("At vero eos", true),
            ]
        );
    }

    #[test]
    fn seam_flags_do_not_leak_onto_the_first_piece() {
        let spans = normalize_spans(&[Span::new("a\nb").on_new_line()], &boxed());
        assert!(spans[0].new_line);
        assert!(spans[1].new_line);

        let spans = normalize_spans(&[Span::new("a\nb")], &boxed());
        assert!(!spans[0].new_line);
        assert!(spans[1].new_line);
    }

    #[test]
    fn trailing_break_produces_a_trailing_empty_span() {
        let spans = normalize_spans(&[Span::new("a\n")], &boxed());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].text, "");
        assert!(spans[1].new_line);
    }

    #[test]
    fn measurement_sets_widths() {
        let spans = measure_spans(normalize_spans(&[Span::new("abcd")], &boxed()), &EmMetrics);
        assert_eq!(spans[0].width, Pt(24.0));

        let empty = measure_spans(normalize_spans(&[Span::new("")], &boxed()), &EmMetrics);
        assert_eq!(empty[0].width, Pt::ZERO);
    }

    #[test]
    fn paragraphs_round_trip() {
        let spans = measure_spans(
            normalize_spans(
                &[
                    Span::new("one "),
                    Span::new("two"),
                    Span::new("three").on_new_line(),
                    Span::new("\nfour"),
                ],
                &boxed(),
            ),
            &EmMetrics,
        );

        let paragraphs = split_paragraphs(spans.clone());
        assert_eq!(paragraphs.len(), 3);

        let rejoined: Vec<StyledSpan> = paragraphs.into_iter().flatten().collect();
        assert_eq!(rejoined, spans);
    }

    #[test]
    fn consecutive_breaks_each_open_a_paragraph() {
        let spans = normalize_spans(&[Span::new("a\n\n\nb")], &boxed());
        let paragraphs = split_paragraphs(spans);
        let texts: Vec<Vec<&str>> = paragraphs
            .iter()
            .map(|p| p.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(texts, vec![vec!["a"], vec![""], vec![""], vec!["b"]]);
    }

    #[test]
    fn empty_input_degrades_to_empty_output() {
        assert!(normalize_spans(&[], &boxed()).is_empty());
        assert!(split_paragraphs(Vec::new()).is_empty());
    }
}
