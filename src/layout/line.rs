use crate::font::FontMetrics;
use crate::layout::normalize::StyledSpan;
use crate::style::Align;
use crate::units::Pt;

/// One wrapped visual row: the spans that fit together, the alignment the
/// row is placed with, its total advance width, and the row height
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub align: Align,
    pub width: Pt,
    pub line_height: Pt,
    pub spans: Vec<StyledSpan>,
}

impl Line {
    /// Reduce a group of spans into a line: alignment from the first span,
    /// width as the sum of span widths, height as the tallest span. Total:
    /// an empty group yields an empty zero-size line.
    pub fn from_spans(spans: Vec<StyledSpan>) -> Line {
        let align = spans
            .first()
            .map(|span| span.style.align)
            .unwrap_or_default();
        let width = spans.iter().map(|span| span.width).sum();
        let line_height = spans
            .iter()
            .map(|span| span.style.line_height)
            .fold(Pt::ZERO, Pt::max);

        Line {
            align,
            width,
            line_height,
            spans,
        }
    }

    /// Where this line starts horizontally inside a box of `width` starting
    /// at `x`. Overflowing lines always start at the left edge; justify is
    /// only meaningful to the single-line layout and behaves as left here.
    pub fn start_x(&self, x: Pt, width: Pt) -> Pt {
        let space_left = width - self.width;
        if space_left < Pt::ZERO {
            return x;
        }

        match self.align {
            Align::Center => x + space_left / 2.0,
            Align::Right => x + space_left,
            Align::Left | Align::Justify => x,
        }
    }
}

/// Strip a single trailing space from the last span of each line, where
/// that span opts in. Fragments keep their separating space when wrapped,
/// which reads fine left-aligned but looks ragged for centred or
/// right-aligned text. Only the last span is ever touched; its width is
/// re-measured and the line width recomputed from the new sum.
pub fn trim_trailing_spaces<M: FontMetrics + ?Sized>(lines: Vec<Line>, metrics: &M) -> Vec<Line> {
    lines
        .into_iter()
        .map(|mut line| {
            let Some(last) = line.spans.last_mut() else {
                return line;
            };
            if !last.style.trim_trailing_space || !last.text.ends_with(' ') {
                return line;
            }

            last.text.pop();
            last.width = metrics.width_of(&last.text, &last.style.font, last.style.font_size);
            line.width = line.spans.iter().map(|span| span.width).sum();
            line
        })
        .collect()
}
