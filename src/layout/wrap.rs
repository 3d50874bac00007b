use crate::font::FontMetrics;
use crate::layout::line::Line;
use crate::layout::normalize::StyledSpan;
use crate::units::Pt;

/// Greedily pack a paragraph's spans into lines no wider than
/// `target_width`. Spans are appended whole while they fit; a span that
/// doesn't fit is split into word/space fragments and packed fragment by
/// fragment. The last fragment-line stays open so following spans of the
/// same paragraph can continue on it, which is what lets a wrapped word
/// boundary keep accumulating differently-styled spans.
///
/// Only a single indivisible fragment wider than the whole box ever
/// produces a line that exceeds `target_width`; words are never broken
/// mid-character.
pub fn wrap_paragraph<M: FontMetrics + ?Sized>(
    paragraph: Vec<StyledSpan>,
    target_width: Pt,
    metrics: &M,
) -> Vec<Line> {
    let total: Pt = paragraph.iter().map(|span| span.width).sum();
    if total <= target_width {
        return vec![Line::from_spans(paragraph)];
    }

    let mut lines: Vec<Line> = Vec::new();
    // the open line buffer and the width still available on it
    let mut open: Vec<StyledSpan> = Vec::new();
    let mut remaining = target_width;

    for span in paragraph {
        if span.width <= remaining {
            remaining -= span.width;
            open.push(span);
            continue;
        }

        let mut pieces = fragment_span(&span, remaining, target_width, metrics);
        if pieces.is_empty() {
            // the span was nothing but spaces that overflowed the line;
            // they are discarded and the open line stays as it is
            continue;
        }

        if !open.is_empty() {
            // the first fragment-line was packed against the space left on
            // the open line, so it usually completes that line
            if pieces[0].width <= remaining {
                open.push(pieces.remove(0));
            }
            lines.push(Line::from_spans(std::mem::take(&mut open)));
        }

        match pieces.pop() {
            Some(last) => {
                for piece in pieces {
                    lines.push(Line::from_spans(vec![piece]));
                }
                remaining = target_width - last.width;
                open.push(last);
            }
            None => {
                remaining = target_width;
            }
        }
    }

    if !open.is_empty() {
        lines.push(Line::from_spans(open));
    }

    lines
}

/// Split an overflowing span into per-line pieces. The first piece is
/// packed against `first_budget` (the space left on the line being filled);
/// every later piece gets the full `full_budget`. A space fragment that
/// does not fit is dropped; spaces never wrap. A word fragment that does
/// not fit closes the piece being filled and opens a fresh one, even when
/// the word alone is wider than the full budget (unavoidable overflow).
fn fragment_span<M: FontMetrics + ?Sized>(
    span: &StyledSpan,
    first_budget: Pt,
    full_budget: Pt,
    metrics: &M,
) -> Vec<StyledSpan> {
    let space_width = metrics.width_of(" ", &span.style.font, span.style.font_size);

    let mut pieces: Vec<StyledSpan> = Vec::new();
    let mut text = String::new();
    let mut width = Pt::ZERO;
    let mut remaining = first_budget;

    for fragment in split_fragments(&span.text) {
        let fragment_width = if fragment == " " {
            space_width
        } else {
            metrics.width_of(&fragment, &span.style.font, span.style.font_size)
        };

        if fragment_width <= remaining {
            text.push_str(&fragment);
            width += fragment_width;
            remaining -= fragment_width;
        } else if fragment != " " {
            if !text.is_empty() {
                pieces.push(span.with_text(std::mem::take(&mut text), width));
            }
            width = fragment_width;
            remaining = full_budget - fragment_width;
            text = fragment;
        }
        // an overflowing space is dropped, not carried to the next line
    }

    if !text.is_empty() {
        pieces.push(span.with_text(text, width));
    }

    pieces
}

/// Scan text into its smallest wrappable fragments: maximal runs of
/// non-space characters (a hyphen ends a run but stays attached to it) and
/// single spaces. No characters are lost: concatenating the fragments
/// reproduces the input.
fn split_fragments(text: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch == ' ' {
            if !word.is_empty() {
                fragments.push(std::mem::take(&mut word));
            }
            fragments.push(" ".to_string());
        } else {
            word.push(ch);
            if ch == '-' {
                fragments.push(std::mem::take(&mut word));
            }
        }
    }

    if !word.is_empty() {
        fragments.push(word);
    }

    fragments
}
