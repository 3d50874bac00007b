//! End-to-end runs of the two text entry points and the image box against
//! the recording draw target.

use pdf_textbox::layout::Span;
use pdf_textbox::{
    draw_single_line, draw_textbox, place_image, Align, ClipShape, DrawOp, FontMetrics,
    ImageBoxOptions, ImageFitOptions, ImageSource, LineOutcome, Pt, Rect, RecordingTarget, Style,
};

/// Deterministic fake metrics: every character advances half an em, so a
/// 12pt character is 6pt wide
struct EmMetrics;

impl FontMetrics for EmMetrics {
    fn width_of(&self, text: &str, _font: &str, size: Pt) -> Pt {
        size * 0.5 * text.chars().count() as f32
    }
    fn ascent_ratio(&self, _font: &str) -> Option<f32> {
        None
    }
}

const CHAR: f32 = 6.0;
const ASCENT: f32 = 12.0 * 0.683;

#[test]
fn a_short_span_is_a_single_line() {
    let mut target = RecordingTarget::new();
    draw_textbox(
        &mut target,
        &EmMetrics,
        &[Span::new("Hello World. ")],
        (Pt(72.0), Pt(72.0)),
        Pt(200.0),
        &Style::default(),
        None,
    );

    let ops: Vec<_> = target.text_ops().collect();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].text, "Hello World.");
    assert_eq!(ops[0].x, Pt(72.0));
    assert!((ops[0].y.0 - (72.0 + ASCENT)).abs() < 1e-3);
}

#[test]
fn double_line_breaks_leave_a_blank_line_between_paragraphs() {
    let mut target = RecordingTarget::new();
    draw_textbox(
        &mut target,
        &EmMetrics,
        &[Span::new("dolore magna \n\nAt vero eos")],
        (Pt(0.0), Pt(0.0)),
        Pt(300.0),
        &Style::default(),
        None,
    );

    let ops: Vec<_> = target.text_ops().collect();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].text, "dolore magna");
    assert_eq!(ops[1].text, "At vero eos");
    // one blank 12pt line sits between the two paragraphs
    assert!((ops[1].y.0 - ops[0].y.0 - 24.0).abs() < 1e-3);
}

#[test]
fn mixed_style_spans_wrap_and_keep_their_own_styling() {
    let bold_ish = Style {
        font: Some("Helvetica-Bold".into()),
        font_size: Some(Pt(24.0)),
        ..Style::default()
    };
    let mut target = RecordingTarget::new();
    draw_textbox(
        &mut target,
        &EmMetrics,
        &[
            Span::new("plain text then "),
            Span::styled("big bold words that need wrapping", bold_ish),
        ],
        (Pt(0.0), Pt(0.0)),
        Pt(30.0 * CHAR),
        &Style::default(),
        None,
    );

    let ops: Vec<_> = target.text_ops().collect();
    assert!(ops.len() >= 3);
    // the first line still starts with the 12pt span
    assert_eq!(ops[0].font, "Times-Roman");
    assert_eq!(ops[0].x, Pt(0.0));
    // the styled span keeps its font and size through fragmentation
    for op in ops.iter().skip(1) {
        assert_eq!(op.font, "Helvetica-Bold");
        assert_eq!(op.font_size, Pt(24.0));
    }
    // wrapped lines advance the baseline monotonically
    let mut last_y = f32::MIN;
    for op in &ops {
        assert!(op.y.0 >= last_y);
        last_y = op.y.0;
    }
}

#[test]
fn max_height_truncates_whole_lines() {
    let mut target = RecordingTarget::new();
    draw_textbox(
        &mut target,
        &EmMetrics,
        &[Span::new(&lipsum::lipsum(200))],
        (Pt(0.0), Pt(0.0)),
        Pt(40.0 * CHAR),
        &Style::default(),
        Some(Pt(50.0)),
    );

    // 12pt lines into 50pt of room: exactly four lines survive
    let mut ys: Vec<i64> = target.text_ops().map(|op| op.y.0.round() as i64).collect();
    ys.dedup();
    assert_eq!(ys.len(), 4);
}

#[test]
fn single_line_overflow_policy_reports_without_drawing() {
    let mut target = RecordingTarget::new();
    // 350pt of text against a 330pt box
    let status = draw_single_line(
        &mut target,
        &EmMetrics,
        &[Span::new("y".repeat(350 / CHAR as usize + 1))],
        (Pt(10.0), Pt(10.0)),
        (Pt(330.0), Pt(20.0)),
        &Style::default(),
        false,
    );

    assert!(target.ops.is_empty());
    assert_eq!(status.outcome, LineOutcome::TooLongNotRendered);
    assert_eq!(
        status.outcome.to_string(),
        "text is too long, did not render"
    );
    assert_eq!(status.height, Pt(20.0));
}

#[test]
fn justified_single_line_fills_the_box_width() {
    let justify = Style {
        align: Some(Align::Justify),
        ..Style::default()
    };
    let mut target = RecordingTarget::new();
    let status = draw_single_line(
        &mut target,
        &EmMetrics,
        &[Span::new("lorem"), Span::new("ipsum"), Span::new("dolor")],
        (Pt(0.0), Pt(0.0)),
        (Pt(300.0), Pt(20.0)),
        &justify,
        false,
    );

    assert_eq!(status.width, Pt(300.0));
    let ops: Vec<_> = target.text_ops().collect();
    assert_eq!(ops.len(), 3);
    // the last span's right edge lands on the box edge
    let last = ops.last().unwrap();
    assert!((last.x.0 + 5.0 * CHAR - 300.0).abs() < 1e-3);
}

#[test]
fn image_cover_with_offset_draws_where_the_maths_says() {
    let source = ImageSource::from_image(image_of(600, 400));
    let mut target = RecordingTarget::new();
    place_image(
        &mut target,
        Some(&source),
        &ImageBoxOptions {
            bounds: Rect::new(Pt(0.0), Pt(0.0), Pt(300.0), Pt(300.0)),
            clip: ClipShape::None,
            stroke: None,
            fill: None,
            image: Some(ImageFitOptions {
                offset_x_pct: 25.0,
                ..ImageFitOptions::default()
            }),
        },
    )
    .unwrap();

    let rect = target
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Image { rect, .. } => Some(*rect),
            _ => None,
        })
        .expect("an image op was recorded");
    assert_eq!(rect, Rect::new(Pt(37.5), Pt(0.0), Pt(450.0), Pt(300.0)));
}

fn image_of(width: u32, height: u32) -> image::DynamicImage {
    image::DynamicImage::new_rgb8(width, height)
}
