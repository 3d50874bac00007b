//! Lays out a wrapped textbox, a justified single line, and a clipped
//! image box, then prints the recorded draw instructions. Swap the
//! recording target for a real renderer to turn the same calls into a
//! document.

use pdf_textbox::layout::Span;
use pdf_textbox::{
    colours, draw_single_line, draw_textbox, place_image, Align, ClipShape, DrawOp, FontLibrary,
    ImageBoxOptions, ImageFitOptions, ImageSource, ObjectFit, Pt, Rect, RecordingTarget,
    StrokeAlign, StrokeOptions, Style,
};

fn main() {
    // widths for unregistered fonts are estimated; register TTF faces with
    // FontLibrary::add_font for exact measurements
    let fonts = FontLibrary::new();
    let mut page = RecordingTarget::new();

    let body = Style {
        font_size: Some(Pt(11.0)),
        line_height: Some(1.3),
        ..Style::default()
    };
    let accent = Style {
        colour: Some(colours::BLUE),
        underline: Some(true),
        ..Style::default()
    };

    draw_textbox(
        &mut page,
        &fonts,
        &[
            Span::new(lipsum::lipsum(40)),
            Span::new("\n\n"),
            Span::new(lipsum::lipsum_words(25)),
        ],
        (Pt(72.0), Pt(72.0)),
        Pt(451.0),
        &body,
        Some(Pt(400.0)),
    );

    let status = draw_single_line(
        &mut page,
        &fonts,
        &[
            Span::new("left"),
            Span::styled("middle", accent),
            Span::new("right"),
        ],
        (Pt(72.0), Pt(500.0)),
        (Pt(451.0), Pt(16.0)),
        &Style {
            align: Some(Align::Justify),
            ..Style::default()
        },
        true,
    );
    println!("single line: {}", status.outcome);

    let photo = ImageSource::from_image(image::DynamicImage::new_rgb8(640, 480));
    place_image(
        &mut page,
        Some(&photo),
        &ImageBoxOptions {
            bounds: Rect::new(Pt(72.0), Pt(540.0), Pt(180.0), Pt(180.0)),
            clip: ClipShape::Rect {
                radius: Some(Pt(12.0)),
            },
            stroke: Some(StrokeOptions {
                width: Pt(2.0),
                colour: Some(colours::BLACK),
                align: StrokeAlign::Inside,
                ..StrokeOptions::default()
            }),
            fill: None,
            image: Some(ImageFitOptions {
                object_fit: ObjectFit::Cover,
                ..ImageFitOptions::default()
            }),
        },
    )
    .expect("image box placed");

    println!("{} draw instructions:", page.ops.len());
    for op in &page.ops {
        match op {
            DrawOp::Text(text) => println!(
                "  text {:>6.1},{:>6.1} {:?} ({} {})",
                text.x.0, text.y.0, text.text, text.font, text.font_size
            ),
            other => println!("  {other:?}"),
        }
    }
}
