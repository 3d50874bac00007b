use crate::colour::Colour;
use crate::geom::Rect;
use crate::image::ImageSource;
use crate::imagebox::{ShapePath, StrokeOptions};
use crate::style::Baseline;
use crate::units::Pt;

/// One positioned piece of text for the renderer to draw. Coordinates are
/// the pen position: `x` is the left edge of the first glyph, `y` the
/// baseline computed by the layout entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub font: String,
    pub font_size: Pt,
    pub colour: Colour,
    pub opacity: f32,
    pub link: Option<String>,
    pub oblique: f32,
    pub underline: bool,
    pub strike: bool,
    pub baseline: Baseline,
}

/// The consumer side of the layout engine. Layout never draws anything
/// itself: it emits positioned instructions through this trait and the
/// implementation maps them onto its renderer (a PDF content stream, a
/// canvas, a test recorder).
///
/// State handling follows PDF conventions: [save](DrawTarget::save) /
/// [restore](DrawTarget::restore) bracket clip regions, but opacity is NOT
/// scoped. The layout code explicitly resets any opacity it set back to
/// 1.0 after the affected drawing operation, and implementations must apply
/// the values as given.
pub trait DrawTarget {
    /// Draw a styled piece of text at its pen position
    fn draw_text(&mut self, op: TextOp);

    /// Stroke a straight rule, used for underline and strike decorations
    fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), thickness: Pt, colour: Colour);

    /// Draw an image's pixels into the given rectangle
    fn draw_image(&mut self, image: &ImageSource, rect: Rect);

    /// Push the current graphics state
    fn save(&mut self);

    /// Pop the graphics state pushed by the matching [save](DrawTarget::save)
    fn restore(&mut self);

    /// Intersect the current clip region with a shape path
    fn clip(&mut self, path: &ShapePath);

    /// Fill a shape path with a colour
    fn fill_path(&mut self, path: &ShapePath, colour: Colour);

    /// Stroke the outline of a shape path with the given pen settings
    /// (width, colour, cap, join, dash; alignment and opacity are already
    /// applied by the caller)
    fn stroke_path(&mut self, path: &ShapePath, stroke: &StrokeOptions);

    /// Set the global (image) opacity
    fn set_opacity(&mut self, value: f32);

    /// Set the fill opacity
    fn set_fill_opacity(&mut self, value: f32);

    /// Set the stroke opacity
    fn set_stroke_opacity(&mut self, value: f32);
}

/// A recorded draw instruction, one variant per [DrawTarget] method
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    Rule {
        from: (Pt, Pt),
        to: (Pt, Pt),
        thickness: Pt,
        colour: Colour,
    },
    Image {
        rect: Rect,
        /// Native pixel size of the source that was drawn
        source_px: (u32, u32),
    },
    Save,
    Restore,
    Clip(ShapePath),
    Fill {
        path: ShapePath,
        colour: Colour,
    },
    Stroke {
        path: ShapePath,
        stroke: StrokeOptions,
    },
    Opacity(f32),
    FillOpacity(f32),
    StrokeOpacity(f32),
}

/// A [DrawTarget] that records every instruction into a list. This is the
/// crate's reference consumer: tests assert on the recorded sequence, and
/// renderer integrations can replay [RecordingTarget::ops] instead of
/// implementing the trait directly.
#[derive(Default)]
pub struct RecordingTarget {
    pub ops: Vec<DrawOp>,
}

impl RecordingTarget {
    pub fn new() -> RecordingTarget {
        RecordingTarget::default()
    }

    /// Just the text instructions, in emission order
    pub fn text_ops(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl DrawTarget for RecordingTarget {
    fn draw_text(&mut self, op: TextOp) {
        self.ops.push(DrawOp::Text(op));
    }

    fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), thickness: Pt, colour: Colour) {
        self.ops.push(DrawOp::Rule {
            from,
            to,
            thickness,
            colour,
        });
    }

    fn draw_image(&mut self, image: &ImageSource, rect: Rect) {
        self.ops.push(DrawOp::Image {
            rect,
            source_px: (image.image.width(), image.image.height()),
        });
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn clip(&mut self, path: &ShapePath) {
        self.ops.push(DrawOp::Clip(path.clone()));
    }

    fn fill_path(&mut self, path: &ShapePath, colour: Colour) {
        self.ops.push(DrawOp::Fill {
            path: path.clone(),
            colour,
        });
    }

    fn stroke_path(&mut self, path: &ShapePath, stroke: &StrokeOptions) {
        self.ops.push(DrawOp::Stroke {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn set_opacity(&mut self, value: f32) {
        self.ops.push(DrawOp::Opacity(value));
    }

    fn set_fill_opacity(&mut self, value: f32) {
        self.ops.push(DrawOp::FillOpacity(value));
    }

    fn set_stroke_opacity(&mut self, value: f32) {
        self.ops.push(DrawOp::StrokeOpacity(value));
    }
}
