use crate::colour::{colours, Colour};
use crate::units::Pt;

/// Horizontal alignment of a line within its box
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    /// Distribute leftover width evenly between span boundaries. Only the
    /// single-line layout justifies; the wrapping layout treats it as left.
    Justify,
}

/// Vertical baseline mode passed through to the draw target
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
    Bottom,
}

/// A styling attribute bag. Every field is optional; unset fields inherit
/// from the box style, which in turn inherits from [Style::textbox_default].
/// Merging never mutates; it produces a new bag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub font: Option<String>,
    pub font_size: Option<Pt>,
    /// Line height as a multiplier of the effective font size. Normalization
    /// converts this to an absolute [Pt] value.
    pub line_height: Option<f32>,
    pub align: Option<Align>,
    pub colour: Option<Colour>,
    /// Fill opacity for the span text, 0.0 to 1.0
    pub opacity: Option<f32>,
    /// Remove a single trailing space from the last span of a line
    pub trim_trailing_space: Option<bool>,
    /// Hyperlink target attached to the drawn text
    pub link: Option<String>,
    /// Slant angle in degrees for faux-italic rendering
    pub oblique: Option<f32>,
    pub underline: Option<bool>,
    pub strike: Option<bool>,
    pub baseline: Option<Baseline>,
}

impl Style {
    /// The hard-coded defaults every textbox starts from. Explicitly merged
    /// into the caller's box style on each layout call; there is no global
    /// mutable default.
    pub fn textbox_default() -> Style {
        Style {
            font: Some("Times-Roman".into()),
            font_size: Some(Pt(12.0)),
            line_height: Some(1.0),
            align: Some(Align::Left),
            colour: Some(colours::BLACK),
            opacity: None,
            trim_trailing_space: Some(true),
            link: None,
            oblique: Some(0.0),
            underline: Some(false),
            strike: None,
            baseline: None,
        }
    }

    /// A new bag where every field set in `self` wins over `base`
    pub fn merged_over(&self, base: &Style) -> Style {
        Style {
            font: self.font.clone().or_else(|| base.font.clone()),
            font_size: self.font_size.or(base.font_size),
            line_height: self.line_height.or(base.line_height),
            align: self.align.or(base.align),
            colour: self.colour.or(base.colour),
            opacity: self.opacity.or(base.opacity),
            trim_trailing_space: self.trim_trailing_space.or(base.trim_trailing_space),
            link: self.link.clone().or_else(|| base.link.clone()),
            oblique: self.oblique.or(base.oblique),
            underline: self.underline.or(base.underline),
            strike: self.strike.or(base.strike),
            baseline: self.baseline.or(base.baseline),
        }
    }
}

/// A fully-resolved style: every attribute concrete, and `line_height`
/// holding an absolute length rather than a multiplier. Produced by
/// normalization; everything downstream of it can read styling without
/// touching an [Option].
#[derive(Debug, Clone, PartialEq)]
pub struct SpanStyle {
    pub font: String,
    pub font_size: Pt,
    /// Absolute line height (multiplier × effective font size)
    pub line_height: Pt,
    pub align: Align,
    pub colour: Colour,
    pub opacity: f32,
    pub trim_trailing_space: bool,
    pub link: Option<String>,
    pub oblique: f32,
    pub underline: bool,
    pub strike: bool,
    pub baseline: Baseline,
}

impl SpanStyle {
    /// Resolve a span's style against the (default-merged) box style. The
    /// absolute line height derives from the effective font size: the span's
    /// own size when it has one, otherwise the box size.
    pub fn resolve(style: &Style, box_style: &Style) -> SpanStyle {
        let font = style
            .font
            .clone()
            .or_else(|| box_style.font.clone())
            .unwrap_or_else(|| "Times-Roman".into());
        let font_size = style
            .font_size
            .or(box_style.font_size)
            .unwrap_or(Pt(12.0));
        let multiplier = style.line_height.or(box_style.line_height).unwrap_or(1.0);

        SpanStyle {
            font,
            font_size,
            line_height: font_size * multiplier,
            align: style.align.or(box_style.align).unwrap_or_default(),
            colour: style
                .colour
                .or(box_style.colour)
                .unwrap_or(colours::BLACK),
            opacity: style.opacity.or(box_style.opacity).unwrap_or(1.0),
            trim_trailing_space: style
                .trim_trailing_space
                .or(box_style.trim_trailing_space)
                .unwrap_or(true),
            link: style.link.clone().or_else(|| box_style.link.clone()),
            oblique: style.oblique.or(box_style.oblique).unwrap_or(0.0),
            underline: style.underline.or(box_style.underline).unwrap_or(false),
            strike: style.strike.or(box_style.strike).unwrap_or(false),
            baseline: style.baseline.or(box_style.baseline).unwrap_or_default(),
        }
    }
}
