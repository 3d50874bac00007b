use crate::{error::TextboxError, units::Pt};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::collections::HashMap;

/// Ascent ratio used when a font can be resolved neither from the standard
/// table nor from the metrics adapter (the Times-Roman value)
pub const FALLBACK_ASCENT: f32 = 0.683;

/// The measurement boundary of the layout engine. Implementations resolve a
/// font identifier to advance widths and ascent metrics; the layout code
/// never touches font data directly.
///
/// `width_of` must be total: it always returns a width, however approximate.
/// `ascent_ratio` may fail with [None], in which case layout falls back to
/// [FALLBACK_ASCENT] and warns.
pub trait FontMetrics {
    /// The advance width of `text` set in `font` at `size`
    fn width_of(&self, text: &str, font: &str, size: Pt) -> Pt;

    /// Ascent as a fraction of the font size (distance from the baseline to
    /// the top of the typical glyph), or [None] if the font is unknown
    fn ascent_ratio(&self, font: &str) -> Option<f32>;
}

/// Baseline ascent for a font at a given size. The fourteen standard PDF
/// fonts are resolved from a fixed table; anything else is asked of the
/// metrics adapter, falling back to [FALLBACK_ASCENT] when that fails.
pub fn font_ascent<M: FontMetrics + ?Sized>(font: &str, size: Pt, metrics: &M) -> Pt {
    let ratio = match font.trim() {
        "Courier" | "Courier-Bold" | "Courier-Oblique" | "Courier-BoldOblique" => 0.629,
        "Helvetica" | "Helvetica-Bold" | "Helvetica-Oblique" | "Helvetica-BoldOblique" => 0.718,
        "Times-Roman" | "Times-Bold" | "Times-Italic" | "Times-BoldItalic" => 0.683,
        "Symbol" | "ZapfDingbats" => 0.5,
        other => metrics.ascent_ratio(other).unwrap_or_else(|| {
            log::warn!("no ascent metrics for font {other:?}, falling back to Times-Roman");
            FALLBACK_ASCENT
        }),
    };
    size * ratio
}

/// A parsed font face. Fonts can be TTF or OTF fonts; only the metrics side
/// of the face is used here (advance widths, ascender, units per em); glyph
/// outlines and embedding stay with the renderer.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the face could not
    /// be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextboxError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * self.ascent_ratio()
    }

    /// Ascent as a fraction of the em size
    pub fn ascent_ratio(&self) -> f32 {
        let face = self.face.as_face_ref();
        face.ascender() as f32 / face.units_per_em() as f32
    }

    /// Calculate the width of a string of text at the given size, summing
    /// glyph advances. Characters without a glyph in the face contribute
    /// nothing to the width.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling = size.0 / face.units_per_em() as f32;
        let advance: f32 = text
            .chars()
            .filter_map(|ch| face.glyph_index(ch))
            .map(|gid| face.glyph_hor_advance(gid).unwrap_or_default() as f32 * scaling)
            .sum();
        Pt(advance)
    }
}

/// A registry of loaded font faces keyed by the identifier that styles refer
/// to them with. Doubles as the crate's [FontMetrics] implementation: layout
/// calls share a `&FontLibrary` and the library is never mutated during
/// layout, so concurrent textboxes are safe.
#[derive(Default)]
pub struct FontLibrary {
    faces: Arena<Font>,
    names: HashMap<String, Id<Font>>,
}

impl FontLibrary {
    pub fn new() -> FontLibrary {
        FontLibrary::default()
    }

    /// Register a loaded face under the identifier used in span styles,
    /// replacing any previous face with the same name
    pub fn add_font<S: Into<String>>(&mut self, name: S, font: Font) -> Id<Font> {
        let id = self.faces.alloc(font);
        self.names.insert(name.into(), id);
        id
    }

    /// Look up a registered face by name
    pub fn font(&self, name: &str) -> Option<&Font> {
        self.names.get(name).map(|&id| &self.faces[id])
    }
}

impl FontMetrics for FontLibrary {
    fn width_of(&self, text: &str, font: &str, size: Pt) -> Pt {
        match self.font(font) {
            Some(face) => face.width_of_text(text, size),
            None => {
                // stay total: estimate half an em per character
                log::warn!("font {font:?} is not registered, estimating width");
                size * 0.5 * text.chars().count() as f32
            }
        }
    }

    fn ascent_ratio(&self, font: &str) -> Option<f32> {
        self.font(font).map(|face| face.ascent_ratio())
    }
}
