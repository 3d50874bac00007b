//! The text layout pipeline: normalization, measurement, paragraph
//! segmentation, greedy line wrapping, and trailing-space trimming.
//!
//! The stages run in strict sequence (each consumes the previous stage's
//! output) and are all pure functions over the [FontMetrics](crate::FontMetrics)
//! adapter:
//!
//! 1. [`normalize_spans`] resolves every style field and splits embedded
//!    line breaks
//! 2. [`measure_spans`] annotates spans with advance widths
//! 3. [`split_paragraphs`] groups spans at `new_line` boundaries
//! 4. [`wrap_paragraph`] packs each paragraph into lines of a target width
//! 5. [`trim_trailing_spaces`] drops opted-in trailing space characters
//!
//! The textbox entry points in [`crate::draw_textbox`] and
//! [`crate::draw_single_line`] drive this pipeline; using the stages
//! directly is useful when a caller wants the wrapped [`Line`]s without
//! emitting draw instructions (e.g. to pre-compute a box height).

mod line;
mod normalize;
mod wrap;

pub use line::*;
pub use normalize::*;
pub use wrap::*;
