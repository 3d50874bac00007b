mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod geom;
pub use geom::*;

mod image;
pub use self::image::*;

mod imagebox;
pub use imagebox::*;

/// The staged text layout pipeline (normalize, measure, segment, wrap, trim)
pub mod layout;
pub use layout::{Line, Span, StyledSpan};

mod single_line;
pub use single_line::*;

mod style;
pub use style::*;

mod target;
pub use target::*;

mod textbox;
pub use textbox::*;

mod units;
pub use units::*;
