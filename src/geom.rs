use crate::units::Pt;

/// An axis-aligned rectangle given by its origin and size. The layout
/// functions treat the origin as the top-left corner of a box; the draw
/// target is free to map that into whatever coordinate space it renders in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Rect {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The centre point of the rectangle
    pub fn centre(&self) -> (Pt, Pt) {
        (
            self.x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }

    /// Shrink the rectangle by `d` on every side (negative `d` grows it).
    /// The size may go negative for large insets; callers that care clamp.
    pub fn inset(&self, d: Pt) -> Rect {
        Rect {
            x: self.x + d,
            y: self.y + d,
            width: self.width - d * 2.0,
            height: self.height - d * 2.0,
        }
    }

    /// The same rectangle moved by `(dx, dy)`
    pub fn translated(&self, dx: Pt, dy: Pt) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_moves_every_side() {
        let r = Rect::new(Pt(10.0), Pt(20.0), Pt(100.0), Pt(50.0)).inset(Pt(5.0));
        assert_eq!(r, Rect::new(Pt(15.0), Pt(25.0), Pt(90.0), Pt(40.0)));

        let grown = Rect::new(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)).inset(Pt(-2.0));
        assert_eq!(grown, Rect::new(Pt(-2.0), Pt(-2.0), Pt(14.0), Pt(14.0)));
    }

    #[test]
    fn centre_is_origin_plus_half_size() {
        let r = Rect::new(Pt(10.0), Pt(10.0), Pt(30.0), Pt(20.0));
        assert_eq!(r.centre(), (Pt(25.0), Pt(20.0)));
    }
}
