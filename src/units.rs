use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};

/// A length in PDF points (1/72 inch). All widths, heights, and coordinates
/// handled by the layout functions are expressed in points; raw image pixel
/// sizes stay plain [f32]s until they are fitted into a box.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Display,
    From, Into,
)]
pub struct Pt(pub f32);

impl Pt {
    /// A zero-length constant, handy as a fold seed
    pub const ZERO: Pt = Pt(0.0);

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl std::iter::Sum for Pt {
    fn sum<I: Iterator<Item = Pt>>(iter: I) -> Pt {
        Pt(iter.map(|pt| pt.0).sum())
    }
}
