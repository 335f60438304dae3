use std::cmp::Ordering;
use std::fmt::Display;

/// Floating point wrapper for tolerant comparison of extents and volumes.
/// Built on [`float_cmp::approx_eq!()`]: two values within a few ULPs (or within `EPSILON`) are considered equal.
///
/// Residual spaces are computed by repeated subtraction, so an item that exactly fills
/// the remaining room can end up a hair larger than the space it should fit in.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    pub const EPSILON: f64 = 1e-9;

    pub fn is_zero(self) -> bool {
        self == FPA(0.0)
    }
}

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = FPA::EPSILON, ulps = 4)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
