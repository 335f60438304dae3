use crate::geometry::{Dimensions, Point};
use crate::util::FPA;

/// Axis-aligned box anchored at its minimum corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub position: Point,
    pub dimensions: Dimensions,
}

impl Cuboid {
    pub fn new(position: Point, dimensions: Dimensions) -> Self {
        Cuboid {
            position,
            dimensions,
        }
    }

    pub fn min(&self, axis: usize) -> f64 {
        self.position[axis]
    }

    pub fn max(&self, axis: usize) -> f64 {
        self.position[axis] + self.dimensions[axis]
    }

    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Volume shared by `self` and `other`, 0 if they are disjoint or only touch.
    pub fn overlap_volume(&self, other: &Cuboid) -> f64 {
        (0..3)
            .map(|axis| {
                let lo = f64::max(self.min(axis), other.min(axis));
                let hi = f64::min(self.max(axis), other.max(axis));
                f64::max(hi - lo, 0.0)
            })
            .product()
    }

    /// True if the interiors of both boxes intersect (touching faces do not count).
    pub fn overlaps(&self, other: &Cuboid) -> bool {
        (0..3).all(|axis| {
            let lo = f64::max(self.min(axis), other.min(axis));
            let hi = f64::min(self.max(axis), other.max(axis));
            FPA(hi) > FPA(lo)
        })
    }

    /// True if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Cuboid) -> bool {
        (0..3).all(|axis| {
            FPA(self.min(axis)) <= FPA(other.min(axis))
                && FPA(other.max(axis)) <= FPA(self.max(axis))
        })
    }

    /// Smallest box enclosing all `cuboids`, anchored at the origin.
    pub fn bounding_dimensions(cuboids: impl IntoIterator<Item = Cuboid>) -> Dimensions {
        let mut extents = [0.0_f64; 3];
        for c in cuboids {
            for (axis, e) in extents.iter_mut().enumerate() {
                *e = e.max(c.max(axis));
            }
        }
        Dimensions(extents)
    }
}
