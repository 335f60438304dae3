use crate::geometry::{Cuboid, Dimensions, Point};

/// Free axis-aligned room inside a bin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Space {
    pub dimensions: Dimensions,
    pub position: Point,
}

impl Space {
    pub fn new(dimensions: Dimensions, position: Point) -> Self {
        Space {
            dimensions,
            position,
        }
    }

    /// A space with a zero extent cannot hold anything
    pub fn is_degenerate(&self) -> bool {
        self.dimensions.is_degenerate()
    }

    pub fn cuboid(&self) -> Cuboid {
        Cuboid::new(self.position, self.dimensions)
    }

    pub fn permuted(&self, axes: [usize; 3]) -> Self {
        Space::new(self.dimensions.permuted(axes), self.position.permuted(axes))
    }
}
