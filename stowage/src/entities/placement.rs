use crate::geometry::{Cuboid, Dimensions, Point};

/// An [`Item`](crate::entities::Item) placed inside a bin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the item in the list handed to the packer
    pub item_index: usize,
    /// Extents of the item after rotation, along the x, y and z axes of the bin
    pub dimensions: Dimensions,
    /// Position of the item's minimum corner
    pub position: Point,
    pub weight: f64,
}

impl Placement {
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::new(self.position, self.dimensions)
    }

    pub fn permuted(&self, axes: [usize; 3]) -> Self {
        Placement {
            dimensions: self.dimensions.permuted(axes),
            position: self.position.permuted(axes),
            ..*self
        }
    }
}
