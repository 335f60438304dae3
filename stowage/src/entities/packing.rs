use crate::entities::{Container, Item, Placement, Space};
use crate::geometry::{Cuboid, Dimensions, Point, orientation};
use crate::split;

/// Contents of a single bin: the placed items, their total weight and the remaining free spaces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packing {
    pub placements: Vec<Placement>,
    pub weight: f64,
    pub spaces: Vec<Space>,
}

impl Packing {
    /// An empty bin of `container`, its only space being the whole bin.
    pub fn new(container: &Container) -> Self {
        Packing {
            placements: vec![],
            weight: 0.0,
            spaces: vec![Space::new(container.bin_dimensions(), Point::ORIGIN)],
        }
    }

    /// Tries to place `item` in one of the free spaces, smallest space first.
    /// On success the consumed space is replaced by its residual spaces and the placement is returned.
    pub fn try_place(&mut self, item_index: usize, item: &Item) -> Option<&Placement> {
        self.spaces.retain(|s| !s.is_degenerate());
        //try the smallest spaces first, stable for equally sized spaces
        self.spaces
            .sort_by(|a, b| a.dimensions.cmp_smallest_first(&b.dimensions));

        let (space_idx, oriented) = self
            .spaces
            .iter()
            .enumerate()
            .find_map(|(i, s)| {
                orientation::orient_in(&item.dimensions, &s.dimensions).map(|o| (i, o))
            })?;

        let space = self.spaces.remove(space_idx);
        let placement = Placement {
            item_index,
            dimensions: oriented,
            position: space.position,
            weight: item.weight,
        };
        self.spaces.extend(split::split_space(&space, &oriented));
        self.weight += item.weight;
        self.placements.push(placement);
        self.placements.last()
    }

    /// Dimensions of the smallest origin-anchored box enclosing every placed item.
    pub fn bounding_dimensions(&self) -> Dimensions {
        Cuboid::bounding_dimensions(self.placements.iter().map(Placement::cuboid))
    }

    /// Total volume of the placed items.
    pub fn placed_volume(&self) -> f64 {
        self.placements.iter().map(|p| p.dimensions.volume()).sum()
    }

    /// Ratio of placed volume to the volume of `container`.
    pub fn density(&self, container: &Container) -> f64 {
        self.placed_volume() / container.volume()
    }

    /// Rearranges the axes of the whole packing: the i-th axis of the result is axis `axes[i]` of `self`.
    pub fn permuted(&self, axes: [usize; 3]) -> Self {
        Packing {
            placements: self.placements.iter().map(|p| p.permuted(axes)).collect(),
            weight: self.weight,
            spaces: self.spaces.iter().map(|s| s.permuted(axes)).collect(),
        }
    }
}
