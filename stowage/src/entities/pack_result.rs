use std::fmt::{Display, Formatter};

use crate::entities::{Item, Packing};

/// Outcome of packing a list of items into bins of a container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackResult {
    /// One packing per bin, in the order the bins were opened
    pub packings: Vec<Packing>,
    /// One entry per item that could not be packed
    pub errors: Vec<PackError>,
}

impl PackResult {
    pub fn n_placed(&self) -> usize {
        self.packings.iter().map(|p| p.placements.len()).sum()
    }

    /// True if all items ended up in a single bin
    pub fn is_single_bin(&self) -> bool {
        self.packings.len() == 1 && self.errors.is_empty()
    }
}

/// An item that was left out of every bin, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct PackError {
    pub item_index: usize,
    pub item: Item,
    pub kind: PackErrorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackErrorKind {
    /// The item alone exceeds the weight limit of the container
    TooHeavy,
    /// The item does not fit in an empty bin, in any of the considered orientations
    DoesNotFit,
}

impl Display for PackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PackErrorKind::TooHeavy => write!(
                f,
                "item {} {} is too heavy for container",
                self.item_index, self.item
            ),
            PackErrorKind::DoesNotFit => write!(
                f,
                "item {} {} cannot be placed in container",
                self.item_index, self.item
            ),
        }
    }
}
