//! The greedy box: every item laid flat and stacked on top of each other.
//!
//! A trivially valid single-bin arrangement whose bounding box serves as a fallback
//! and as an upper bound for the guillotine packer and the container search.

use crate::entities::{Container, Item, Packing, Placement, Space};
use crate::geometry::{Dimensions, Point};

/// Bounding box of the greedy stack: the largest length, the largest width and the sum of all heights
/// (each item measured on its descending-sorted extents).
pub fn estimate(items: &[Item]) -> Dimensions {
    let (length, width, height) = items
        .iter()
        .map(|item| item.dimensions.sorted_desc())
        .fold((0.0_f64, 0.0_f64, 0.0), |(l, w, h), d| {
            (l.max(d.length()), w.max(d.width()), h + d.height())
        });
    Dimensions::new(length, width, height)
}

/// The greedy stack itself: items are laid flat (shortest extent along z) and stacked in the given order.
/// The free strips next to each item within its layer are reported as the packing's spaces.
///
/// The bounding box of the returned packing equals [`estimate`].
pub fn packing(items: &[Item]) -> Packing {
    let bbox = estimate(items);
    let mut placements = Vec::with_capacity(items.len());
    let mut spaces = Vec::with_capacity(2 * items.len());
    let mut z = 0.0;

    for (item_index, item) in items.iter().enumerate() {
        let d = item.dimensions.sorted_desc();
        placements.push(Placement {
            item_index,
            dimensions: d,
            position: Point::new(0.0, 0.0, z),
            weight: item.weight,
        });
        spaces.push(Space::new(
            Dimensions::new(bbox.length() - d.length(), bbox.width(), d.height()),
            Point::new(d.length(), 0.0, z),
        ));
        spaces.push(Space::new(
            Dimensions::new(d.length(), bbox.width() - d.width(), d.height()),
            Point::new(0.0, d.width(), z),
        ));
        z += d.height();
    }
    spaces.retain(|s| !s.is_degenerate());

    Packing {
        placements,
        weight: items.iter().map(|i| i.weight).sum(),
        spaces,
    }
}

/// True if a bin of `container` can hold the greedy stack of `items`, both in size (under some axis permutation) and in weight.
pub fn fits_in(container: &Container, items: &[Item]) -> bool {
    let total_weight = items.iter().map(|i| i.weight).sum::<f64>();
    estimate(items).fits_in_any_order(&container.dimensions) && total_weight <= container.weight_limit
}

/// The greedy stack rotated to lie inside a bin of `container`, whose axes are sorted longest first.
/// Only meaningful if [`fits_in`] holds.
pub fn packing_in(container: &Container, items: &[Item]) -> Packing {
    debug_assert!(fits_in(container, items));
    packing(items).permuted(estimate(items).axes_desc())
}
