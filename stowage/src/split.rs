use std::cmp::Ordering;

use crate::entities::Space;
use crate::geometry::Dimensions;

/// All orders in which the three guillotine cuts can be made.
const CUT_ORDERS: [[usize; 3]; 6] = [
    [2, 1, 0],
    [2, 0, 1],
    [0, 2, 1],
    [0, 1, 2],
    [1, 0, 2],
    [1, 2, 0],
];

/// Splits the free room of `space` around an item with extents `item` placed at its origin.
///
/// The three residual spaces are disjoint, do not overlap the item and together cover all of `space` except the item.
/// Of the six possible cut orders, the one whose residual spaces compare greatest (first residual first,
/// each compared on its ascending-sorted extents) is chosen. Some residuals can be degenerate.
pub fn split_space(space: &Space, item: &Dimensions) -> [Space; 3] {
    let first = guillotine_cut(space, item, CUT_ORDERS[0]);
    //on ties, the cut order enumerated last wins
    CUT_ORDERS[1..]
        .iter()
        .map(|order| guillotine_cut(space, item, *order))
        .fold(first, |best, cut| match cmp_residuals(&cut, &best) {
            Ordering::Less => best,
            _ => cut,
        })
}

/// Cuts `space` along the axes in `order`.
/// The first residual takes the full extent of the space on the two other axes,
/// the second is limited to the item along the first axis, the third along the first two.
pub fn guillotine_cut(space: &Space, item: &Dimensions, [a, b, c]: [usize; 3]) -> [Space; 3] {
    let s = &space.dimensions;
    let remainder = |axis: usize| f64::max(s[axis] - item[axis], 0.0);

    let mut d1 = *s;
    d1.0[a] = remainder(a);

    let mut d2 = *s;
    d2.0[a] = item[a];
    d2.0[b] = remainder(b);

    let mut d3 = *item;
    d3.0[c] = remainder(c);

    [
        Space::new(d1, space.position.shifted(a, item[a])),
        Space::new(d2, space.position.shifted(b, item[b])),
        Space::new(d3, space.position.shifted(c, item[c])),
    ]
}

fn cmp_residuals(x: &[Space; 3], y: &[Space; 3]) -> Ordering {
    x.iter()
        .zip(y.iter())
        .map(|(sx, sy)| sx.dimensions.cmp_smallest_first(&sy.dimensions))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
