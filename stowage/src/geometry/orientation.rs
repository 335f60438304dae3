use crate::geometry::Dimensions;
use crate::util::FPA;

/// Rotations considered for boxes, as index patterns into a descending-sorted triple `(l, w, h)`:
/// `[w, h, l]`, `[l, w, h]` and `[l, h, w]`.
/// Each one puts a different extent in the leading position. The other three axis permutations are not enumerated.
pub const ROTATIONS: [[usize; 3]; 3] = [[1, 2, 0], [0, 1, 2], [0, 2, 1]];

/// The three orientations of `dims` that are considered during placement and container growth.
pub fn orientations(dims: &Dimensions) -> [Dimensions; 3] {
    let sorted = dims.sorted_desc();
    ROTATIONS.map(|r| sorted.permuted(r))
}

/// Searches an orientation of `item` that fits inside `space` when anchored at the space's origin.
///
/// Every rotation of the space is crossed with every rotation of the item (space in the outer loop),
/// the first combination that fits axis by axis is accepted.
/// The returned extents are expressed along the axes of `space`.
pub fn orient_in(item: &Dimensions, space: &Dimensions) -> Option<Dimensions> {
    let space_axes = space.axes_desc();
    let item_sorted = item.sorted_desc();

    for s_rot in ROTATIONS {
        //axes of the space selected by this rotation
        let axes = s_rot.map(|i| space_axes[i]);
        for i_rot in ROTATIONS {
            let extents = i_rot.map(|i| item_sorted[i]);
            let fits = (0..3).all(|k| FPA(extents[k]) <= FPA(space[axes[k]]));
            if fits {
                let mut oriented = [0.0; 3];
                for k in 0..3 {
                    oriented[axes[k]] = extents[k];
                }
                return Some(Dimensions(oriented));
            }
        }
    }
    None
}
