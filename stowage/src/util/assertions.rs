use itertools::Itertools;
use log::error;

use crate::entities::{Container, Item, PackResult, Packing};
use crate::geometry::{Cuboid, Point};
use crate::util::FPA;
//Various checks to verify correctness of packings and pack results
//Used in debug_assert!() blocks and in tests

pub fn result_is_feasible(container: &Container, items: &[Item], result: &PackResult) -> bool {
    result_accounts_for_all_items(items, result)
        && result.packings.iter().all(|p| {
            packing_respects_weight_limit(container, p)
                && placements_within_bin(container, p)
                && packing_is_overlap_free(p)
                && spaces_are_disjoint_from_placements(p)
        })
}

/// Every item is either placed exactly once or rejected exactly once.
pub fn result_accounts_for_all_items(items: &[Item], result: &PackResult) -> bool {
    let mut seen = vec![0_usize; items.len()];
    let placed = result
        .packings
        .iter()
        .flat_map(|p| p.placements.iter().map(|pl| pl.item_index));
    let rejected = result.errors.iter().map(|e| e.item_index);

    for idx in placed.chain(rejected) {
        match seen.get_mut(idx) {
            Some(count) => *count += 1,
            None => {
                error!("item index {idx} out of bounds ({} items)", items.len());
                return false;
            }
        }
    }
    let not_once = seen.iter().positions(|c| *c != 1).collect_vec();
    if !not_once.is_empty() {
        error!("items not accounted for exactly once: {not_once:?}");
        return false;
    }
    true
}

pub fn packing_respects_weight_limit(container: &Container, packing: &Packing) -> bool {
    let weight = packing.placements.iter().map(|p| p.weight).sum::<f64>();
    if FPA(weight) > FPA(container.weight_limit) || FPA(weight) != FPA(packing.weight) {
        error!(
            "packing weight {} (recorded {}) exceeds limit {}",
            weight, packing.weight, container.weight_limit
        );
        return false;
    }
    true
}

pub fn placements_within_bin(container: &Container, packing: &Packing) -> bool {
    let bin = Cuboid::new(Point::ORIGIN, container.bin_dimensions());
    match packing.placements.iter().find(|p| !bin.contains(&p.cuboid())) {
        Some(p) => {
            error!("placement {p:?} exceeds bin {:?}", bin.dimensions);
            false
        }
        None => true,
    }
}

pub fn packing_is_overlap_free(packing: &Packing) -> bool {
    for (a, b) in packing.placements.iter().tuple_combinations() {
        if a.cuboid().overlaps(&b.cuboid()) {
            error!("placements of items {} and {} overlap", a.item_index, b.item_index);
            return false;
        }
    }
    true
}

pub fn spaces_are_disjoint_from_placements(packing: &Packing) -> bool {
    for (s, p) in packing
        .spaces
        .iter()
        .filter(|s| !s.is_degenerate())
        .cartesian_product(packing.placements.iter())
    {
        if s.cuboid().overlaps(&p.cuboid()) {
            error!("free space {s:?} overlaps placement of item {}", p.item_index);
            return false;
        }
    }
    true
}

/// True if the residual spaces of a split are pairwise disjoint, disjoint from the placed item
/// and cover exactly the rest of the original space.
pub fn split_is_exact(space: &Cuboid, item: &Cuboid, residuals: &[Cuboid]) -> bool {
    let disjoint = residuals
        .iter()
        .tuple_combinations()
        .all(|(a, b)| FPA(a.overlap_volume(b)).is_zero())
        && residuals
            .iter()
            .all(|r| FPA(r.overlap_volume(item)).is_zero());
    let contained = residuals.iter().all(|r| space.contains(r));
    let covered = FPA(residuals.iter().map(Cuboid::volume).sum::<f64>() + item.volume())
        == FPA(space.volume());
    disjoint && contained && covered
}
