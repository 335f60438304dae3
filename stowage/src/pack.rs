use itertools::Itertools;
use log::{debug, trace};

use crate::entities::{
    Container, Item, PackError, PackErrorKind, PackResult, Packing, validate_items,
};
use crate::error::Result;
use crate::greedy;
use crate::util::assertions;

/// Packs `items` into as many bins of `container` as needed.
///
/// Items are handled largest first and put in the first bin (in opening order) with
/// enough weight budget and a free space they fit in. Items that are too heavy for the container,
/// or too large for an empty bin, are reported in [`PackResult::errors`].
///
/// When the items end up spread over multiple bins while the greedy stack fits in one,
/// the greedy stack is returned instead.
pub fn pack(container: &Container, items: &[Item]) -> Result<PackResult> {
    container.validate()?;
    validate_items(items)?;

    Ok(GuillotinePacker::new(container, items).solve())
}

/// First-fit packer that splits the free room of a bin into guillotine-cut spaces.
pub struct GuillotinePacker<'a> {
    pub container: &'a Container,
    pub items: &'a [Item],
    pub packings: Vec<Packing>,
    pub errors: Vec<PackError>,
}

impl<'a> GuillotinePacker<'a> {
    pub fn new(container: &'a Container, items: &'a [Item]) -> Self {
        Self {
            container,
            items,
            packings: vec![],
            errors: vec![],
        }
    }

    pub fn solve(mut self) -> PackResult {
        if self.container.is_degenerate() {
            debug!(
                "[PACK] container {} has no volume, no item can be placed",
                self.container.dimensions
            );
        }
        for item_index in item_placement_order(self.items) {
            if self.items[item_index].weight > self.container.weight_limit {
                self.reject(item_index, PackErrorKind::TooHeavy);
                continue;
            }
            if !self.place_in_open_bins(item_index) && !self.place_in_new_bin(item_index) {
                self.reject(item_index, PackErrorKind::DoesNotFit);
            }
        }

        debug!(
            "[PACK] {} items in {} bin(s), {} rejected",
            self.packings.iter().map(|p| p.placements.len()).sum::<usize>(),
            self.packings.len(),
            self.errors.len()
        );

        if self.packings.len() > 1 && greedy::fits_in(self.container, self.items) {
            debug!(
                "[PACK] {} bins used while the greedy stack {} fits in a single one, switching to the greedy stack",
                self.packings.len(),
                greedy::estimate(self.items)
            );
            self.packings = vec![greedy::packing_in(self.container, self.items)];
            self.errors.clear();
        }

        let result = PackResult {
            packings: self.packings,
            errors: self.errors,
        };

        debug_assert!(assertions::result_is_feasible(
            self.container,
            self.items,
            &result
        ));

        result
    }

    /// Tries every open bin in the order they were opened.
    fn place_in_open_bins(&mut self, item_index: usize) -> bool {
        let item = self.items[item_index];
        for (bin_index, packing) in self.packings.iter_mut().enumerate() {
            if packing.weight + item.weight > self.container.weight_limit {
                continue;
            }
            if let Some(p) = packing.try_place(item_index, &item) {
                trace!(
                    "[PACK] placed item {item_index} as {} at {:?} in bin {bin_index}",
                    p.dimensions, p.position.0
                );
                return true;
            }
        }
        false
    }

    /// Opens a new bin for the item, unless it does not even fit in an empty one.
    fn place_in_new_bin(&mut self, item_index: usize) -> bool {
        let item = self.items[item_index];
        let mut packing = Packing::new(self.container);
        match packing.try_place(item_index, &item) {
            Some(p) => {
                trace!(
                    "[PACK] opened bin {} for item {item_index} placed as {}",
                    self.packings.len(),
                    p.dimensions
                );
                self.packings.push(packing);
                true
            }
            None => false,
        }
    }

    fn reject(&mut self, item_index: usize, kind: PackErrorKind) {
        let error = PackError {
            item_index,
            item: self.items[item_index],
            kind,
        };
        debug!("[PACK] {error}");
        self.errors.push(error);
    }
}

/// Indices of `items`, largest first: descending on the descending-sorted extents, stable for equal items.
pub fn item_placement_order(items: &[Item]) -> Vec<usize> {
    (0..items.len())
        .sorted_by(|&a, &b| {
            items[b]
                .dimensions
                .cmp_largest_first(&items[a].dimensions)
        })
        .collect_vec()
}
