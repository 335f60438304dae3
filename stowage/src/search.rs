use std::collections::HashSet;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;

use crate::entities::{Container, Item, validate_items};
use crate::error::{Result, ensure_input};
use crate::geometry::Dimensions;
use crate::geometry::orientation::orientations;
use crate::greedy;
use crate::pack::{GuillotinePacker, item_placement_order};
use crate::util::SearchConfig;

/// Smallest container (by volume, then by sum of extents) that holds all `items` in a single bin.
/// Falls back to the smallest unvalidated candidate if none of them packs successfully.
pub fn find_smallest_container(items: &[Item]) -> Result<Dimensions> {
    Ok(ContainerSearch::new(items, SearchConfig::default())?.smallest_container())
}

/// Up to `max_count` containers that hold all `items` in a single bin, smallest first.
pub fn find_smallest_containers(items: &[Item], max_count: usize) -> Result<Vec<Dimensions>> {
    let config = SearchConfig {
        max_count,
        ..SearchConfig::default()
    };
    Ok(ContainerSearch::new(items, config)?.smallest_containers())
}

/// Smallest container that holds all `items` in a single bin and fits within `limit`.
/// If none of the candidates respects the limit, the smallest one is returned regardless.
pub fn find_smallest_container_with_limits(items: &[Item], limit: Dimensions) -> Result<Dimensions> {
    ContainerSearch::new(items, SearchConfig::default())?.smallest_container_within(limit)
}

/// Heuristic search for small containers able to hold a set of items in one bin.
///
/// Starting from the largest item, a container shape is grown item by item (largest first).
/// Each step tries every orientation of the current shape and of the next item, extending one axis
/// by the item while the other two take the maximum of both. All sufficiently large shapes become
/// candidates, but only the most cube-like one of each step is grown further.
/// Candidates are then validated, smallest first, by actually packing the items.
pub struct ContainerSearch<'a> {
    pub items: &'a [Item],
    pub config: SearchConfig,
}

/// A shape to grow further with the item at `item_index` (in placement order).
#[derive(Clone, Copy, Debug)]
struct Frame {
    shape: Dimensions,
    item_index: usize,
}

type ShapeKey = [OrderedFloat<f64>; 3];

fn shape_key(d: &Dimensions) -> ShapeKey {
    d.0.map(OrderedFloat)
}

/// Insertion-ordered set of normalized shapes.
#[derive(Default)]
struct ShapeSet {
    shapes: Vec<Dimensions>,
    keys: HashSet<ShapeKey>,
}

impl ShapeSet {
    fn insert(&mut self, shape: Dimensions) -> bool {
        let new = self.keys.insert(shape_key(&shape));
        if new {
            self.shapes.push(shape);
        }
        new
    }

    fn contains(&self, shape: &Dimensions) -> bool {
        self.keys.contains(&shape_key(shape))
    }
}

impl<'a> ContainerSearch<'a> {
    pub fn new(items: &'a [Item], config: SearchConfig) -> Result<Self> {
        validate_items(items)?;
        Ok(Self { items, config })
    }

    /// See [`find_smallest_container`].
    pub fn smallest_container(&self) -> Dimensions {
        if let [item] = self.items {
            return item.dimensions.sorted_asc();
        }
        let candidates = self.candidates();
        match self.validate(&candidates, 1).first() {
            Some(c) => self.greedy_override(*c),
            None => match candidates.first() {
                Some(c) => {
                    warn!("[SEARCH] no candidate packs all items in one bin, falling back to {c}");
                    self.greedy_override(*c)
                }
                None => {
                    warn!("[SEARCH] no candidates generated, falling back to the greedy box");
                    greedy::estimate(self.items).sorted_asc()
                }
            },
        }
    }

    /// See [`find_smallest_containers`], with `max_count` taken from the config.
    pub fn smallest_containers(&self) -> Vec<Dimensions> {
        let max_count = self.config.max_count;
        if let [item] = self.items {
            return match max_count {
                0 => vec![],
                _ => vec![item.dimensions.sorted_asc()],
            };
        }
        let candidates = self.candidates();
        self.validate(&candidates, max_count)
            .into_iter()
            .map(|c| self.greedy_override(c))
            .unique_by(shape_key)
            .sorted_by_key(Dimensions::size_key)
            .collect_vec()
    }

    /// See [`find_smallest_container_with_limits`].
    /// Considers the first `limit_search_count` validated containers of the config.
    pub fn smallest_container_within(&self, limit: Dimensions) -> Result<Dimensions> {
        ensure_input!(
            limit.0.iter().all(|e| e.is_finite() && *e > 0.0),
            "limit dimensions must be finite and positive, got {limit}"
        );
        let limit = limit.sorted_asc();
        let search = ContainerSearch {
            items: self.items,
            config: SearchConfig {
                max_count: self.config.limit_search_count,
                ..self.config
            },
        };
        let possible = search.smallest_containers();

        let selected = match possible.iter().find(|c| c.fits_in(&limit)) {
            Some(c) => *c,
            None => {
                debug!("[SEARCH] none of {} containers fits within {limit}", possible.len());
                match possible.first() {
                    Some(c) => *c,
                    None => self.smallest_container(),
                }
            }
        };
        Ok(selected)
    }

    /// Generates all candidate shapes, normalized (ascending extents) and sorted by volume, then by sum of extents.
    pub fn candidates(&self) -> Vec<Dimensions> {
        let start = Instant::now();
        let shapes = item_placement_order(self.items)
            .into_iter()
            .map(|i| self.items[i].dimensions)
            .collect_vec();
        let min_volume = self.items.iter().map(Item::volume).sum::<f64>();

        let mut possible = ShapeSet::default();
        let mut invalid = ShapeSet::default();
        let mut worklist = vec![Frame {
            shape: shapes[0],
            item_index: 1,
        }];

        while let Some(Frame { shape, item_index }) = worklist.pop() {
            let Some(item) = shapes.get(item_index) else {
                continue;
            };
            let fresh = grow(&shape, item)
                .into_iter()
                .filter(|c| !possible.contains(c) && !invalid.contains(c))
                .collect_vec();

            for c in fresh.iter().sorted_by_key(|c| c.size_key()) {
                match c.volume() >= min_volume {
                    true => possible.insert(*c),
                    false => invalid.insert(*c),
                };
            }

            //only the most cube-like shape is grown further
            let most_cubic = fresh.iter().min_by_key(|c| {
                (
                    OrderedFloat(c.std_dev()),
                    OrderedFloat(c.volume()),
                    OrderedFloat(c.perimeter_sum()),
                )
            });
            if let Some(next) = most_cubic {
                debug!(
                    "[SEARCH] step {item_index}: {} fresh shapes, growing {next}",
                    fresh.len()
                );
                worklist.push(Frame {
                    shape: *next,
                    item_index: item_index + 1,
                });
            }
        }

        let candidates = possible
            .shapes
            .into_iter()
            .sorted_by_key(Dimensions::size_key)
            .collect_vec();

        info!(
            "[SEARCH] generated {} candidates ({} below the volume bound) in {:.3}ms",
            candidates.len(),
            invalid.shapes.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        candidates
    }

    /// Packs the items into each candidate in turn and keeps up to `max_count` that hold everything in a single bin.
    pub fn validate(&self, candidates: &[Dimensions], max_count: usize) -> Vec<Dimensions> {
        let budget = self.config.validation_budget.unwrap_or(usize::MAX);
        let mut accepted = vec![];
        for (n_validated, c) in candidates.iter().enumerate() {
            if accepted.len() >= max_count {
                break;
            }
            if n_validated >= budget {
                warn!("[SEARCH] validation budget of {budget} candidates exhausted");
                break;
            }
            let container = Container::unbounded(*c);
            let result = GuillotinePacker::new(&container, self.items).solve();
            if result.is_single_bin() {
                debug!("[SEARCH] candidate {c} accepted");
                accepted.push(*c);
            } else {
                debug!(
                    "[SEARCH] candidate {c} rejected ({} bins, {} errors)",
                    result.packings.len(),
                    result.errors.len()
                );
            }
        }
        info!(
            "[SEARCH] {} of {} candidates accepted",
            accepted.len(),
            candidates.len()
        );
        accepted
    }

    /// The greedy box replaces `container` if it is no larger along any axis.
    fn greedy_override(&self, container: Dimensions) -> Dimensions {
        match greedy::fits_in(&Container::unbounded(container), self.items) {
            true => {
                let greedy_box = greedy::estimate(self.items).sorted_asc();
                debug!("[SEARCH] greedy box {greedy_box} replaces {container}");
                greedy_box
            }
            false => container,
        }
    }
}

/// All shapes obtained by growing `shape` with `item`: for each of the 3×3 orientation pairs, one axis is
/// extended by the item while the two others take the maximum of both.
/// Shapes are normalized to ascending extents and deduplicated, keeping the first occurrence.
pub fn grow(shape: &Dimensions, item: &Dimensions) -> Vec<Dimensions> {
    let item_orientations = orientations(item);
    orientations(shape)
        .into_iter()
        .cartesian_product(item_orientations)
        .flat_map(|(c, b)| {
            (0..3).map(move |axis| {
                let mut grown = [0.0; 3];
                for (k, g) in grown.iter_mut().enumerate() {
                    *g = match k == axis {
                        true => c[k] + b[k],
                        false => f64::max(c[k], b[k]),
                    };
                }
                Dimensions(grown).sorted_asc()
            })
        })
        .unique_by(shape_key)
        .collect_vec()
}
