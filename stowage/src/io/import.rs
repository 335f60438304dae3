use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use rayon::prelude::*;

use crate::entities::{Container, Item};
use crate::geometry::Dimensions;
use crate::io::ext_repr::{ExtContainer, ExtItem};

/// Imports a single item. A missing weight is treated as 0.
pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    let item = Item::try_new(ext_item.dimensions, ext_item.weight.unwrap_or(0.0))?;
    Ok(item)
}

/// Imports a list of items, preserving their order (which defines their index).
pub fn import_items(ext_items: &[ExtItem]) -> Result<Vec<Item>> {
    ensure!(!ext_items.is_empty(), "the instance does not contain any items");
    ext_items
        .par_iter()
        .enumerate()
        .map(|(i, ext_item)| import_item(ext_item).with_context(|| format!("invalid item {i}")))
        .collect::<Result<Vec<Item>>>()
}

/// Imports a container. A missing weight limit is treated as unbounded.
pub fn import_container(ext_container: &ExtContainer) -> Result<Container> {
    let weight_limit = ext_container.weight_limit.unwrap_or(f64::INFINITY);
    let container = Container::try_new(ext_container.dimensions, weight_limit)
        .context("invalid container")?;
    Ok(container)
}

/// Imports the limiting extents used by the limited container search.
pub fn import_limit(limit: [f64; 3]) -> Result<Dimensions> {
    ensure!(
        limit.iter().all(|e| e.is_finite() && *e > 0.0),
        "limit dimensions must be finite and positive, got {:?}",
        limit.iter().collect_vec()
    );
    Ok(Dimensions(limit))
}
