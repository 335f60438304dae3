//! Packing of rectangular boxes into containers, and a search for the smallest container able to hold a set of boxes.
//!
//! Packing is first-fit, largest item first: each bin keeps a list of free spaces which is split
//! guillotine-style around every placed item.

/// Entities to model the packing problem: items, containers, bins and their contents
pub mod entities;

/// Geometric primitives and the orientation/fit logic
pub mod geometry;

/// Importing items and containers into, and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Splitting free spaces after an item has been placed
pub mod split;

/// Greedy stacking of all items in a single bin
pub mod greedy;

/// The first-fit guillotine packer
pub mod pack;

/// Search for the smallest container holding all items in a single bin
pub mod search;

mod error;

#[doc(inline)]
pub use error::{Result, StowageError};
#[doc(inline)]
pub use pack::pack;
#[doc(inline)]
pub use search::{
    find_smallest_container, find_smallest_container_with_limits, find_smallest_containers,
};
