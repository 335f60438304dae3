mod container;
mod item;
mod pack_result;
mod packing;
mod placement;
mod space;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use item::Item;

pub(crate) use item::validate_items;

#[doc(inline)]
pub use pack_result::{PackError, PackErrorKind, PackResult};

#[doc(inline)]
pub use packing::Packing;

#[doc(inline)]
pub use placement::Placement;

#[doc(inline)]
pub use space::Space;
