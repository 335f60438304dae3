mod cuboid;
mod dimensions;
mod point;

/// Orientation enumeration and the fit test of a box inside a free space
pub mod orientation;

#[doc(inline)]
pub use cuboid::Cuboid;
#[doc(inline)]
pub use dimensions::Dimensions;
#[doc(inline)]
pub use point::Point;
