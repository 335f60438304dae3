use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Extents of the box, in any order
    pub dimensions: [f64; 3],
    /// Weight of the item, weightless if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtContainer {
    /// Extents of the container, in any order
    pub dimensions: [f64; 3],
    /// Maximum weight per bin, unbounded if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_limit: Option<f64>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Index of the item in the input list
    pub item_index: usize,
    /// Extents of the rotated item along the x, y and z axes of the bin
    pub dimensions: [f64; 3],
    /// Position of the item's minimum corner
    pub position: [f64; 3],
    pub weight: f64,
}

/// External representation of a free [`Space`](crate::entities::Space) within a bin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSpace {
    pub dimensions: [f64; 3],
    pub position: [f64; 3],
}

/// External representation of a [`Packing`](crate::entities::Packing).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPacking {
    pub placements: Vec<ExtPlacement>,
    /// Total weight of the placed items
    pub weight: f64,
    /// Remaining free spaces
    pub spaces: Vec<ExtSpace>,
    /// Ratio of the placed volume to the container volume
    pub density: f64,
}

/// External representation of a [`PackResult`](crate::entities::PackResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPackResult {
    pub packings: Vec<ExtPacking>,
    /// Human-readable description of every item that could not be packed
    pub errors: Vec<String>,
}
