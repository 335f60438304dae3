use itertools::Itertools;

use crate::entities::{Container, PackResult, Packing, Placement, Space};
use crate::io::ext_repr::{ExtContainer, ExtPackResult, ExtPacking, ExtPlacement, ExtSpace};

/// Exports a [`PackResult`] out of the library.
pub fn export_pack_result(container: &Container, result: &PackResult) -> ExtPackResult {
    ExtPackResult {
        packings: result
            .packings
            .iter()
            .map(|p| export_packing(container, p))
            .collect(),
        errors: result.errors.iter().map(|e| e.to_string()).collect(),
    }
}

pub fn export_packing(container: &Container, packing: &Packing) -> ExtPacking {
    ExtPacking {
        placements: packing.placements.iter().map(export_placement).collect_vec(),
        weight: packing.weight,
        spaces: packing
            .spaces
            .iter()
            .filter(|s| !s.is_degenerate())
            .map(export_space)
            .collect_vec(),
        density: packing.density(container),
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        item_index: placement.item_index,
        dimensions: placement.dimensions.into(),
        position: placement.position.into(),
        weight: placement.weight,
    }
}

pub fn export_space(space: &Space) -> ExtSpace {
    ExtSpace {
        dimensions: space.dimensions.into(),
        position: space.position.into(),
    }
}

/// Unbounded weight limits are left out, JSON has no representation for infinity.
pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        dimensions: container.dimensions.into(),
        weight_limit: Some(container.weight_limit).filter(|w| w.is_finite()),
    }
}
