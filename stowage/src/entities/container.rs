use crate::error::{Result, ensure_input};
use crate::geometry::Dimensions;
use crate::util::FPA;

/// A box in which [`Item`](crate::entities::Item)s are packed, possibly across multiple bins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub dimensions: Dimensions,
    /// Maximum total weight per bin, [`f64::INFINITY`] if unbounded
    pub weight_limit: f64,
}

impl Container {
    pub fn new(dimensions: impl Into<Dimensions>, weight_limit: f64) -> Self {
        Container {
            dimensions: dimensions.into(),
            weight_limit,
        }
    }

    /// Container without any weight limit, used for the candidates of the container search.
    pub fn unbounded(dimensions: impl Into<Dimensions>) -> Self {
        Container::new(dimensions, f64::INFINITY)
    }

    /// Creates a container, rejecting negative extents and invalid weight limits.
    pub fn try_new(dimensions: impl Into<Dimensions>, weight_limit: f64) -> Result<Self> {
        let container = Container::new(dimensions, weight_limit);
        container.validate()?;
        Ok(container)
    }

    /// Extents of a bin of this container: longest along x, shortest along z.
    pub fn bin_dimensions(&self) -> Dimensions {
        self.dimensions.sorted_desc()
    }

    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    pub fn is_degenerate(&self) -> bool {
        FPA(self.volume()).is_zero()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_input!(
            self.dimensions.0.iter().all(|e| e.is_finite() && *e >= 0.0),
            "container dimensions must be finite and non-negative, got {}",
            self.dimensions
        );
        ensure_input!(
            !self.weight_limit.is_nan() && self.weight_limit >= 0.0,
            "container weight limit must be non-negative, got {}",
            self.weight_limit
        );
        Ok(())
    }
}
