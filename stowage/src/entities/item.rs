use std::fmt::{Display, Formatter};

use crate::error::{Result, ensure_input};
use crate::geometry::Dimensions;

/// Box to be packed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    pub dimensions: Dimensions,
    pub weight: f64,
}

impl Item {
    pub fn new(dimensions: impl Into<Dimensions>, weight: f64) -> Self {
        Item {
            dimensions: dimensions.into(),
            weight,
        }
    }

    /// Creates an item, rejecting non-positive extents and negative weights.
    pub fn try_new(dimensions: impl Into<Dimensions>, weight: f64) -> Result<Self> {
        let item = Item::new(dimensions, weight);
        item.validate()?;
        Ok(item)
    }

    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure_input!(
            self.dimensions.0.iter().all(|e| e.is_finite() && *e > 0.0),
            "item dimensions must be finite and positive, got {}",
            self.dimensions
        );
        ensure_input!(
            self.weight.is_finite() && self.weight >= 0.0,
            "item weight must be finite and non-negative, got {}",
            self.weight
        );
        Ok(())
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{dimensions: {}, weight: {}}}",
            self.dimensions, self.weight
        )
    }
}

/// Validates a complete item list as handed to one of the public operations.
pub(crate) fn validate_items(items: &[Item]) -> Result<()> {
    ensure_input!(!items.is_empty(), "item list is empty");
    items.iter().try_for_each(Item::validate)
}
