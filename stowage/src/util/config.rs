use serde::{Deserialize, Serialize};

/// Configuration of the smallest-container search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of validated containers to collect
    pub max_count: usize,
    /// Number of validated containers collected before filtering them against a size limit
    pub limit_search_count: usize,
    /// Maximum number of candidate containers to validate by packing. Unbounded if undefined
    #[serde(default)]
    pub validation_budget: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_count: 1,
            limit_search_count: 5,
            validation_budget: None,
        }
    }
}
