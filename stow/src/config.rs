use serde::{Deserialize, Serialize};

use stowage::util::SearchConfig;

/// Configuration of the stow driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StowConfig {
    /// Configuration of the smallest-container search
    pub search_config: SearchConfig,
    /// Number of containers reported in `smallest-n` mode, overrides `search_config.max_count`
    pub n_containers: usize,
    /// Include the remaining free spaces of every bin in the output
    #[serde(default)]
    pub export_spaces: bool,
}

impl Default for StowConfig {
    fn default() -> Self {
        Self {
            search_config: SearchConfig::default(),
            n_containers: 5,
            export_spaces: false,
        }
    }
}
