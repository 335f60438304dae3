use serde::{Deserialize, Serialize};

use crate::config::StowConfig;
use crate::io::cli::Mode;
use stowage::io::ext_repr::{ExtContainer, ExtItem, ExtPackResult};

/// Contents of an input file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// Container to pack into, required in `pack` mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ExtContainer>,
    pub items: Vec<ExtItem>,
    /// Maximum container extents, required in `smallest-within` mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<[f64; 3]>,
}

/// Result of one of the operations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ExtOutcome {
    Packing(ExtPackResult),
    Container([f64; 3]),
    Containers(Vec<[f64; 3]>),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StowOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub mode: Mode,
    pub config: StowConfig,
    pub result: ExtOutcome,
    pub run_time_ms: u64,
}
