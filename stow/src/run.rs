use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;
use thousands::Separable;

use crate::config::StowConfig;
use crate::io::cli::Mode;
use crate::io::output::{ExtInstance, ExtOutcome};
use stowage::io::{export, import};
use stowage::search::ContainerSearch;
use stowage::util::SearchConfig;

/// Runs the operation selected by `mode` on an instance.
pub fn run(instance: &ExtInstance, mode: Mode, config: &StowConfig) -> Result<ExtOutcome> {
    let items = import::import_items(&instance.items)?;
    info!(
        "[RUN] {} items, total volume {}",
        items.len(),
        (items.iter().map(|i| i.volume()).sum::<f64>().round() as u64).separate_with_commas()
    );

    let outcome = match mode {
        Mode::Pack => {
            let ext_container = instance
                .container
                .as_ref()
                .context("a container is required to pack")?;
            let container = import::import_container(ext_container)?;
            let result = stowage::pack(&container, &items)?;
            let mean_density = match result.packings.len() {
                0 => 0.0,
                n => result.packings.iter().map(|p| p.density(&container)).sum::<f64>() / n as f64,
            };
            info!(
                "[RUN] {} of {} items packed in {} bin(s), {} rejected, mean density {:.3}%",
                result.n_placed(),
                items.len(),
                result.packings.len(),
                result.errors.len(),
                mean_density * 100.0
            );
            let mut ext_result = export::export_pack_result(&container, &result);
            if !config.export_spaces {
                ext_result.packings.iter_mut().for_each(|p| p.spaces.clear());
            }
            ExtOutcome::Packing(ext_result)
        }
        Mode::Smallest => {
            let search = ContainerSearch::new(&items, config.search_config)?;
            let smallest = search.smallest_container();
            info!("[RUN] smallest container: {smallest}");
            ExtOutcome::Container(smallest.into())
        }
        Mode::SmallestN => {
            let search_config = SearchConfig {
                max_count: config.n_containers,
                ..config.search_config
            };
            let containers = ContainerSearch::new(&items, search_config)?.smallest_containers();
            info!(
                "[RUN] {} container(s): {}",
                containers.len(),
                containers.iter().join(", ")
            );
            ExtOutcome::Containers(containers.into_iter().map_into().collect())
        }
        Mode::SmallestWithin => {
            let limit = instance
                .limit
                .context("a limit is required to search within")?;
            let limit = import::import_limit(limit)?;
            let search = ContainerSearch::new(&items, config.search_config)?;
            let selected = search.smallest_container_within(limit)?;
            info!("[RUN] smallest container within {limit}: {selected}");
            ExtOutcome::Container(selected.into())
        }
    };
    Ok(outcome)
}
