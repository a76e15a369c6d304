use chrono::{DateTime, TimeZone};
use log::info;

use crate::config::Args;
use crate::dataset_cli::DatasetCli;
use crate::error::{Error, Result};
use crate::label_map::export_label_map;
use crate::locator::LatestArtifactLocator;
use crate::types::PreparedDataset;
use crate::utils::{copy_into, dataset_name, ensure_directory};

/// Export the label map, create a dataset, fill its workspace with the label
/// map and the newest checkpoint, then push it.
pub fn prepare_dataset<Tz: TimeZone>(
    args: &Args,
    cli: &dyn DatasetCli,
    locator: &dyn LatestArtifactLocator,
    now: &DateTime<Tz>,
) -> Result<PreparedDataset>
where
    Tz::Offset: std::fmt::Display,
{
    let label_map = args.label_map_path();
    export_label_map(&args.input, &label_map)?;

    let name = dataset_name(&args.dataset_prefix, now);
    info!("Creating dataset {}", name);
    cli.create(&name)?;

    let workspace = ensure_directory(&args.code_dir.join(&name))?;
    let label_map_path = copy_into(&label_map, &workspace)?;

    let checkpoint = locator
        .locate()?
        .ok_or_else(|| Error::CheckpointNotFound {
            logs_dir: args.logs_dir(),
            marker: args.marker.clone(),
            prefix: args.checkpoint_prefix.clone(),
        })?;
    let checkpoint_path = copy_into(&checkpoint, &workspace)?;

    info!("Pushing {}", workspace.display());
    cli.push(&workspace, &args.push_message, &args.push_source)?;

    Ok(PreparedDataset {
        name,
        workspace,
        label_map_path,
        checkpoint_path,
    })
}
