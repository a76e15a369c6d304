use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

use labelmap2dataset::{
    export_label_map, prepare_dataset, Args, FsCheckpointLocator, ProcessDatasetCli,
};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.input.exists() {
        error!("The specified input does not exist: {}", args.input.display());
        return ExitCode::FAILURE;
    }

    if args.export_only {
        return match export_label_map(&args.input, &args.label_map_path()) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to export label map: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    info!("Starting dataset preparation...");
    let cli = ProcessDatasetCli::new(&args.cli);
    let locator = FsCheckpointLocator::new(
        args.logs_dir(),
        &args.marker,
        &args.checkpoint_prefix,
    );

    match prepare_dataset(&args, &cli, &locator, &chrono::Local::now()) {
        Ok(dataset) => {
            println!("\n\n\n");
            println!("Dataset Created with Name: {}", dataset.name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to prepare dataset: {}", e);
            ExitCode::FAILURE
        }
    }
}
