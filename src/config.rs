use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for exporting a COCO label map and publishing it
/// with the latest checkpoint as a dataset.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// COCO annotation JSON containing a `categories` list
    pub input: PathBuf,

    /// Directory the label map CSV is written to
    #[arg(long = "output_dir", default_value = "/onepanel/output")]
    pub output_dir: PathBuf,

    /// File name of the label map CSV
    #[arg(long = "csv_name", default_value = "classes.csv", value_parser = validate_non_empty)]
    pub csv_name: String,

    /// Directory under which dataset workspaces live
    #[arg(long = "code_dir", default_value = "/onepanel/code")]
    pub code_dir: PathBuf,

    /// Training logs directory searched for checkpoints [default: <output_dir>/logs]
    #[arg(long = "logs_dir")]
    pub logs_dir: Option<PathBuf>,

    /// Substring identifying the checkpoint directory inside the logs tree
    #[arg(long = "marker", default_value = "cvat", value_parser = validate_non_empty)]
    pub marker: String,

    /// File name prefix of checkpoint files
    #[arg(long = "checkpoint_prefix", default_value = "mask")]
    pub checkpoint_prefix: String,

    /// Prefix of the generated dataset name
    #[arg(long = "dataset_prefix", default_value = "maskrcnn-model-output", value_parser = validate_non_empty)]
    pub dataset_prefix: String,

    /// Dataset-management command used to create and push datasets
    #[arg(long = "cli", env = "DATASET_CLI", default_value = "onepanel", value_parser = validate_non_empty)]
    pub cli: String,

    /// Message attached to the dataset push
    #[arg(long = "push_message", default_value = "update")]
    pub push_message: String,

    /// Source recorded for the dataset push
    #[arg(long = "push_source", default_value = "job")]
    pub push_source: String,

    /// Only write the label map CSV, skip dataset creation and push
    #[arg(long = "export_only")]
    pub export_only: bool,
}

impl Args {
    /// Where the label map CSV is written
    pub fn label_map_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_name)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.logs_dir
            .clone()
            .unwrap_or_else(|| self.output_dir.join("logs"))
    }
}

// Reject empty strings for options that end up in paths or command lines
fn validate_non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
