//! COCO label map exporter and dataset packager
//!
//! This library converts the category list of a COCO annotation file into a
//! `labels,id` CSV label map and publishes it, together with the most recent
//! model checkpoint, as a dataset through an external dataset tool.

pub mod config;
pub mod dataset;
pub mod dataset_cli;
pub mod error;
pub mod label_map;
pub mod locator;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use dataset::prepare_dataset;
pub use dataset_cli::{DatasetCli, ProcessDatasetCli};
pub use error::{Error, Result};
pub use label_map::{export_label_map, read_categories, render_label_map, write_label_map};
pub use locator::{FsCheckpointLocator, LatestArtifactLocator};
pub use types::{CategoryRecord, PreparedDataset};
