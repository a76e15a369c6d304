use serde::Deserialize;
use std::path::PathBuf;

// Header row of the exported label map
pub const LABEL_MAP_HEADER: &str = "labels,id";

// A single COCO category; extra fields such as `supercategory` are ignored
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub name: String,
    pub id: i64,
}

// The part of a COCO annotation file the exporter reads
#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryRecord>,
}

/// Outcome of a successful dataset preparation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDataset {
    pub name: String,
    pub workspace: PathBuf,
    pub label_map_path: PathBuf,
    pub checkpoint_path: PathBuf,
}
