use chrono::{DateTime, TimeZone};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// Timestamp layout appended to generated dataset names
pub const DATASET_STAMP_FORMAT: &str = "%m%d%Y%H%M%S";

/// Parse a JSON file by streaming it through a buffered reader instead of
/// loading the whole document into memory first.
pub fn read_and_parse_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a dataset name of the form `<prefix>-<MMDDYYYYHHMMSS>`
pub fn dataset_name<Tz: TimeZone>(prefix: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let name = format!("{}-{}", prefix, now.format(DATASET_STAMP_FORMAT));
    sanitize_filename::sanitize(name)
}

/// Create a directory (and its parents) unless it is already there
pub fn ensure_directory(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        debug!("Directory {:?} already exists.", path);
    } else {
        if path.exists() {
            warn!("{:?} exists but is not a directory.", path);
        }
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(path.to_path_buf())
}

/// Copy `file` into `dir`, keeping its file name, and return the new path
pub fn copy_into(file: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = file.file_name().ok_or_else(|| {
        Error::io(
            file,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let target = dir.join(file_name);
    fs::copy(file, &target).map_err(|e| {
        // A readable source means the destination side failed
        if file.is_file() {
            Error::io(&target, e)
        } else {
            Error::io(file, e)
        }
    })?;
    debug!("Copied {} -> {}", file.display(), target.display());
    Ok(target)
}
