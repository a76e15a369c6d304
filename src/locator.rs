//! Checkpoint discovery
//!
//! Finds the directory under the training logs that holds the checkpoints
//! (identified by a marker substring in its path) and picks the most
//! recently modified checkpoint file in it.

use glob::glob;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Something that can point at the newest artifact of a run, if any
pub trait LatestArtifactLocator {
    fn locate(&self) -> Result<Option<PathBuf>>;
}

/// Locates the newest `<prefix>*` file in the last `<marker>` directory of a logs tree
#[derive(Debug, Clone)]
pub struct FsCheckpointLocator {
    pub logs_dir: PathBuf,
    pub marker: String,
    pub prefix: String,
}

impl FsCheckpointLocator {
    pub fn new(logs_dir: impl Into<PathBuf>, marker: &str, prefix: &str) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            marker: marker.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Walk the logs tree top-down in name order and return the last
    /// directory whose path below `logs_dir` contains the marker.
    pub fn find_checkpoint_dir(&self) -> Result<Option<PathBuf>> {
        if !self.logs_dir.is_dir() {
            return Err(Error::LogsDirMissing(self.logs_dir.clone()));
        }

        let mut found = None;
        for entry in WalkDir::new(&self.logs_dir)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| Error::Walk {
                path: self.logs_dir.clone(),
                source,
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.logs_dir)
                .unwrap_or(entry.path());
            if relative.to_string_lossy().contains(self.marker.as_str()) {
                found = Some(entry.into_path());
            }
        }

        match &found {
            Some(dir) => debug!("Checkpoint directory: {}", dir.display()),
            None => warn!(
                "No directory containing '{}' under {}",
                self.marker,
                self.logs_dir.display()
            ),
        }
        Ok(found)
    }

    /// Return the most recently modified `<prefix>*` file in `dir`
    pub fn newest_checkpoint(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let pattern = format!(
            "{}/{}*",
            glob::Pattern::escape(&dir.to_string_lossy()),
            glob::Pattern::escape(&self.prefix)
        );
        let entries = glob(&pattern).map_err(|source| Error::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable checkpoint candidate: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let modified = path
                .metadata()
                .and_then(|meta| meta.modified())
                .map_err(|e| Error::io(&path, e))?;
            let is_newer = match &newest {
                Some((time, current)) => (modified, &path) > (*time, current),
                None => true,
            };
            if is_newer {
                newest = Some((modified, path));
            }
        }
        Ok(newest.map(|(_, path)| path))
    }
}

impl LatestArtifactLocator for FsCheckpointLocator {
    fn locate(&self) -> Result<Option<PathBuf>> {
        let dir = match self.find_checkpoint_dir()? {
            Some(dir) => dir,
            None => return Ok(None),
        };
        let checkpoint = self.newest_checkpoint(&dir)?;
        if let Some(path) = &checkpoint {
            info!("Latest checkpoint: {}", path.display());
        }
        Ok(checkpoint)
    }
}
