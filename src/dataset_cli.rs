use log::info;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Operations on the external dataset-management tool
pub trait DatasetCli {
    /// Create a new, empty dataset called `name`
    fn create(&self, name: &str) -> Result<()>;

    /// Publish the contents of `workspace` as a new dataset version
    fn push(&self, workspace: &Path, message: &str, source: &str) -> Result<()>;
}

/// Runs the dataset tool as a child process, e.g. `onepanel datasets create <name>`
#[derive(Debug, Clone)]
pub struct ProcessDatasetCli {
    pub program: String,
}

impl ProcessDatasetCli {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn run(&self, args: &[&str], current_dir: Option<&Path>) -> Result<()> {
        let command = format!("{} {}", self.program, args.join(" "));
        info!("Running `{}`", command);

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| Error::CommandSpawn {
            command: command.clone(),
            source,
        })?;
        if !status.success() {
            return Err(Error::CommandFailed { command, status });
        }
        Ok(())
    }
}

impl Default for ProcessDatasetCli {
    fn default() -> Self {
        Self::new("onepanel")
    }
}

impl DatasetCli for ProcessDatasetCli {
    fn create(&self, name: &str) -> Result<()> {
        self.run(&["datasets", "create", name], None)
    }

    fn push(&self, workspace: &Path, message: &str, source: &str) -> Result<()> {
        self.run(
            &["datasets", "push", "-m", message, "--source", source],
            Some(workspace),
        )
    }
}
