use std::path;

use anyhow::Context as _;

use crate::error::Result;

/// Create a new project with the built-in site record
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        folio::create_new_project(&self.directory)
            .context("Could not create a new folio project")?;
        log::info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}
