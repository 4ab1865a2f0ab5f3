use std::path;

use anyhow::Context as _;
use folio::config;

use crate::error::Result;

/// Site metadata for a static blog/portfolio generator
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "folio", version, about)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum Command {
    Init(crate::init::InitArgs),
    #[command(subcommand)]
    Debug(crate::debug::DebugCommands),
}

impl Command {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _folio.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<config::SiteConfig> {
        let config = if let Some(config_path) = self.config.as_deref() {
            config::SiteConfig::from_file(config_path)
                .with_context(|| format!("Error reading config file {}", config_path.display()))?
        } else {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            config::SiteConfig::from_cwd(cwd)?
        };
        Ok(config)
    }
}

/// Output format for printed records
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum FormatArg {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl From<FormatArg> for config::Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Yaml => config::Format::Yaml,
            FormatArg::Json => config::Format::Json,
            FormatArg::Toml => config::Format::Toml,
        }
    }
}
