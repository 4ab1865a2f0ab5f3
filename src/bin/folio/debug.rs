use std::io::Write as _;

use folio::config;

use crate::args;
use crate::error::Result;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded site record
    Config {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: args::FormatArg,

        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the site record built into the binary
    Builtin {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: args::FormatArg,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { format, config } => {
                let config = config.load_config()?;
                print_site(&config, (*format).into())?;
            }
            Self::Builtin { format } => {
                print_site(config::site(), (*format).into())?;
            }
        }

        Ok(())
    }
}

fn print_site(site: &config::SiteConfig, format: config::Format) -> Result<()> {
    let rendered = site.to_string_as(format)?;
    let mut stdout = anstream::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
