mod args;
mod debug;
mod error;
mod init;

use std::io::Write as _;

use clap::Parser as _;
use proc_exit::WithCodeResultExt as _;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    let colored_stderr = anstream::AutoStream::choice(&std::io::stderr())
        != anstream::ColorChoice::Never;
    init_logging(cli.verbose.log_level(), colored_stderr);

    cli.command
        .run()
        .map_err(|e| format!("{e:?}"))
        .with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

fn init_logging(level: Option<log::Level>, colored: bool) {
    let Some(level) = level else {
        return;
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());

    if level == log::Level::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            let style = level_style(record.level());
            writeln!(
                f,
                "{style}[{}]{style:#} {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        });
    }

    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default().bold(),
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug => anstyle::AnsiColor::Blue.on_default(),
        log::Level::Trace => anstyle::AnsiColor::Cyan.on_default(),
    }
}
