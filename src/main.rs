use anyhow::{Context, Result};
use clap::Parser;

use serene::cli::{Cli, CliCommand, DesktopArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    serene::logging::init_tracing(cli.log_filter.as_deref())?;

    match cli.command.clone() {
        Some(CliCommand::Desktop(args)) => launch_desktop(&cli, args)?,
        None => launch_desktop(&cli, DesktopArgs::default())?,
        Some(command) => {
            let config = serene::AppConfig::discover(cli.data_dir.clone())
                .context("failed to resolve data directory")?;
            tracing::debug!(data_dir = %config.data_dir().display(), "running command");
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serene::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}

fn launch_desktop(cli: &Cli, args: DesktopArgs) -> Result<()> {
    let mut options = serene::DesktopOptions {
        data_dir: cli.data_dir.clone(),
        timetable_url: args.timetable,
        ..Default::default()
    };
    if let Some(breakpoint) = args.mobile_breakpoint {
        options.mobile_breakpoint = breakpoint;
    }
    serene::desktop::run(options)?;
    Ok(())
}
