use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::error;

use smart_nutrient::AppError;
use smart_nutrient::cli::{Cli, Commands};
use smart_nutrient::config::Config;
use smart_nutrient::utils::error::report_error;
use smart_nutrient::utils::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Single error boundary: anything reaching here is reported and fails the process
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            match e.downcast_ref::<AppError>() {
                Some(app_err) => report_error(app_err),
                None => report_error(&AppError::Io(format!("{:#}", e))),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    init_logging(cli.debug, &config.general.log_level)?;

    if cli.no_color || !config.general.color {
        colored::control::set_override(false);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Execute command; no subcommand runs the demonstration
    cli.command.unwrap_or(Commands::Demo).execute(&config, &mut out)?;
    out.flush()?;

    Ok(())
}
