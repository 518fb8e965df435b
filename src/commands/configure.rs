use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::error::AppResult;
use std::io::Write;

pub fn handle_config_command(
    config: &Config,
    command: Option<ConfigCommands>,
    out: &mut dyn Write,
) -> AppResult<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(config, out),
        Some(ConfigCommands::Path) => handle_path_command(out),
        None => handle_config_help(out),
    }
}

fn handle_show_command(config: &Config, out: &mut dyn Write) -> AppResult<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

fn handle_path_command(out: &mut dyn Write) -> AppResult<()> {
    writeln!(out, "{}", Config::config_file_path().display())?;
    Ok(())
}

fn handle_config_help(out: &mut dyn Write) -> AppResult<()> {
    writeln!(out, "⚙️  Configuration Management")?;
    writeln!(out, "==========================")?;
    writeln!(out, "Available configuration commands:")?;
    writeln!(out, "  smart-nutrient config show    - Print the effective configuration as TOML")?;
    writeln!(out, "  smart-nutrient config path    - Print the configuration file location")?;
    writeln!(out)?;
    writeln!(
        out,
        "Save the output of `config show` to {} to customise profiles and meals.",
        Config::config_file_path().display()
    )?;
    Ok(())
}
