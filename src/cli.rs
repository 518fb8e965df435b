use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::commands::{bmi, configure, dashboard, meals, profiles, recommend, track};
use crate::config::Config;
use crate::core::operations::NutrientOperations;
use crate::utils::error::AppResult;

#[derive(Parser)]
#[command(name = "smart-nutrient")]
#[command(about = "Nutrition tracking: BMI, dietary meal recommendations and intake lookup")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub debug: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    pub fn execute(self, config: &Config, out: &mut dyn Write) -> AppResult<()> {
        let ops = || NutrientOperations::from_config(config);

        match self {
            Commands::Demo => dashboard::handle_demo_command(config, &ops()?, out),
            Commands::Dashboard(args) => dashboard::handle_dashboard_command(config, &ops()?, &args, out),
            Commands::Recommend(args) => recommend::handle_recommend_command(config, &ops()?, &args, out),
            Commands::Track(args) => track::handle_track_command(config, &ops()?, &args, out),
            Commands::Bmi(args) => bmi::handle_bmi_command(&args, out),
            Commands::Meals(args) => meals::handle_meals_command(&ops()?, &args, out),
            Commands::Profiles => profiles::handle_profiles_command(&ops()?, out),
            Commands::Config(args) => configure::handle_config_command(config, args.command, out),
        }
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Run the demonstration: dashboard for the default user, then track the default meal
    Demo,

    /// Show profile, BMI and recommended meals for a user
    Dashboard(UserArgs),

    /// List meals matching a user's dietary requirements
    Recommend(RecommendArgs),

    /// Show the nutrient facts recorded for a meal
    Track(TrackArgs),

    /// Calculate BMI from weight (kg) and height (cm)
    Bmi(BmiArgs),

    /// List the meal catalog
    Meals(MealsArgs),

    /// List user profiles
    Profiles,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct UserArgs {
    #[arg(help = "User ID (defaults to general.default_user)")]
    pub user: Option<String>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct RecommendArgs {
    #[arg(help = "User ID (defaults to general.default_user)")]
    pub user: Option<String>,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct TrackArgs {
    #[arg(help = "Exact meal name")]
    pub meal: String,

    #[arg(short, long, help = "User ID (defaults to general.default_user)")]
    pub user: Option<String>,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct BmiArgs {
    #[arg(short, long, help = "Weight in kilograms", allow_negative_numbers = true)]
    pub weight: f64,

    #[arg(long, help = "Height in centimetres", allow_negative_numbers = true)]
    pub height: f64,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct MealsArgs {
    #[arg(short, long)]
    pub format: Option<ListFormat>,

    #[arg(long, help = "Show all available dietary tags")]
    pub tags: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum ListFormat {
    Simple,
    Table,
    Json,
}

#[derive(Args, Clone, Debug, PartialEq)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default configuration file path
    Path,
}
