use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use kasse::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for kasse::AppCommand {
    fn from(cmd: Commands) -> kasse::AppCommand {
        match cmd {
            Commands::Dashboard => kasse::AppCommand::Dashboard,
            Commands::Profile => kasse::AppCommand::Profile,
            Commands::Metals { weight, unit } => kasse::AppCommand::Metals { weight, unit },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display balance, averages and the transaction list
    Dashboard,
    /// Display savings rate, budget split, spending and trend
    Profile,
    /// Display precious-metal quotes and the gold calculator
    Metals {
        /// Weight to value with the calculator
        #[arg(long, default_value_t = 1.0)]
        weight: f64,
        /// Weight unit: oz, g, kg or lb
        #[arg(long, default_value = "oz")]
        unit: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => kasse::cli::setup::setup(),
        Some(cmd) => kasse::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
