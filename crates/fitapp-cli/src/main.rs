use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fitapp_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "fitapp-cli", version, about = "FitApp CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the onboarding questionnaire on stdin
    Onboard(commands::onboard::OnboardArgs),
    /// Show the onboarding questions
    Questions(commands::questions::QuestionsArgs),
    /// Compute goal progress from weigh-ins
    Progress(commands::progress::ProgressArgs),
    /// Print a motivational tip
    Tip(commands::tip::TipArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Log to stderr, filtered by `RUST_LOG` or else the configured level.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (config, load_error) = Config::load_or_default();
    init_logging(&config);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "using default configuration");
    }

    let result = match cli.command {
        Commands::Onboard(args) => commands::onboard::run(args),
        Commands::Questions(args) => commands::questions::run(args),
        Commands::Progress(args) => commands::progress::run(args, &config),
        Commands::Tip(args) => commands::tip::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
