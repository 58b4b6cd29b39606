use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use echoscore::config::Config;
use echoscore::ComparisonEngine;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with normalization options and scoring weights.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one attempt and print its word diff.
    Compare(cmd::compare::CompareArgs),
    /// Score every attempt listed in a CSV file.
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Flags live in the subcommand's matches, not the root
    let (cli_config, sub_matches) = match &cli.command {
        Commands::Compare(args) => (&args.config, matches.subcommand_matches("compare")),
        Commands::Batch(args) => (&args.config, matches.subcommand_matches("batch")),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let engine = ComparisonEngine::new(config).unwrap_or_else(|e| {
        error!("Invalid configuration: {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Compare(args) => cmd::compare::run(args, &engine),
        Commands::Batch(args) => cmd::batch::run(args, &engine),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
