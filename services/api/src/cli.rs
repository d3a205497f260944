use crate::commands::{run_classify, run_list, run_stats, ClassifyArgs, ListArgs, StoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skill_tier::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Skill Tier Assessment",
    about = "Serve the candidate self-assessment API and inspect stored submissions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify an assessment JSON file and print the resulting tier
    Classify(ClassifyArgs),
    /// Inspect candidates persisted in the data file
    Candidates {
        #[command(subcommand)]
        command: CandidatesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CandidatesCommand {
    /// List candidates with optional tier filter, search, and ordering
    List(ListArgs),
    /// Print the total candidate count and the per-tier breakdown
    Stats(StoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Persist candidates to this JSON file instead of APP_DATA_FILE
    #[arg(long)]
    pub(crate) data_file: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Candidates {
            command: CandidatesCommand::List(args),
        } => run_list(args),
        Command::Candidates {
            command: CandidatesCommand::Stats(args),
        } => run_stats(args),
    }
}
