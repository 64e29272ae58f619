use crate::demo::{run_demo, run_readiness, run_score, DemoArgs, ReadinessArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nr12_core::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "NR-12 Assessment Service",
    about = "Score machine hazards and check NR-12 report readiness from the command line",
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
    /// Compute the HRN, risk tier and remediation deadline for one hazard
    Score(ScoreArgs),
    /// Evaluate the signing gates for a report snapshot stored as JSON
    Readiness(ReadinessArgs),
    /// Walk through scoring and readiness over a built-in sample report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Readiness(args) => run_readiness(args),
        Command::Demo(args) => run_demo(args),
    }
}
