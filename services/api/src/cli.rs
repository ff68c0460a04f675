use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_profile, DemoArgs, ProfileArgs};
use crate::error::ApiError;
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "wijkscan",
    about = "Parse and score Dutch open-data location statistics",
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
    /// Parse and score a location payload against a national payload
    Profile(ProfileArgs),
    /// Run the full pipeline on embedded sample data
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

pub(crate) async fn run() -> Result<(), ApiError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Profile(args) => run_profile(args),
        Command::Demo(args) => run_demo(args),
    }
}
