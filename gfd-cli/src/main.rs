//! GFD CLI - Command line tool for preparing dashboard fixture data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gfd-cli",
    version,
    about = "Global financial dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gfd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gfd_cmd::run(cli.command).await
}
