//! CropWise CLI - crop recommendations from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Score crops against soil and climate readings"
)]
struct Cli {
    #[command(subcommand)]
    command: cropwise_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("cropwise {}", env!("CARGO_PKG_VERSION"));
    cropwise_cmd::run(cli.command).await
}
